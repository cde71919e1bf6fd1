//! Mock implementations of the explorer and balance clients.
//!
//! - [`MockExplorerClient`] - Mock implementation of [`ExplorerClientTrait`]
//! - [`MockBalanceClient`] - Mock implementation of [`BalanceClientTrait`]

use alloy::primitives::U256;
use async_trait::async_trait;
use contract_ledger::{
	models::{ExplorerResponse, NetworkEndpoints},
	services::{
		blockchain::{BalanceClientTrait, BlockChainError},
		explorer::{ExplorerClientTrait, ExplorerError},
	},
};
use mockall::mock;

mock! {
	/// Mock explorer answering source-code lookups without network calls.
	pub ExplorerClient {}

	#[async_trait]
	impl ExplorerClientTrait for ExplorerClient {
		async fn get_source_code(
			&self,
			endpoints: &NetworkEndpoints,
			address: &str,
		) -> Result<ExplorerResponse, ExplorerError>;
	}
}

mock! {
	/// Mock node answering balance lookups without network calls.
	pub BalanceClient {}

	#[async_trait]
	impl BalanceClientTrait for BalanceClient {
		async fn get_native_balance(
			&self,
			rpc_url: &str,
			address: &str,
		) -> Result<U256, BlockChainError>;
	}
}
