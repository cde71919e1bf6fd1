//! Core blockchain client interface.

use alloy::primitives::U256;
use async_trait::async_trait;

use crate::services::blockchain::BlockChainError;

/// Native balance lookup against a node RPC endpoint
#[async_trait]
pub trait BalanceClientTrait: Send + Sync {
	/// Returns the latest native balance of `address`, in the chain's smallest unit
	///
	/// # Arguments
	/// * `rpc_url` - JSON-RPC endpoint of the network
	/// * `address` - Contract address as read from the candidate list
	async fn get_native_balance(&self, rpc_url: &str, address: &str)
		-> Result<U256, BlockChainError>;
}
