//! EVM-compatible balance client.
//!
//! Sends `eth_getBalance` for the EIP-55 checksummed form of each address over plain
//! JSON-RPC 2.0 HTTP requests. The node URL is passed per call, so one client serves every
//! network.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};
use std::{str::FromStr, time::Duration};

use crate::services::blockchain::{BalanceClientTrait, BlockChainError};

/// Client for Ethereum Virtual Machine (EVM) compatible nodes
#[derive(Clone, Debug)]
pub struct EvmClient {
	client: Client,
}

impl EvmClient {
	/// Creates a client whose requests time out after `timeout`
	pub fn new(timeout: Duration) -> Result<Self, BlockChainError> {
		let client = ClientBuilder::new().timeout(timeout).build().map_err(|e| {
			BlockChainError::internal_error(format!("Failed to create HTTP client: {}", e))
		})?;
		Ok(Self::new_with_client(client))
	}

	pub fn new_with_client(client: Client) -> Self {
		Self { client }
	}

	/// Sends a JSON-RPC 2.0 request and returns the decoded response envelope
	async fn send_raw_request(
		&self,
		rpc_url: &str,
		method: &str,
		params: Value,
	) -> Result<Value, BlockChainError> {
		let request = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params
		});

		let response = self
			.client
			.post(rpc_url)
			.json(&request)
			.send()
			.await?
			.error_for_status()?;

		response
			.json::<Value>()
			.await
			.map_err(|e| BlockChainError::request_error(format!("Failed to decode response: {}", e)))
	}
}

/// EIP-55 checksummed form of `address`
///
/// # Errors
/// Returns `BlockChainError::InvalidAddress` if `address` is not 20 hex-encoded bytes
pub fn to_checksum_address(address: &str) -> Result<String, BlockChainError> {
	let parsed = Address::from_str(address.trim())
		.map_err(|e| BlockChainError::invalid_address(format!("{} ({})", address, e)))?;
	Ok(parsed.to_checksum(None))
}

#[async_trait]
impl BalanceClientTrait for EvmClient {
	/// Retrieves the balance at the latest block
	///
	/// # Errors
	/// - `BlockChainError::InvalidAddress` if the address cannot be checksummed
	/// - `BlockChainError::ConnectionError` if the node is unreachable
	/// - `BlockChainError::RequestError` on a JSON-RPC error or malformed result
	async fn get_native_balance(
		&self,
		rpc_url: &str,
		address: &str,
	) -> Result<U256, BlockChainError> {
		let checksummed = to_checksum_address(address)?;

		let response = self
			.send_raw_request(rpc_url, "eth_getBalance", json!([checksummed, "latest"]))
			.await?;

		if let Some(error) = response.get("error").filter(|error| !error.is_null()) {
			return Err(BlockChainError::request_error(format!("RPC error: {}", error)));
		}

		// Extract the "result" field from the JSON-RPC response
		let hex_str = response
			.get("result")
			.and_then(|v| v.as_str())
			.ok_or_else(|| BlockChainError::request_error("Missing 'result' field".to_string()))?;

		U256::from_str_radix(hex_str.trim_start_matches("0x"), 16).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse balance {}: {}", hex_str, e))
		})
	}
}
