//! Etherscan-compatible explorer client.
//!
//! Every supported network exposes the same `getsourcecode` action under
//! `<explorer-base>/api`, so one client serves all of them; the per-network base URL and
//! API key come from [`NetworkEndpoints`].

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

use crate::{
	models::{ExplorerResponse, NetworkEndpoints},
	services::explorer::ExplorerError,
};

/// Source metadata lookup for a single address
#[async_trait]
pub trait ExplorerClientTrait: Send + Sync {
	/// Fetches the verified source metadata of `address` from the network's explorer
	///
	/// # Errors
	/// Returns `ExplorerError` on transport failure or an undecodable body. Rate-limit
	/// answers are successful responses; see [`ExplorerResponse::is_rate_limited`].
	async fn get_source_code(
		&self,
		endpoints: &NetworkEndpoints,
		address: &str,
	) -> Result<ExplorerResponse, ExplorerError>;
}

/// HTTP implementation of [`ExplorerClientTrait`]
#[derive(Clone, Debug)]
pub struct ExplorerClient {
	client: Client,
}

impl ExplorerClient {
	/// Creates a client whose requests time out after `timeout`
	pub fn new(timeout: Duration) -> Result<Self, ExplorerError> {
		let client = ClientBuilder::new()
			.timeout(timeout)
			.build()
			.map_err(|e| ExplorerError::config_error(format!("Failed to create HTTP client: {}", e)))?;
		Ok(Self::new_with_client(client))
	}

	pub fn new_with_client(client: Client) -> Self {
		Self { client }
	}
}

/// Builds `<explorer-base>/api?module=contract&action=getsourcecode&address=..&apikey=..`
///
/// A base that already ends in `/api` is used as is.
pub fn build_source_code_url(
	endpoints: &NetworkEndpoints,
	address: &str,
) -> Result<Url, ExplorerError> {
	let base = endpoints.explorer_url.trim_end_matches('/');
	let base = if base.ends_with("/api") {
		base.to_string()
	} else {
		format!("{}/api", base)
	};

	let mut url = Url::parse(&base).map_err(|e| {
		ExplorerError::config_error(format!(
			"Invalid explorer URL for {}: {}",
			endpoints.chain, e
		))
	})?;
	url.query_pairs_mut()
		.append_pair("module", "contract")
		.append_pair("action", "getsourcecode")
		.append_pair("address", address)
		.append_pair("apikey", &endpoints.explorer_api_key);
	Ok(url)
}

#[async_trait]
impl ExplorerClientTrait for ExplorerClient {
	async fn get_source_code(
		&self,
		endpoints: &NetworkEndpoints,
		address: &str,
	) -> Result<ExplorerResponse, ExplorerError> {
		let url = build_source_code_url(endpoints, address)?;

		// Explorers report rate limiting in the body, so the status code is not checked
		let body = self.client.get(url).send().await?.text().await?;
		Ok(serde_json::from_str(&body)?)
	}
}
