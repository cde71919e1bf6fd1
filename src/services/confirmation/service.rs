//! Compiler confirmation stage.
//!
//! Each candidate is looked up on the network's explorer. Only addresses whose compiler
//! identity contains the target-language marker survive, together with the version parsed
//! from that identity.

use std::{sync::Arc, time::Duration};
use tracing::{debug, info, instrument, warn};

use crate::{
	models::{
		CandidateAddressList, ConfirmedContract, ConfirmedContracts, ExplorerResponse,
		NetworkEndpoints,
	},
	services::explorer::{ExplorerClientTrait, ExplorerError},
	utils::constants::{COMPILER_VERSION_DELIMITER, PROGRESS_LOG_INTERVAL},
};

/// Version carried by `compiler_identity` if it is produced by the `marker` language.
///
/// The version is everything after the first `:` (`vyper:0.3.1` gives `0.3.1`); an
/// identity without a delimiter is returned whole. Returns `None` when the marker is absent.
pub fn parse_compiler_version(compiler_identity: &str, marker: &str) -> Option<String> {
	if !compiler_identity.contains(marker) {
		return None;
	}

	let version = compiler_identity
		.split_once(COMPILER_VERSION_DELIMITER)
		.map(|(_, version)| version)
		.unwrap_or(compiler_identity);
	Some(version.to_string())
}

/// Filters candidate lists down to contracts compiled with the target language
pub struct ConfirmationService<E: ExplorerClientTrait> {
	explorer: Arc<E>,
	target_language: String,
	rate_limit_delay: Duration,
}

impl<E: ExplorerClientTrait> ConfirmationService<E> {
	pub fn new(explorer: Arc<E>, target_language: impl Into<String>, rate_limit_delay: Duration) -> Self {
		Self {
			explorer,
			target_language: target_language.into(),
			rate_limit_delay,
		}
	}

	/// Confirms every candidate of `candidates` in order.
	///
	/// Transport failures and missing metadata skip the address; nothing here aborts the
	/// run.
	#[instrument(skip_all, fields(network = %candidates.chain, version = %candidates.version_label))]
	pub async fn confirm(
		&self,
		endpoints: &NetworkEndpoints,
		candidates: &CandidateAddressList,
	) -> ConfirmedContracts {
		let total = candidates.addresses.len();
		let mut confirmed = ConfirmedContracts::new();

		for (index, address) in candidates.addresses.iter().enumerate() {
			let position = index + 1;
			if position == 1 || position % PROGRESS_LOG_INTERVAL == 0 {
				info!("Confirming candidate {} of {}", position, total);
			}

			let response = match self.fetch_source_code(endpoints, address).await {
				Ok(response) => response,
				Err(e) => {
					warn!(address = %address, error = %e, "Failed to get response from explorer");
					continue;
				}
			};

			if let Some(version) = self.confirmed_version(&response) {
				confirmed.insert(ConfirmedContract::new(candidates.chain, address.as_str(), version));
			} else {
				debug!(address = %address, compiler = ?response.compiler_version(), "Not a match");
			}
		}

		info!(confirmed = confirmed.len(), total, "Confirmation finished");
		confirmed
	}

	/// Target-language version of the response's first source entry.
	///
	/// A missing `CompilerVersion`, a textual result and a still-rate-limited answer all
	/// count as no match.
	pub fn confirmed_version(&self, response: &ExplorerResponse) -> Option<String> {
		response
			.compiler_version()
			.and_then(|identity| parse_compiler_version(identity, &self.target_language))
	}

	/// One explorer lookup, repeated exactly once after the fixed delay when rate-limited.
	/// The retried answer is returned as is, even if it is rate-limited again.
	async fn fetch_source_code(
		&self,
		endpoints: &NetworkEndpoints,
		address: &str,
	) -> Result<ExplorerResponse, ExplorerError> {
		let response = self.explorer.get_source_code(endpoints, address).await?;
		if !response.is_rate_limited() {
			return Ok(response);
		}

		warn!(
			address,
			delay_ms = self.rate_limit_delay.as_millis() as u64,
			"Explorer rate limit reached, retrying once"
		);
		tokio::time::sleep(self.rate_limit_delay).await;
		self.explorer.get_source_code(endpoints, address).await
	}
}
