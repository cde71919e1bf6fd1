//! Pipeline configuration.
//!
//! All settings come from the process environment (optionally seeded from a `.env` file by
//! the binary). The configuration is built once at startup and handed to every stage by
//! reference, so tests can inject fake endpoints through [`PipelineConfig::with_endpoints`].

mod error;

pub use error::ConfigError;

use std::{collections::BTreeMap, path::PathBuf, time::Duration};
use url::Url;

use crate::{
	models::{Chain, NetworkEndpoints},
	utils::constants::{
		DEFAULT_CANDIDATES_DIR, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LEDGER_PATH,
		DEFAULT_RATE_LIMIT_DELAY_SECS, DEFAULT_TARGET_LANGUAGE, SHARED_EXPLORER_API_KEY_ENV,
	},
};

/// Settings shared by every stage of the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
	/// Root of the `<version>/<network>.csv` candidate tree
	pub candidates_dir: PathBuf,
	/// Append-only output ledger
	pub ledger_path: PathBuf,
	/// Marker a compiler identity must contain to be confirmed
	pub target_language: String,
	/// Fixed delay before the single retry of a rate-limited explorer call
	pub rate_limit_delay: Duration,
	/// Timeout applied to every HTTP request
	pub http_timeout: Duration,
	networks: BTreeMap<Chain, NetworkEndpoints>,
}

impl PipelineConfig {
	/// Creates a configuration with default settings and every network unconfigured
	pub fn new(candidates_dir: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
		Self {
			candidates_dir: candidates_dir.into(),
			ledger_path: ledger_path.into(),
			target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
			rate_limit_delay: Duration::from_secs(DEFAULT_RATE_LIMIT_DELAY_SECS),
			http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
			networks: Chain::ALL
				.iter()
				.map(|chain| (*chain, NetworkEndpoints::unconfigured(*chain)))
				.collect(),
		}
	}

	/// Loads the configuration from the process environment
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads the configuration through `lookup`, treating empty values as unset
	///
	/// # Errors
	/// Returns `ConfigError::ParseError` when a numeric setting is not a whole number
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| {
			lookup(key)
				.map(|value| value.trim().to_string())
				.filter(|value| !value.is_empty())
		};
		let get_secs = |key: &str, default: u64| -> Result<Duration, ConfigError> {
			match get(key) {
				Some(value) => value.parse::<u64>().map(Duration::from_secs).map_err(|e| {
					ConfigError::parse_error(format!("{} must be a whole number of seconds: {}", key, e))
				}),
				None => Ok(Duration::from_secs(default)),
			}
		};

		let mut config = Self::new(
			get("CANDIDATES_DIR").unwrap_or_else(|| DEFAULT_CANDIDATES_DIR.to_string()),
			get("LEDGER_PATH").unwrap_or_else(|| DEFAULT_LEDGER_PATH.to_string()),
		);
		if let Some(target_language) = get("TARGET_LANGUAGE") {
			config.target_language = target_language;
		}
		config.rate_limit_delay = get_secs("RATE_LIMIT_DELAY_SECS", DEFAULT_RATE_LIMIT_DELAY_SECS)?;
		config.http_timeout = get_secs("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

		let shared_api_key = get(SHARED_EXPLORER_API_KEY_ENV);
		for chain in Chain::ALL {
			let prefix = chain.env_prefix();
			config = config.with_endpoints(NetworkEndpoints {
				chain,
				rpc_url: get(&format!("{}_RPC_URL", prefix)),
				explorer_url: get(&format!("{}_EXPLORER_URL", prefix))
					.unwrap_or_else(|| chain.default_explorer_url().to_string()),
				explorer_api_key: get(&format!("{}_EXPLORER_API_KEY", prefix))
					.or_else(|| shared_api_key.clone())
					.unwrap_or_default(),
			});
		}

		Ok(config)
	}

	/// Replaces the endpoints of `endpoints.chain`
	pub fn with_endpoints(mut self, endpoints: NetworkEndpoints) -> Self {
		self.networks.insert(endpoints.chain, endpoints);
		self
	}

	/// Endpoints of `chain`, falling back to the unconfigured defaults
	pub fn endpoints(&self, chain: Chain) -> NetworkEndpoints {
		self.networks
			.get(&chain)
			.cloned()
			.unwrap_or_else(|| NetworkEndpoints::unconfigured(chain))
	}

	/// Checks that the target marker is set and every configured URL is an http(s) URL
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.target_language.is_empty() {
			return Err(ConfigError::validation_error("TARGET_LANGUAGE must not be empty"));
		}

		for endpoints in self.networks.values() {
			let prefix = endpoints.chain.env_prefix();
			validate_http_url(&format!("{}_EXPLORER_URL", prefix), &endpoints.explorer_url)?;
			if let Some(rpc_url) = &endpoints.rpc_url {
				validate_http_url(&format!("{}_RPC_URL", prefix), rpc_url)?;
			}
		}

		Ok(())
	}
}

fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
	let url = Url::parse(value)
		.map_err(|e| ConfigError::validation_error(format!("{} is not a valid URL: {}", key, e)))?;
	match url.scheme() {
		"http" | "https" => Ok(()),
		scheme => Err(ConfigError::validation_error(format!(
			"{} must use http:// or https://, got {}://",
			key, scheme
		))),
	}
}
