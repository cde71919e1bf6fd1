use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Networks a candidate list can belong to.
///
/// The slug doubles as the candidate file stem (`eth.csv`) and as the first column of every
/// ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Arb,
	Ava,
	Bnb,
	Eth,
	Fantom,
	Opt,
	Polygon,
}

impl Chain {
	/// Every supported network, in slug order
	pub const ALL: [Chain; 7] = [
		Chain::Arb,
		Chain::Ava,
		Chain::Bnb,
		Chain::Eth,
		Chain::Fantom,
		Chain::Opt,
		Chain::Polygon,
	];

	pub fn slug(&self) -> &'static str {
		match self {
			Self::Arb => "arb",
			Self::Ava => "ava",
			Self::Bnb => "bnb",
			Self::Eth => "eth",
			Self::Fantom => "fantom",
			Self::Opt => "opt",
			Self::Polygon => "polygon",
		}
	}

	/// Prefix of the environment variables configuring this network (`ETH_RPC_URL`, ...)
	pub fn env_prefix(&self) -> &'static str {
		match self {
			Self::Arb => "ARB",
			Self::Ava => "AVA",
			Self::Bnb => "BNB",
			Self::Eth => "ETH",
			Self::Fantom => "FANTOM",
			Self::Opt => "OPT",
			Self::Polygon => "POLYGON",
		}
	}

	/// Public explorer API base used when no override is configured
	pub fn default_explorer_url(&self) -> &'static str {
		match self {
			Self::Arb => "https://api.arbiscan.io",
			Self::Ava => "https://api.snowtrace.io",
			Self::Bnb => "https://api.bscscan.com",
			Self::Eth => "https://api.etherscan.io",
			Self::Fantom => "https://api.ftmscan.com",
			Self::Opt => "https://api-optimistic.etherscan.io",
			Self::Polygon => "https://api.polygonscan.com",
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.slug())
	}
}

impl FromStr for Chain {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.find(|chain| chain.slug() == s)
			.copied()
			.ok_or_else(|| format!("Unsupported network: {}", s))
	}
}

/// Endpoints used to query one network.
///
/// A missing RPC URL is a valid configuration: balances for the network are recorded as
/// missing instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkEndpoints {
	pub chain: Chain,
	pub rpc_url: Option<String>,
	pub explorer_url: String,
	pub explorer_api_key: String,
}

impl NetworkEndpoints {
	/// Endpoints with the public explorer, no API key and no RPC node
	pub fn unconfigured(chain: Chain) -> Self {
		Self {
			chain,
			rpc_url: None,
			explorer_url: chain.default_explorer_url().to_string(),
			explorer_api_key: String::new(),
		}
	}
}
