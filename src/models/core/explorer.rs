use serde::{Deserialize, Serialize};

use crate::utils::constants::RATE_LIMIT_MARKER;

/// Response of the explorer's `getsourcecode` action.
///
/// ```json
/// {"status":"1","message":"OK","result":[{"CompilerVersion":"vyper:0.3.1", ...}]}
/// {"status":"0","message":"NOTOK","result":"Max rate limit reached"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExplorerResponse {
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub result: ExplorerResult,
}

/// The `result` field is an array of source entries on success and a plain message otherwise
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ExplorerResult {
	Entries(Vec<SourceCodeEntry>),
	Message(String),
	Other(serde_json::Value),
}

impl Default for ExplorerResult {
	fn default() -> Self {
		Self::Other(serde_json::Value::Null)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SourceCodeEntry {
	#[serde(rename = "CompilerVersion", default)]
	pub compiler_version: Option<String>,
}

impl ExplorerResponse {
	/// Compiler identity of the first source entry, if the explorer returned one
	pub fn compiler_version(&self) -> Option<&str> {
		match &self.result {
			ExplorerResult::Entries(entries) => entries
				.first()
				.and_then(|entry| entry.compiler_version.as_deref()),
			_ => None,
		}
	}

	/// Whether the textual result reports that the API key hit its rate limit
	pub fn is_rate_limited(&self) -> bool {
		match &self.result {
			ExplorerResult::Message(message) => {
				message.to_ascii_lowercase().contains(RATE_LIMIT_MARKER)
			}
			_ => false,
		}
	}
}
