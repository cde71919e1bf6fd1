//! Explorer error types.
//!
//! None of these abort the run: the confirmation stage logs them and moves on to the next
//! candidate, so they are logged at warn level on creation.

use log::warn;
use std::{error::Error, fmt};

/// Represents possible errors while querying a block explorer
#[derive(Debug)]
pub enum ExplorerError {
	/// The explorer could not be reached or the request failed in transit
	RequestError(String),

	/// The explorer answered with a body that is not the expected JSON
	ParseError(String),

	/// The query URL could not be built from the configured endpoint
	ConfigError(String),
}

impl ExplorerError {
	fn format_message(&self) -> String {
		match self {
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::ConfigError(msg) => format!("Config error: {}", msg),
		}
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new parse error with logging
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new configuration error with logging
	pub fn config_error(msg: impl Into<String>) -> Self {
		let error = Self::ConfigError(msg.into());
		warn!("{}", error.format_message());
		error
	}
}

impl From<reqwest::Error> for ExplorerError {
	fn from(error: reqwest::Error) -> Self {
		if error.is_decode() {
			Self::parse_error(error.to_string())
		} else {
			Self::request_error(error.to_string())
		}
	}
}

impl From<serde_json::Error> for ExplorerError {
	fn from(error: serde_json::Error) -> Self {
		Self::parse_error(error.to_string())
	}
}

impl fmt::Display for ExplorerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ExplorerError {}
