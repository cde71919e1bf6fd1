//! Blockchain error types and handling.
//!
//! Balance lookups never abort the pipeline: every variant ends up as a missing balance in
//! the ledger, so errors are logged at warn level on creation.

use log::warn;

/// Represents possible errors that can occur during RPC balance lookups
#[derive(Debug)]
pub enum BlockChainError {
	/// The node could not be reached
	ConnectionError(String),

	/// The node rejected the request or answered with an unusable response
	RequestError(String),

	/// The address is not a 20-byte hex address
	InvalidAddress(String),

	/// Internal errors within the blockchain client
	InternalError(String),
}

impl BlockChainError {
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::InvalidAddress(msg) => format!("Invalid address: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new invalid address error with logging
	pub fn invalid_address(msg: impl Into<String>) -> Self {
		let error = Self::InvalidAddress(msg.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		warn!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

impl From<reqwest::Error> for BlockChainError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_connect() || err.is_timeout() {
			Self::connection_error(err.to_string())
		} else {
			Self::request_error(err.to_string())
		}
	}
}
