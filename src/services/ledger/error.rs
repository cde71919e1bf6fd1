//! Ledger error types.

use log::error;
use std::{error::Error, fmt};

/// Errors while appending to the ledger file; these abort the run
#[derive(Debug)]
pub enum LedgerError {
	/// The ledger file could not be opened or written
	WriteError(String),
}

impl LedgerError {
	fn format_message(&self) -> String {
		match self {
			Self::WriteError(msg) => format!("Write error: {}", msg),
		}
	}

	/// Creates a new write error with logging
	pub fn write_error(msg: impl Into<String>) -> Self {
		let error = Self::WriteError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl From<std::io::Error> for LedgerError {
	fn from(err: std::io::Error) -> Self {
		Self::write_error(err.to_string())
	}
}

impl fmt::Display for LedgerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for LedgerError {}
