//! Error types for repository operations.
//!
//! Reading the candidate tree is the one place where the pipeline cannot degrade: a
//! missing root directory or an unreadable address list aborts the run.

use log::error;
use std::error::Error;
use std::fmt;

/// Errors that can occur while enumerating or reading candidate lists
#[derive(Debug)]
pub enum RepositoryError {
	/// A directory or candidate file could not be read
	LoadError(String),

	/// Error that occurs due to internal repository operations
	InternalError(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new internal error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<std::io::Error> for RepositoryError {
	fn from(err: std::io::Error) -> Self {
		Self::load_error(err.to_string())
	}
}
