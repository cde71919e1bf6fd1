//! Utility modules for common functionality.
//!
//! - constants: Defaults and fixed protocol values
//! - logging: Logging utilities

pub mod constants;
pub mod logging;

pub use constants::*;
