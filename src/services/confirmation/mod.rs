//! Compiler confirmation against the block explorer.

mod service;

pub use service::{parse_compiler_version, ConfirmationService};
