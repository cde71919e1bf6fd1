//! Block-explorer access.
//!
//! Queries the explorer's verified-source endpoint for compiler metadata.

mod client;
mod error;

pub use client::{build_source_code_url, ExplorerClient, ExplorerClientTrait};
pub use error::ExplorerError;
