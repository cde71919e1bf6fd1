//! Domain models and data structures for the contract ledger.
//!
//! - `config`: Pipeline configuration loaded from the environment
//! - `core`: Networks, candidate lists, explorer responses and confirmed contracts

mod config;
mod core;

pub use config::{ConfigError, PipelineConfig};

pub use core::{
	CandidateAddressList, Chain, ConfirmedContract, ConfirmedContracts, ExplorerResponse,
	ExplorerResult, NetworkEndpoints, SourceCodeEntry,
};
