//! Blockchain client interfaces and implementations.
//!
//! Provides the balance lookup used by the enrichment stage:
//! - `BalanceClientTrait`: Native balance of an address on a given node
//! - `EvmClient`: JSON-RPC implementation for EVM-compatible networks

mod client;
mod clients;
mod error;

pub use client::BalanceClientTrait;
pub use clients::{to_checksum_address, EvmClient};
pub use error::BlockChainError;
