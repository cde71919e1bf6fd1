//! Blockchain client implementations.
//!
//! - `EvmClient`: Balance lookups on EVM-compatible networks

mod evm {
	pub mod client;
}

pub use evm::client::{to_checksum_address, EvmClient};
