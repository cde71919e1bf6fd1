//! Verified contract ledger.
//!
//! Finds contracts compiled with a target language (Vyper by default) among per-network
//! candidate address lists, confirms each one against the network's block explorer, looks up
//! the native balance it holds and appends the result to a CSV ledger.
//!
//! # Flow
//! 1. Enumerate `root/<version>/<network>.csv` candidate lists
//! 2. Confirm compiler identity and version through the explorer API
//! 3. Attach the native balance read from the network's RPC endpoint
//! 4. Append `network,address,version,balance` lines to the ledger

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
