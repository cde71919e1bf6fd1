//! Core services implementing the pipeline stages.
//!
//! - `explorer`: Block-explorer client returning verified source metadata
//! - `blockchain`: Node RPC client returning native balances
//! - `confirmation`: Keeps candidates whose compiler matches the target language
//! - `enrichment`: Attaches native balances to confirmed contracts
//! - `ledger`: Appends confirmed contracts to the CSV ledger

pub mod blockchain;
pub mod confirmation;
pub mod enrichment;
pub mod explorer;
pub mod ledger;
