//! Ledger persistence.
//!
//! Every line has the form `network,address,version,balance`; the balance column is empty
//! when the lookup failed.

mod error;
mod storage;

pub use error::LedgerError;
pub use storage::{FileLedgerStorage, LedgerStorage};
