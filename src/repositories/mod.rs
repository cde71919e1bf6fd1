//! Repository implementations for reading pipeline input.
//!
//! - `CandidateRepository`: Walks the `<version>/<network>.csv` candidate tree

mod candidate;
mod error;

pub use candidate::{list_top_level, read_address_list, CandidateRepository};
pub use error::RepositoryError;
