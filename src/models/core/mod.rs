mod contract;
mod explorer;
mod network;

pub use contract::{CandidateAddressList, ConfirmedContract, ConfirmedContracts};
pub use explorer::{ExplorerResponse, ExplorerResult, SourceCodeEntry};
pub use network::{Chain, NetworkEndpoints};
