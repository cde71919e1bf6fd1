//! Mock implementations and fixtures shared by the integration tests.

mod clients;

pub use clients::*;
pub use models::*;
