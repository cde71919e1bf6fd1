//! Native balance enrichment of confirmed contracts.

mod service;

pub use service::EnrichmentService;
