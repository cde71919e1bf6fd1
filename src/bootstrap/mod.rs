//! Bootstrap module for initializing services and running the pipeline.
//!
//! # Services
//! - `ExplorerClient`: Compiler metadata from the network's block explorer
//! - `EvmClient`: Native balances from the network's RPC node
//! - `FileLedgerStorage`: Append-only CSV ledger
//!
//! # Flow
//! For every `<version>/<network>.csv` file, strictly in sequence:
//! load candidates → confirm compiler → enrich balances → append to ledger.
//! Nothing is carried from one file to the next except the configuration.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
	models::{CandidateAddressList, PipelineConfig},
	repositories::{CandidateRepository, RepositoryError},
	services::{
		blockchain::{BalanceClientTrait, EvmClient},
		confirmation::ConfirmationService,
		enrichment::EnrichmentService,
		explorer::{ExplorerClient, ExplorerClientTrait},
		ledger::{FileLedgerStorage, LedgerError, LedgerStorage},
	},
};

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
	#[error("Failed to initialize services: {0}")]
	Initialization(String),

	#[error("Failed to read candidates: {0}")]
	Candidates(#[from] RepositoryError),

	#[error("Failed to append to ledger: {0}")]
	Ledger(#[from] LedgerError),
}

/// Counters reported once the run completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
	pub files_processed: usize,
	pub candidates: usize,
	pub confirmed: usize,
	pub balances_found: usize,
	pub lines_written: usize,
}

type ServiceResult = Result<(Arc<ExplorerClient>, Arc<EvmClient>, FileLedgerStorage), PipelineError>;

/// Builds the production explorer client, balance client and ledger from `config`
pub fn initialize_services(config: &PipelineConfig) -> ServiceResult {
	let explorer = ExplorerClient::new(config.http_timeout)
		.map_err(|e| PipelineError::Initialization(e.to_string()))?;
	let balances = EvmClient::new(config.http_timeout)
		.map_err(|e| PipelineError::Initialization(e.to_string()))?;
	let ledger = FileLedgerStorage::new(&config.ledger_path);

	Ok((Arc::new(explorer), Arc::new(balances), ledger))
}

/// Runs the whole pipeline over `config.candidates_dir`.
///
/// # Errors
/// Returns an error if the candidate tree or an address list cannot be read, or if the
/// ledger cannot be written. Explorer and RPC failures only show up in the logs and as
/// skipped addresses or missing balances.
pub async fn run_pipeline<E, B, L>(
	config: &PipelineConfig,
	explorer: Arc<E>,
	balances: Arc<B>,
	ledger: &L,
) -> Result<PipelineSummary, PipelineError>
where
	E: ExplorerClientTrait,
	B: BalanceClientTrait,
	L: LedgerStorage,
{
	let repository = CandidateRepository::new(&config.candidates_dir);
	let confirmation =
		ConfirmationService::new(explorer, config.target_language.clone(), config.rate_limit_delay);
	let enrichment = EnrichmentService::new(balances);
	let mut summary = PipelineSummary::default();

	for version_label in repository.version_folders()? {
		info!(
			"Getting verified {} contracts for version: {}",
			config.target_language, version_label
		);

		for file_name in repository.network_files(&version_label)? {
			let Some(candidates) = repository.load(&version_label, &file_name)? else {
				continue;
			};

			process_candidates(config, &confirmation, &enrichment, ledger, &candidates, &mut summary)
				.await?;
		}
	}

	Ok(summary)
}

/// Confirm → enrich → append for a single candidate list
#[instrument(skip_all, fields(network = %candidates.chain, version = %candidates.version_label))]
async fn process_candidates<E, B, L>(
	config: &PipelineConfig,
	confirmation: &ConfirmationService<E>,
	enrichment: &EnrichmentService<B>,
	ledger: &L,
	candidates: &CandidateAddressList,
	summary: &mut PipelineSummary,
) -> Result<(), PipelineError>
where
	E: ExplorerClientTrait,
	B: BalanceClientTrait,
	L: LedgerStorage,
{
	let endpoints = config.endpoints(candidates.chain);

	info!(candidates = candidates.addresses.len(), "Confirming candidates");
	let mut confirmed = confirmation.confirm(&endpoints, candidates).await;

	info!(confirmed = confirmed.len(), "Getting native balances");
	let balances_found = enrichment.enrich(&endpoints, &mut confirmed).await;

	info!("Writing to ledger");
	let lines_written = ledger.append(&confirmed).await?;

	summary.files_processed += 1;
	summary.candidates += candidates.addresses.len();
	summary.confirmed += confirmed.len();
	summary.balances_found += balances_found;
	summary.lines_written += lines_written;
	Ok(())
}
