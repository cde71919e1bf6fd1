//! Verified contract ledger entry point.
//!
//! Runs the pipeline once over the candidate tree and exits. Invocation is parameterless:
//! everything is read from the environment (optionally seeded from `.env`). The flags below
//! only fill in environment variables that are not already set.

use clap::{Arg, Command};
use contract_ledger::{
	bootstrap::{initialize_services, run_pipeline},
	models::PipelineConfig,
	utils::logging::setup_logging,
};
use dotenvy::dotenv;
use std::env::{set_var, var};
use tracing::{error, info};

/// Sets `key` from a CLI value unless the environment already provides it
fn apply_flag(matches: &clap::ArgMatches, flag: &str, key: &str) {
	if let Some(value) = matches.get_one::<String>(flag) {
		if var(key).is_err() {
			set_var(key, value);
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let matches = Command::new("contract-ledger")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Confirms candidate contracts against block explorers and appends their native \
			 balances to a CSV ledger.",
		)
		.arg(
			Arg::new("candidates-dir")
				.long("candidates-dir")
				.help("Root of the <version>/<network>.csv tree (default: ./possible_vyper_contracts)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("ledger")
				.long("ledger")
				.help("Ledger file to append to (default: ./verified_vyper_contracts.csv)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	apply_flag(&matches, "candidates-dir", "CANDIDATES_DIR");
	apply_flag(&matches, "ledger", "LEDGER_PATH");
	apply_flag(&matches, "log-level", "RUST_LOG");

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config = PipelineConfig::from_env()
		.and_then(|config| config.validate().map(|_| config))
		.map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

	info!(
		candidates_dir = %config.candidates_dir.display(),
		ledger = %config.ledger_path.display(),
		target = %config.target_language,
		"Starting pipeline"
	);

	let (explorer, balances, ledger) = initialize_services(&config)?;

	match run_pipeline(&config, explorer, balances, &ledger).await {
		Ok(summary) => {
			info!(
				files = summary.files_processed,
				candidates = summary.candidates,
				confirmed = summary.confirmed,
				balances = summary.balances_found,
				lines = summary.lines_written,
				"Pipeline finished"
			);
			Ok(())
		}
		Err(e) => {
			error!("Pipeline aborted: {}", e);
			Err(e.into())
		}
	}
}
