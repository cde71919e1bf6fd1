use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{
	models::ConfirmedContracts,
	services::ledger::LedgerError,
	utils::constants::DEFAULT_LEDGER_PATH,
};

/// Append-only sink for confirmed contracts
#[async_trait]
pub trait LedgerStorage: Send + Sync {
	/// Appends one line per contract, in iteration order, and returns the number written
	async fn append(&self, contracts: &ConfirmedContracts) -> Result<usize, LedgerError>;
}

/// CSV ledger on the local filesystem.
///
/// Each `append` opens the file in append mode, writes and closes it again. Nothing is
/// ever truncated or deduplicated, so running the pipeline twice writes every line twice.
#[derive(Debug, Clone)]
pub struct FileLedgerStorage {
	ledger_path: PathBuf,
}

impl FileLedgerStorage {
	pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
		Self {
			ledger_path: ledger_path.into(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.ledger_path
	}
}

impl Default for FileLedgerStorage {
	fn default() -> Self {
		Self::new(DEFAULT_LEDGER_PATH)
	}
}

#[async_trait]
impl LedgerStorage for FileLedgerStorage {
	async fn append(&self, contracts: &ConfirmedContracts) -> Result<usize, LedgerError> {
		if let Some(parent) = self.ledger_path.parent() {
			if !parent.as_os_str().is_empty() && !parent.exists() {
				tokio::fs::create_dir_all(parent).await?;
			}
		}

		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.ledger_path)
			.await
			.map_err(|e| {
				LedgerError::write_error(format!(
					"failed to open {}: {}",
					self.ledger_path.display(),
					e
				))
			})?;

		let mut written = 0;
		for contract in contracts {
			file.write_all(contract.to_ledger_line().as_bytes()).await?;
			written += 1;
		}
		file.flush().await?;

		Ok(written)
	}
}
