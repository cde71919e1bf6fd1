//! Candidate enumeration.
//!
//! Candidates live in a two-level tree:
//!
//! ```text
//! possible_vyper_contracts/
//!   0.3.1/
//!     eth.csv       one address per line, no header
//!     polygon.csv
//!   0.2.8/
//!     bnb.csv
//! ```

use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

use crate::{
	models::{CandidateAddressList, Chain},
	repositories::error::RepositoryError,
	utils::constants::CANDIDATE_FILE_EXTENSION,
};

/// Names of the immediate, non-hidden children of `dir`, in lexicographic order
///
/// # Errors
/// Returns `RepositoryError::LoadError` if `dir` does not exist or is not a directory
pub fn list_top_level(dir: &Path) -> Result<Vec<String>, RepositoryError> {
	if !dir.is_dir() {
		return Err(RepositoryError::load_error(format!(
			"directory not found: {}",
			dir.display()
		)));
	}

	let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));
	let options = MatchOptions {
		case_sensitive: true,
		require_literal_separator: true,
		require_literal_leading_dot: true,
	};

	let entries = glob_with(&pattern, options)
		.map_err(|e| RepositoryError::internal_error(format!("invalid pattern {}: {}", pattern, e)))?;

	let mut names = Vec::new();
	for entry in entries {
		let path = entry.map_err(|e| RepositoryError::load_error(e.to_string()))?;
		if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
			names.push(name.to_string());
		}
	}
	Ok(names)
}

/// Reads a newline-delimited address list, trimming each line and dropping blank ones
pub fn read_address_list(path: &Path) -> Result<Vec<String>, RepositoryError> {
	let content = std::fs::read_to_string(path).map_err(|e| {
		RepositoryError::load_error(format!("failed to read {}: {}", path.display(), e))
	})?;

	Ok(content
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_string)
		.collect())
}

/// Read-only access to the candidate tree rooted at `root`
#[derive(Debug, Clone)]
pub struct CandidateRepository {
	root: PathBuf,
}

impl CandidateRepository {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Version folders under the root; stray files at the top level are ignored
	pub fn version_folders(&self) -> Result<Vec<String>, RepositoryError> {
		let names = list_top_level(&self.root)?;
		Ok(names
			.into_iter()
			.filter(|name| {
				let is_dir = self.root.join(name).is_dir();
				if !is_dir {
					tracing::debug!(entry = %name, "Skipping non-directory entry in candidates root");
				}
				is_dir
			})
			.collect())
	}

	/// Network files inside one version folder
	pub fn network_files(&self, version_label: &str) -> Result<Vec<String>, RepositoryError> {
		list_top_level(&self.root.join(version_label))
	}

	/// Loads `<root>/<version_label>/<file_name>`.
	///
	/// Returns `Ok(None)` for files that are not `.csv` or whose stem is not a supported
	/// network; those are logged and skipped rather than aborting the run.
	pub fn load(
		&self,
		version_label: &str,
		file_name: &str,
	) -> Result<Option<CandidateAddressList>, RepositoryError> {
		let Some(stem) = file_name.strip_suffix(CANDIDATE_FILE_EXTENSION) else {
			tracing::warn!(version = version_label, file = file_name, "Skipping non-csv candidate file");
			return Ok(None);
		};

		let chain = match stem.parse::<Chain>() {
			Ok(chain) => chain,
			Err(e) => {
				tracing::warn!(version = version_label, file = file_name, "Skipping candidate file: {}", e);
				return Ok(None);
			}
		};

		let addresses = read_address_list(&self.root.join(version_label).join(file_name))?;

		Ok(Some(CandidateAddressList {
			version_label: version_label.to_string(),
			chain,
			addresses,
		}))
	}
}
