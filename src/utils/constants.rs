//! Constants used across the pipeline.

/// Root of the `<version>/<network>.csv` candidate tree
pub const DEFAULT_CANDIDATES_DIR: &str = "./possible_vyper_contracts";

/// Append-only output ledger
pub const DEFAULT_LEDGER_PATH: &str = "./verified_vyper_contracts.csv";

/// Marker a compiler identity must contain, e.g. `vyper:0.3.1`
pub const DEFAULT_TARGET_LANGUAGE: &str = "vyper";

/// Separator between language and version in a compiler identity
pub const COMPILER_VERSION_DELIMITER: char = ':';

/// Delay before retrying a rate-limited explorer request
pub const DEFAULT_RATE_LIMIT_DELAY_SECS: u64 = 6;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Lowercased fragment of the explorer's rate-limit message
pub const RATE_LIMIT_MARKER: &str = "rate limit";

/// Progress is logged for the first candidate and then every this many candidates
pub const PROGRESS_LOG_INTERVAL: usize = 100;

pub const CANDIDATE_FILE_EXTENSION: &str = ".csv";

/// Explorer key used by networks without their own `<NETWORK>_EXPLORER_API_KEY`
pub const SHARED_EXPLORER_API_KEY_ENV: &str = "ETHERSCAN_API_KEY";
