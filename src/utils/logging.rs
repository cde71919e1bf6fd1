//! Logging setup.
//!
//! Installs a `tracing_subscriber` registry with an [`EnvFilter`] read from `RUST_LOG`
//! (falling back to `info`) and a compact formatter. Progress, skipped addresses and the
//! final summary are all reported through this subscriber.

use std::io::IsTerminal;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, or `default_level` when it is missing or malformed
pub fn build_filter(default_level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Sends logs to stdout, with colours only when stdout is a terminal
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	let ansi = std::io::stdout().is_terminal();
	install(std::io::stdout, ansi)
}

/// Sends logs to a custom writer, without colours
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	install(writer, false)
}

fn install<W>(writer: W, ansi: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter(DEFAULT_LOG_LEVEL))
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_ansi(ansi)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
