//! Diagnostic logging to a file.
//!
//! The interactive interface owns the terminal, so log lines go to a file
//! rather than stderr. The `SHELF_LOG` environment variable takes an
//! `EnvFilter` directive and overrides the configured level.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a filter directive that wins over the config.
pub const LOG_ENV: &str = "SHELF_LOG";

/// Filter built from `SHELF_LOG` when it parses, else from `level`.
fn filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber, appending to `path`.
///
/// The parent directory is created when missing. Installing twice is harmless:
/// the first subscriber stays in place.
pub fn initialize(level: &str, path: &Path) -> io::Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	let file = OpenOptions::new().create(true).append(true).open(path)?;

	let layer = fmt::layer()
		.with_ansi(false)
		.with_target(false)
		.with_writer(Mutex::new(file));

	let _ = tracing_subscriber::registry()
		.with(filter(level))
		.with(layer)
		.try_init();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creates_the_log_directory() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("shelf.log");
		initialize("debug", &path).expect("initialize");
		assert!(path.exists());
		// A second call leaves the installed subscriber alone.
		initialize("info", &path).expect("initialize again");
	}

	#[test]
	fn unwritable_log_path_is_reported() {
		let dir = tempfile::tempdir().expect("tempdir");
		let blocker = dir.path().join("file");
		fs::write(&blocker, "").expect("write");
		assert!(initialize("info", &blocker.join("shelf.log")).is_err());
	}
}
