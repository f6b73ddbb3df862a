//! Resolve configuration and data directories for `shelf`.
//!
//! Environment overrides win; otherwise the platform locations provided by the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "shelf";
const APPLICATION: &str = "shelf";

const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";

/// File name of the catalog database inside the data directory.
pub const DATABASE_FILE: &str = "library.db";
/// File name of the log written while the interface owns the terminal.
pub const LOG_FILE: &str = "shelf.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for shelf"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory holding the catalog database and the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default location of the catalog database.
pub fn default_database_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(DATABASE_FILE))
}

/// Default location of the log file.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_paths_live_in_the_data_directory() {
		let data = get_data_dir().expect("data dir");
		assert_eq!(default_database_path().unwrap(), data.join(DATABASE_FILE));
		assert_eq!(default_log_path().unwrap(), data.join(LOG_FILE));
	}
}
