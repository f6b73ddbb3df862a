use std::path::PathBuf;

use shelf::tui::theme;
use shelf::{Theme, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub database: PathBuf,
	pub theme_name: String,
	pub ui: UiConfig,
	pub log_level: String,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Colours for the configured theme name.
	#[must_use]
	pub fn theme(&self) -> Theme {
		theme::by_name(&self.theme_name).unwrap_or_default()
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
