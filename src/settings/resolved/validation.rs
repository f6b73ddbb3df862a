use shelf::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if theme::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.clone(),
			sources.source_for_theme(),
			format!("unknown theme (choose one of: {})", theme::names().join(", ")),
		));
	}

	if config.ui.title.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.title",
			config.ui.title.clone(),
			sources.source_for_title(),
			"must not be blank",
		));
	}

	Ok(())
}
