use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"shelf",
		"--db",
		"/tmp/books.db",
		"--theme",
		"amber",
		"--title",
		"MY BOOKS",
		"--log-level",
		"trace",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("paper".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalog.database, Some(PathBuf::from("/tmp/books.db")));
	assert_eq!(config.ui.theme.as_deref(), Some("amber"));
	assert_eq!(config.ui.title.as_deref(), Some("MY BOOKS"));
	assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn defaults_fill_unset_values() {
	let cli = CliArgs::parse_from(["shelf"]);
	let config = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(config.theme_name, "green");
	assert_eq!(config.ui.title, "LIBRARY CATALOG");
	assert_eq!(config.log_level, "info");
	assert!(config.database.ends_with("library.db"));
	assert!(config.log_file.ends_with("shelf.log"));
}

#[test]
fn blank_title_from_the_cli_is_rejected() {
	let cli = CliArgs::parse_from(["shelf", "--title", "   "]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.title"));
	assert!(message.contains("CLI flag `--title`"));
}
