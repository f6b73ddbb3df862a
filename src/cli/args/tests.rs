use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{CliArgs, Command};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn no_arguments_runs_the_interface() {
	let parsed = CliArgs::try_parse_from(["shelf"]).expect("parses");
	assert!(parsed.command.is_none());
	assert!(parsed.config.is_empty());
	assert!(!parsed.no_config);
}

#[test]
fn overrides_are_collected() {
	let parsed = CliArgs::try_parse_from([
		"shelf",
		"--db",
		"/tmp/books.db",
		"--theme",
		"amber",
		"-t",
		"MY BOOKS",
		"--log-level",
		"debug",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	])
	.expect("parses");
	assert_eq!(parsed.db, Some(PathBuf::from("/tmp/books.db")));
	assert_eq!(parsed.theme.as_deref(), Some("amber"));
	assert_eq!(parsed.title.as_deref(), Some("MY BOOKS"));
	assert_eq!(parsed.log_level.as_deref(), Some("debug"));
	assert_eq!(parsed.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
}

#[test]
fn search_takes_a_field_and_a_term() {
	let parsed = CliArgs::try_parse_from(["shelf", "search", "title", "Dune Messiah"]).expect("parses");
	assert_eq!(
		parsed.command,
		Some(Command::Search {
			field: "title".into(),
			term: "Dune Messiah".into(),
		})
	);
	assert!(CliArgs::try_parse_from(["shelf", "search", "title"]).is_err());
}

#[test]
fn browse_takes_a_field() {
	let parsed = CliArgs::try_parse_from(["shelf", "--db", "x.db", "browse", "year"]).expect("parses");
	assert_eq!(parsed.command, Some(Command::Browse { field: "year".into() }));
}
