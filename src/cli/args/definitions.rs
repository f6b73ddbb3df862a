use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::Command;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `shelf` binary.
#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    version,
    long_version = long_version(),
    about = "Terminal catalog for a personal book library",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SHELF_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Path to the library database (default: library.db in the data directory)"
    )]
    pub(crate) db: Option<PathBuf>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a colour theme by name (default: green)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the header title (default: LIBRARY CATALOG)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Set the log filter written to the log file (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}
