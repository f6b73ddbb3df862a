mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{Command, parse_cli};
use settings::ResolvedConfig;
use shelf::tui::{SurfaceError, TerminalSession};
use shelf::{App, Catalog, Field, SqliteCatalog};
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in shelf::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = shelf::logging::initialize(&resolved.log_level, &resolved.log_file) {
		eprintln!(
			"warning: logging disabled, cannot write {}: {err}",
			resolved.log_file.display()
		);
	}

	let catalog = SqliteCatalog::new(resolved.database.clone());
	info!(database = %catalog.database().display(), "catalog configured");

	match cli.command {
		Some(command) => run_command(&catalog, command),
		None => run_interactive(&catalog, resolved),
	}
}

/// Answer a single query on stdout.
fn run_command(catalog: &SqliteCatalog, command: Command) -> Result<()> {
	let text = match command {
		Command::Search { field, term } => catalog.search(Field::parse_search(&field)?, &term)?,
		Command::Browse { field } => catalog.browse(Field::parse_browse(&field)?)?,
	};
	println!("{text}");
	Ok(())
}

/// Take over the terminal and run menu cycles until the user quits.
fn run_interactive(catalog: &SqliteCatalog, settings: ResolvedConfig) -> Result<()> {
	let mut session =
		TerminalSession::enter(settings.theme()).context("failed to prepare the terminal")?;
	let outcome = App::new(&mut *session, catalog, settings.ui).run();
	// Restore the terminal before anything is reported.
	drop(session);

	match outcome {
		Err(SurfaceError::Interrupted) => {
			info!("session interrupted");
			Ok(())
		}
		other => other.context("terminal interface failed"),
	}
}
