use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Database: {}", config.database.display());
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(out, "  Title: {}", config.ui.title);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	let _ = writeln!(out, "  Log file: {}", config.log_file.display());
	out
}
