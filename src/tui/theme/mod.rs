mod builtins;
mod types;

pub use builtins::{AMBER, GREEN, PAPER};
pub use types::{Theme, ThemeDefinition, Tone};

use builtins::{BUILT_IN_DEFINITIONS, DEFAULT_NAME};

/// The green-on-black scheme the catalog starts with.
#[must_use]
pub fn default_theme() -> Theme {
	GREEN
}

/// Canonical name of the default theme.
#[must_use]
pub fn default_name() -> &'static str {
	DEFAULT_NAME
}

/// Canonical names of every built-in theme, in declaration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|def| def.name).collect()
}

/// Look a theme up by name or alias, ignoring case, spaces and underscores.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|def| def.answers_to(&normalized))
		.map(|def| def.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|ch| match ch {
			' ' | '_' => '-',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
