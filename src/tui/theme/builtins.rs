use ratatui::style::Color;

use super::types::{Theme, ThemeDefinition};

pub const GREEN: Theme = Theme::new(Color::Green, Color::Black);
pub const AMBER: Theme = Theme::new(Color::Rgb(255, 176, 0), Color::Black);
pub const PAPER: Theme = Theme::new(Color::Black, Color::White);

pub(super) const DEFAULT_NAME: &str = "green";

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new(DEFAULT_NAME, GREEN).with_aliases(&["green-screen", "phosphor"]),
	ThemeDefinition::new("amber", AMBER),
	ThemeDefinition::new("paper", PAPER).with_aliases(&["light"]),
];
