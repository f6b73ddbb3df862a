use ratatui::style::{Color, Modifier, Style};

/// Role of a piece of text on screen. The theme decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
	#[default]
	Normal,
	/// Inverted colours, used for the selected menu row and the footer bar.
	Highlight,
	/// Inverted and bold, used for the header bar.
	Banner,
	/// Dimmed, used for section headers.
	Muted,
}

/// Two-colour scheme applied to the whole interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub foreground: Color,
	pub background: Color,
}

impl Theme {
	pub const fn new(foreground: Color, background: Color) -> Self {
		Self {
			foreground,
			background,
		}
	}

	#[must_use]
	pub fn normal_style(&self) -> Style {
		Style::new().fg(self.foreground).bg(self.background)
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		Style::new().fg(self.background).bg(self.foreground)
	}

	#[must_use]
	pub fn style(&self, tone: Tone) -> Style {
		match tone {
			Tone::Normal => self.normal_style(),
			Tone::Highlight => self.highlight_style(),
			Tone::Banner => self.highlight_style().add_modifier(Modifier::BOLD),
			Tone::Muted => self.normal_style().add_modifier(Modifier::DIM),
		}
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub(super) fn answers_to(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.contains(&normalized)
	}
}
