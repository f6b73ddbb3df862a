/// Title shown in the header bar unless configured otherwise.
pub const DEFAULT_TITLE: &str = "LIBRARY CATALOG";

/// Presentation settings for the interactive interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
}

impl UiConfig {
	#[must_use]
	pub fn with_title(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
		}
	}
}

impl Default for UiConfig {
	fn default() -> Self {
		Self::with_title(DEFAULT_TITLE)
	}
}
