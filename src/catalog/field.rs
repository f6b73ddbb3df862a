use std::fmt;

use super::CatalogError;

/// Book attribute a search or browse operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Title,
	Author,
	Year,
}

impl Field {
	/// Every field in menu order.
	pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Year];

	/// Lowercase identifier used in labels, prompts and on the command line.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Field::Title => "title",
			Field::Author => "author",
			Field::Year => "year",
		}
	}

	/// Capitalised name used in menu labels.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Field::Title => "Title",
			Field::Author => "Author",
			Field::Year => "Year",
		}
	}

	/// Parse a field name for a search request.
	pub fn parse_search(name: &str) -> Result<Self, CatalogError> {
		Self::lookup(name).ok_or_else(|| CatalogError::unknown_search_field(name))
	}

	/// Parse a field name for a browse request.
	pub fn parse_browse(name: &str) -> Result<Self, CatalogError> {
		Self::lookup(name).ok_or_else(|| CatalogError::unknown_browse_field(name))
	}

	fn lookup(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|field| field.as_str().eq_ignore_ascii_case(name.trim()))
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_accepts_any_case() {
		assert_eq!(Field::parse_search("Title").unwrap(), Field::Title);
		assert_eq!(Field::parse_browse(" YEAR ").unwrap(), Field::Year);
	}

	#[test]
	fn unknown_names_produce_operation_specific_errors() {
		let err = Field::parse_search("publisher").unwrap_err();
		assert_eq!(err.to_string(), "Unknown search field: publisher");
		let err = Field::parse_browse("publisher").unwrap_err();
		assert_eq!(err.to_string(), "Unknown browse field: publisher");
	}
}
