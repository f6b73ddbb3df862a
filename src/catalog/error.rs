use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while answering a search or browse request.
///
/// Every variant is recoverable from the interface's point of view: the
/// message is shown in place of results and the session carries on.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("Unknown {operation} field: {name}")]
	UnknownField {
		operation: &'static str,
		name: String,
	},
	#[error("Invalid year '{0}': expected a whole number")]
	InvalidYear(String),
	#[error("Catalog unavailable at {}: {source}", path.display())]
	Storage {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},
	#[error("Query failed: {0}")]
	Query(#[from] rusqlite::Error),
}

impl CatalogError {
	pub(crate) fn unknown_search_field(name: impl Into<String>) -> Self {
		Self::UnknownField {
			operation: "search",
			name: name.into(),
		}
	}

	pub(crate) fn unknown_browse_field(name: impl Into<String>) -> Self {
		Self::UnknownField {
			operation: "browse",
			name: name.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_field_messages_name_the_operation() {
		assert_eq!(
			CatalogError::unknown_search_field("isbn").to_string(),
			"Unknown search field: isbn"
		);
		assert_eq!(
			CatalogError::unknown_browse_field("isbn").to_string(),
			"Unknown browse field: isbn"
		);
	}

	#[test]
	fn invalid_year_echoes_the_term() {
		let message = CatalogError::InvalidYear("abc".into()).to_string();
		assert!(message.contains("'abc'"));
	}
}
