//! Query layer consumed by the interactive interface.
//!
//! The interface treats a [`Catalog`] as an opaque collaborator: it hands over
//! a field (and a term when searching) and receives text that is already
//! formatted for display. [`SqliteCatalog`] is the implementation backed by the
//! library database.

mod error;
mod field;
mod format;
mod sqlite;

pub use error::CatalogError;
pub use field::Field;
pub use format::{BookRecord, format_results};
pub use sqlite::SqliteCatalog;

/// Source of formatted search and browse listings.
pub trait Catalog {
	/// Find books whose `field` matches `term`.
	fn search(&self, field: Field, term: &str) -> Result<String, CatalogError>;

	/// List every book ordered by `field`.
	fn browse(&self, field: Field) -> Result<String, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
	fn search(&self, field: Field, term: &str) -> Result<String, CatalogError> {
		(**self).search(field, term)
	}

	fn browse(&self, field: Field) -> Result<String, CatalogError> {
		(**self).browse(field)
	}
}
