use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::{Connection, OpenFlags, Row, ToSql, params};
use tracing::debug;

use super::{BookRecord, Catalog, CatalogError, Field, format_results};

const BOOK_COLUMNS: &str = "
	b.id,
	b.isbn,
	b.title,
	b.publication_year,
	GROUP_CONCAT(DISTINCT a.name) AS authors";

/// [`Catalog`] backed by the SQLite library database.
///
/// A fresh read-only connection is opened for every request so the interface
/// never holds the database open while it waits for keys.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
	database: PathBuf,
}

impl SqliteCatalog {
	pub fn new(database: impl Into<PathBuf>) -> Self {
		Self {
			database: database.into(),
		}
	}

	#[must_use]
	pub fn database(&self) -> &Path {
		&self.database
	}

	fn connect(&self) -> Result<Connection, CatalogError> {
		Connection::open_with_flags(
			&self.database,
			OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
		)
		.map_err(|source| CatalogError::Storage {
			path: self.database.clone(),
			source,
		})
	}

	fn run(&self, sql: &str, args: &[&dyn ToSql]) -> Result<Vec<BookRecord>, CatalogError> {
		let started = Instant::now();
		let conn = self.connect()?;
		let mut stmt = conn.prepare(sql)?;
		let rows = stmt
			.query_map(args, map_book)?
			.collect::<Result<Vec<_>, _>>()?;
		debug!(
			rows = rows.len(),
			elapsed_ms = started.elapsed().as_millis() as u64,
			"catalog query finished"
		);
		Ok(rows)
	}
}

impl Catalog for SqliteCatalog {
	fn search(&self, field: Field, term: &str) -> Result<String, CatalogError> {
		let books = match field {
			Field::Title => {
				let sql = format!(
					"SELECT {BOOK_COLUMNS}
					FROM books_fts fts
					JOIN books b ON b.id = fts.rowid
					LEFT JOIN book_authors ba ON ba.book_id = b.id
					LEFT JOIN authors a ON a.id = ba.author_id
					WHERE books_fts MATCH ?1
					GROUP BY b.id
					ORDER BY rank"
				);
				self.run(&sql, params![prefix_phrase(term)])?
			}
			Field::Author => {
				let sql = format!(
					"SELECT {BOOK_COLUMNS}
					FROM authors_fts fts
					JOIN authors a ON a.id = fts.rowid
					JOIN book_authors ba ON ba.author_id = a.id
					JOIN books b ON b.id = ba.book_id
					WHERE authors_fts MATCH ?1
					GROUP BY b.id
					ORDER BY b.title"
				);
				self.run(&sql, params![prefix_phrase(term)])?
			}
			Field::Year => {
				let year = parse_year(term)?;
				let sql = format!(
					"SELECT {BOOK_COLUMNS}
					FROM books b
					LEFT JOIN book_authors ba ON ba.book_id = b.id
					LEFT JOIN authors a ON a.id = ba.author_id
					WHERE b.publication_year = ?1
					GROUP BY b.id
					ORDER BY b.title"
				);
				self.run(&sql, params![year])?
			}
		};

		Ok(format_results(&books))
	}

	fn browse(&self, field: Field) -> Result<String, CatalogError> {
		let (extra, order) = match field {
			Field::Title => ("", "b.title COLLATE NOCASE"),
			Field::Author => (
				", MIN(a.name) AS sort_author",
				"sort_author COLLATE NOCASE, b.title COLLATE NOCASE",
			),
			Field::Year => ("", "b.publication_year, b.title COLLATE NOCASE"),
		};
		let sql = format!(
			"SELECT {BOOK_COLUMNS}{extra}
			FROM books b
			LEFT JOIN book_authors ba ON ba.book_id = b.id
			LEFT JOIN authors a ON a.id = ba.author_id
			GROUP BY b.id
			ORDER BY {order}"
		);
		let books = self.run(&sql, &[])?;
		Ok(format_results(&books))
	}
}

fn map_book(row: &Row<'_>) -> rusqlite::Result<BookRecord> {
	Ok(BookRecord {
		isbn: row.get(1)?,
		title: row.get(2)?,
		year: row.get(3)?,
		authors: row.get(4)?,
	})
}

/// Quote `term` as an FTS5 phrase with prefix matching on its last token.
fn prefix_phrase(term: &str) -> String {
	format!("\"{}\"*", term.replace('"', "\"\""))
}

fn parse_year(term: &str) -> Result<i64, CatalogError> {
	term.trim()
		.parse()
		.map_err(|_| CatalogError::InvalidYear(term.to_string()))
}
