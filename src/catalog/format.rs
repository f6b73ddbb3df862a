use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const UNKNOWN: &str = "Unknown";

/// One book row as returned by the catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
	pub isbn: Option<String>,
	pub title: String,
	pub authors: Option<String>,
	pub year: Option<i64>,
}

/// Render query results as the block of text shown in the results viewer.
#[must_use]
pub fn format_results(books: &[BookRecord]) -> String {
	if books.is_empty() {
		return "No books found.".to_string();
	}

	let rule = "-".repeat(RULE_WIDTH);
	let mut out = String::new();
	let _ = writeln!(out, "Found {} book(s):", books.len());
	let _ = writeln!(out);
	out.push_str(&rule);

	for book in books {
		let year = book
			.year
			.filter(|year| *year != 0)
			.map(|year| year.to_string())
			.unwrap_or_else(|| UNKNOWN.to_string());
		let _ = write!(out, "\nTitle:   {}", book.title);
		let _ = write!(out, "\nAuthor:  {}", non_empty_or_unknown(book.authors.as_deref()));
		let _ = write!(out, "\nYear:    {year}");
		let _ = write!(out, "\nISBN:    {}", non_empty_or_unknown(book.isbn.as_deref()));
		let _ = write!(out, "\n{rule}");
	}

	out
}

fn non_empty_or_unknown(value: Option<&str>) -> &str {
	match value {
		Some(value) if !value.is_empty() => value,
		_ => UNKNOWN,
	}
}
