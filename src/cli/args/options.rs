use clap::Subcommand;

/// One-shot catalog queries that print to stdout instead of opening the interface.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Search the catalog and print the matching books
	Search {
		#[arg(value_name = "FIELD", help = "Field to search by: title, author or year")]
		field: String,
		#[arg(value_name = "TERM", help = "Search term (title and author match word prefixes)")]
		term: String,
	},
	/// Print every book ordered by a field
	Browse {
		#[arg(value_name = "FIELD", help = "Field to order by: title, author or year")]
		field: String,
	},
}
