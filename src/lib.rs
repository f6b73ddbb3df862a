//! Core crate for `shelf`, a terminal catalog of a personal book library.
//!
//! The [`catalog`] module answers search and browse requests against the
//! SQLite store; [`ui`] drives the interactive menu, term editor and result
//! viewer on top of the drawing primitives in [`tui`].

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod tui;
pub mod ui;

pub use catalog::{BookRecord, Catalog, CatalogError, Field, SqliteCatalog};
pub use tui::{Theme, TerminalSession};
pub use ui::{App, LastSearch, UiConfig};
