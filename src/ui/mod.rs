//! Interactive catalog interface.
//!
//! [`App`] owns the session and cycles through the main menu, the term editor
//! and the result viewer. Each component draws itself through
//! [`Screen`](crate::tui::Screen) and reads keys from it, so the whole
//! interface can be driven headlessly in tests.

mod app;
mod chrome;
mod config;
pub mod input;
pub mod menu;
pub mod viewer;

pub use app::{App, LastSearch};
pub use config::{DEFAULT_TITLE, UiConfig};
pub use menu::{Action, MenuItem};
