use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use crate::catalog::{Catalog, CatalogError, Field};
use crate::tui::{Screen, SurfaceError, Tone};

use super::chrome::{self, BODY_TOP};
use super::config::UiConfig;
use super::input::prompt_term;
use super::menu::{Action, choose_action};
use super::viewer::show_text;

/// The most recent search, offered again as the first menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSearch {
	pub field: Field,
	pub term: String,
}

/// Session state and the loop tying the menu, editor and viewer together.
///
/// The app is the only writer of [`LastSearch`]; the components it drives
/// receive it read-only.
pub struct App<'a, S: Screen + ?Sized, C: Catalog + ?Sized> {
	screen: &'a mut S,
	catalog: &'a C,
	config: UiConfig,
	last_search: Option<LastSearch>,
}

impl<'a, S: Screen + ?Sized, C: Catalog + ?Sized> App<'a, S, C> {
	pub fn new(screen: &'a mut S, catalog: &'a C, config: UiConfig) -> Self {
		Self {
			screen,
			catalog,
			config,
			last_search: None,
		}
	}

	#[must_use]
	pub fn last_search(&self) -> Option<&LastSearch> {
		self.last_search.as_ref()
	}

	/// Run menu cycles until the user quits.
	pub fn run(&mut self) -> Result<(), SurfaceError> {
		info!("catalog session started");
		loop {
			let action = choose_action(&mut *self.screen, &self.config.title, self.last_search.as_ref())?;
			debug!(?action, "menu choice");

			match action {
				Action::Quit => break,
				Action::Repeat => {
					if let Some(LastSearch { field, term }) = self.last_search.clone() {
						self.search(field, term)?;
					}
				}
				Action::Search(field) => {
					match prompt_term(&mut *self.screen, &self.config.title, field)? {
						Some(term) => self.search(field, term)?,
						None => debug!(%field, "search cancelled"),
					}
				}
				Action::Browse(field) => self.browse(field)?,
			}
		}
		info!("catalog session finished");
		Ok(())
	}

	fn search(&mut self, field: Field, term: String) -> Result<(), SurfaceError> {
		let span = info_span!("search", %field, term = %term);
		let _guard = span.enter();

		self.last_search = Some(LastSearch {
			field,
			term: term.clone(),
		});
		self.show_status("Searching...")?;

		let started = Instant::now();
		let outcome = self.catalog.search(field, &term);
		let text = describe(outcome, started);
		show_text(&mut *self.screen, &self.config.title, &text)
	}

	fn browse(&mut self, field: Field) -> Result<(), SurfaceError> {
		let span = info_span!("browse", %field);
		let _guard = span.enter();

		self.show_status("Loading...")?;

		let started = Instant::now();
		let outcome = self.catalog.browse(field);
		let text = describe(outcome, started);
		show_text(&mut *self.screen, &self.config.title, &text)
	}

	/// Draw a one-line status under the header while the catalog is busy.
	fn show_status(&mut self, message: &str) -> Result<(), SurfaceError> {
		let (_, width) = self.screen.dimensions()?;
		self.screen.clear();
		chrome::draw_header(&mut *self.screen, &self.config.title, width);
		self.screen.write(BODY_TOP, 2, message, Tone::Normal);
		self.screen.present()
	}
}

/// Turn a catalog answer into the text handed to the viewer.
fn describe(outcome: Result<String, CatalogError>, started: Instant) -> String {
	let elapsed_ms = started.elapsed().as_millis() as u64;
	match outcome {
		Ok(text) => {
			info!(elapsed_ms, lines = text.lines().count(), "catalog answered");
			text
		}
		Err(err) => {
			warn!(elapsed_ms, error = %err, "catalog request failed");
			err.to_string()
		}
	}
}
