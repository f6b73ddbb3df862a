//! Main menu: item list construction and the selection state machine.

use crate::catalog::Field;
use crate::tui::{Key, Screen, SurfaceError, Tone};

use super::chrome::{self, BODY_TOP, MENU_HINT};
use super::LastSearch;

/// What the user asked for from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Repeat,
	Search(Field),
	Browse(Field),
	Quit,
}

/// Role of a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
	/// Non-interactive section title.
	Header,
	Action(Action),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
	pub kind: ItemKind,
	pub label: String,
}

impl MenuItem {
	fn header(label: &str) -> Self {
		Self {
			kind: ItemKind::Header,
			label: format!("── {label} ──"),
		}
	}

	fn action(action: Action, label: String) -> Self {
		Self {
			kind: ItemKind::Action(action),
			label,
		}
	}

	#[must_use]
	pub fn selectable(&self) -> bool {
		matches!(self.kind, ItemKind::Action(_))
	}

	#[must_use]
	pub fn action_tag(&self) -> Option<Action> {
		match self.kind {
			ItemKind::Action(action) => Some(action),
			ItemKind::Header => None,
		}
	}
}

/// Build the menu rows shown for the given session state.
#[must_use]
pub fn build_menu(last_search: Option<&LastSearch>) -> Vec<MenuItem> {
	let mut items = Vec::with_capacity(10);

	if let Some(last) = last_search {
		items.push(MenuItem::action(
			Action::Repeat,
			format!("Repeat: {} = '{}'", last.field, last.term),
		));
	}

	items.push(MenuItem::header("Search"));
	items.extend(Field::ALL.into_iter().map(|field| {
		MenuItem::action(Action::Search(field), format!("Search by {}", field.label()))
	}));
	items.push(MenuItem::header("Browse"));
	items.extend(Field::ALL.into_iter().map(|field| {
		MenuItem::action(Action::Browse(field), format!("Browse by {}", field.label()))
	}));
	items.push(MenuItem::action(Action::Quit, "Quit".to_string()));

	items
}

/// Result of feeding one key to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
	Continue,
	Chosen(Action),
}

/// Menu items plus a cursor over their selectable subset.
#[derive(Debug, Clone)]
pub struct Menu {
	items: Vec<MenuItem>,
	selectable: Vec<usize>,
	cursor: usize,
}

impl Menu {
	/// # Panics
	///
	/// Panics when `items` contains no selectable row.
	#[must_use]
	pub fn new(items: Vec<MenuItem>) -> Self {
		let selectable: Vec<usize> = items
			.iter()
			.enumerate()
			.filter(|(_, item)| item.selectable())
			.map(|(index, _)| index)
			.collect();
		assert!(!selectable.is_empty(), "menu needs at least one selectable item");

		Self {
			items,
			selectable,
			cursor: 0,
		}
	}

	#[must_use]
	pub fn for_session(last_search: Option<&LastSearch>) -> Self {
		Self::new(build_menu(last_search))
	}

	#[must_use]
	pub fn items(&self) -> &[MenuItem] {
		&self.items
	}

	/// Number of rows the cursor can land on.
	#[must_use]
	pub fn selectable_len(&self) -> usize {
		self.selectable.len()
	}

	/// Index into [`Menu::items`] of the highlighted row.
	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.selectable[self.cursor]
	}

	#[must_use]
	pub fn selected(&self) -> &MenuItem {
		&self.items[self.selected_index()]
	}

	pub fn apply(&mut self, key: Key) -> MenuStep {
		match key {
			Key::Up => {
				self.cursor = self.cursor.saturating_sub(1);
				MenuStep::Continue
			}
			Key::Down => {
				if self.cursor + 1 < self.selectable.len() {
					self.cursor += 1;
				}
				MenuStep::Continue
			}
			Key::Enter => match self.selected().action_tag() {
				Some(action) => MenuStep::Chosen(action),
				None => MenuStep::Continue,
			},
			Key::Char('q' | 'Q') => MenuStep::Chosen(Action::Quit),
			_ => MenuStep::Continue,
		}
	}

	fn draw<S: Screen + ?Sized>(&self, screen: &mut S, title: &str) -> Result<(), SurfaceError> {
		let (height, width) = screen.dimensions()?;
		screen.clear();
		chrome::draw_header(screen, title, width);
		chrome::draw_footer(screen, MENU_HINT, height, width);

		let selected = self.selected_index();
		for (index, item) in self.items.iter().enumerate() {
			let row = BODY_TOP.saturating_add(u16::try_from(index).unwrap_or(u16::MAX));
			if row >= height.saturating_sub(2) {
				break;
			}
			if !item.selectable() {
				screen.write(row, 2, &item.label, Tone::Muted);
			} else if index == selected {
				screen.write(row, 2, &format!(" {} ", item.label), Tone::Highlight);
			} else {
				screen.write(row, 4, &item.label, Tone::Normal);
			}
		}

		screen.present()
	}
}

/// Show the main menu until an item is chosen.
pub fn choose_action<S: Screen + ?Sized>(
	screen: &mut S,
	title: &str,
	last_search: Option<&LastSearch>,
) -> Result<Action, SurfaceError> {
	let mut menu = Menu::for_session(last_search);
	loop {
		menu.draw(screen, title)?;
		if let MenuStep::Chosen(action) = menu.apply(screen.read_key()?) {
			return Ok(action);
		}
	}
}
