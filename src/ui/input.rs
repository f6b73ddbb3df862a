//! Single-line editor used to capture a search term.

use std::ops::{Deref, DerefMut};

use tracing::warn;

use crate::catalog::Field;
use crate::tui::{Key, Screen, SurfaceError, Tone};

use super::chrome::{self, BODY_TOP, INPUT_HINT};

/// Outcome of feeding one key to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
	Continue,
	/// Editing finished; `None` means nothing should be searched.
	Done(Option<String>),
}

/// Buffer of printable ASCII characters being typed.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
	buffer: String,
}

impl LineEditor {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	pub fn apply(&mut self, key: Key) -> EditStep {
		match key {
			Key::Char(ch) if (' '..='~').contains(&ch) => {
				self.buffer.push(ch);
				EditStep::Continue
			}
			Key::Backspace => {
				self.buffer.pop();
				EditStep::Continue
			}
			Key::Enter => {
				let term = std::mem::take(&mut self.buffer);
				let trimmed = term.trim();
				EditStep::Done((!trimmed.is_empty()).then(|| trimmed.to_string()))
			}
			Key::Escape => {
				self.buffer.clear();
				EditStep::Done(None)
			}
			_ => EditStep::Continue,
		}
	}
}

/// Keeps the cursor visible while a term is being typed and hides it again
/// however the edit ends.
struct CursorScope<'a, S: Screen + ?Sized> {
	screen: &'a mut S,
}

impl<'a, S: Screen + ?Sized> CursorScope<'a, S> {
	fn new(screen: &'a mut S) -> Self {
		Self { screen }
	}
}

impl<S: Screen + ?Sized> Deref for CursorScope<'_, S> {
	type Target = S;

	fn deref(&self) -> &S {
		&*self.screen
	}
}

impl<S: Screen + ?Sized> DerefMut for CursorScope<'_, S> {
	fn deref_mut(&mut self) -> &mut S {
		&mut *self.screen
	}
}

impl<S: Screen + ?Sized> Drop for CursorScope<'_, S> {
	fn drop(&mut self) {
		if let Err(err) = self.screen.hide_cursor() {
			warn!(error = %err, "failed to hide the cursor after editing");
		}
	}
}

/// The part of `buffer` that fits in `room` columns, keeping the end visible.
fn visible_tail(buffer: &str, room: usize) -> &str {
	let len = buffer.chars().count();
	if len <= room {
		return buffer;
	}
	let skip = len - room;
	match buffer.char_indices().nth(skip) {
		Some((start, _)) => &buffer[start..],
		None => "",
	}
}

fn draw<S: Screen + ?Sized>(
	screen: &mut S,
	title: &str,
	prompt: &str,
	buffer: &str,
) -> Result<(), SurfaceError> {
	let (height, width) = screen.dimensions()?;
	screen.clear();
	chrome::draw_header(screen, title, width);
	chrome::draw_footer(screen, INPUT_HINT, height, width);
	screen.write(BODY_TOP, 2, prompt, Tone::Normal);

	let prompt_len = u16::try_from(prompt.chars().count()).unwrap_or(u16::MAX);
	let field_col = prompt_len.saturating_add(2);
	// The input field stops two columns short of the right edge.
	let room = usize::from(width.saturating_sub(field_col).saturating_sub(2));
	let shown = visible_tail(buffer, room);
	screen.write(BODY_TOP, field_col, shown, Tone::Normal);

	let shown_len = u16::try_from(shown.chars().count()).unwrap_or(u16::MAX);
	screen.show_cursor_at(BODY_TOP, field_col.saturating_add(shown_len));
	screen.present()
}

/// Ask for a search term on `field`. `None` means the search was cancelled.
pub fn prompt_term<S: Screen + ?Sized>(
	screen: &mut S,
	title: &str,
	field: Field,
) -> Result<Option<String>, SurfaceError> {
	let prompt = format!("Enter {field}: ");
	let mut editor = LineEditor::new();
	let mut scope = CursorScope::new(screen);

	loop {
		draw(&mut *scope, title, &prompt, editor.buffer())?;
		if let EditStep::Done(term) = editor.apply(scope.read_key()?) {
			return Ok(term);
		}
	}
}
