//! Drawing and key-reading primitives over a ratatui terminal.
//!
//! Components never touch ratatui directly: they describe a frame as a list of
//! positioned text runs through [`Screen`], then present it. This keeps the
//! geometry rules (clipping, out-of-range rows) in one place and lets tests run
//! the real surface over a `TestBackend` with a scripted key source.

use std::collections::VecDeque;
use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;
use thiserror::Error;

use super::theme::{Theme, Tone};

/// A single key press as seen by the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Up,
	Down,
	PageUp,
	PageDown,
	Home,
	End,
	Enter,
	Escape,
	Backspace,
	Char(char),
	/// The terminal changed size; callers redraw with fresh dimensions.
	Resize,
	/// A key press with no meaning to the interface.
	Other,
}

#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("terminal I/O failed: {0}")]
	Io(#[from] io::Error),
	#[error("interrupted")]
	Interrupted,
}

/// Blocking supplier of key presses.
pub trait KeySource {
	fn next_key(&mut self) -> Result<Key, SurfaceError>;
}

/// Key source reading crossterm events from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
	fn next_key(&mut self) -> Result<Key, SurfaceError> {
		loop {
			if let Some(key) = translate_event(event::read()?)? {
				return Ok(key);
			}
		}
	}
}

/// Map a crossterm event to a [`Key`]. `Ok(None)` means the event is skipped.
fn translate_event(event: Event) -> Result<Option<Key>, SurfaceError> {
	match event {
		Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
		Event::Resize(_, _) => Ok(Some(Key::Resize)),
		_ => Ok(None),
	}
}

fn translate_key(key: KeyEvent) -> Result<Option<Key>, SurfaceError> {
	let control = key.modifiers.contains(KeyModifiers::CONTROL);
	let mapped = match key.code {
		KeyCode::Char('c') if control => return Err(SurfaceError::Interrupted),
		// Terminals whose erase character is ^H send 0x08 for Backspace.
		KeyCode::Char('h') if control => Key::Backspace,
		KeyCode::Char(_) if control || key.modifiers.contains(KeyModifiers::ALT) => Key::Other,
		KeyCode::Char(ch) => Key::Char(ch),
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		KeyCode::PageUp => Key::PageUp,
		KeyCode::PageDown => Key::PageDown,
		KeyCode::Home => Key::Home,
		KeyCode::End => Key::End,
		KeyCode::Enter => Key::Enter,
		KeyCode::Esc => Key::Escape,
		KeyCode::Backspace => Key::Backspace,
		_ => Key::Other,
	};
	Ok(Some(mapped))
}

/// Key source replaying a fixed script, used to drive the interface headlessly.
///
/// Running out of keys reads as an interrupt so a script that never quits
/// cannot hang.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
	keys: VecDeque<Key>,
}

impl ScriptedKeys {
	pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
		Self {
			keys: keys.into_iter().collect(),
		}
	}

	/// Script typing `text` one character at a time.
	pub fn typed(text: &str) -> impl Iterator<Item = Key> + '_ {
		text.chars().map(Key::Char)
	}

	#[must_use]
	pub fn remaining(&self) -> usize {
		self.keys.len()
	}
}

impl KeySource for ScriptedKeys {
	fn next_key(&mut self) -> Result<Key, SurfaceError> {
		self.keys.pop_front().ok_or(SurfaceError::Interrupted)
	}
}

/// Drawing operations every interface component is written against.
pub trait Screen {
	/// Query the current `(height, width)`. Later writes clip against it.
	fn dimensions(&mut self) -> Result<(u16, u16), SurfaceError>;

	/// Start a new frame.
	fn clear(&mut self);

	/// Queue `text` at `row`/`col`, clipped to `width - col - 1` characters.
	/// Rows outside the screen are ignored.
	fn write(&mut self, row: u16, col: u16, text: &str, tone: Tone);

	/// Show the cursor at the given cell when the frame is presented.
	fn show_cursor_at(&mut self, row: u16, col: u16);

	/// Hide the cursor immediately.
	fn hide_cursor(&mut self) -> Result<(), SurfaceError>;

	/// Flush the queued frame to the terminal.
	fn present(&mut self) -> Result<(), SurfaceError>;

	/// Block until the next key press.
	fn read_key(&mut self) -> Result<Key, SurfaceError>;
}

#[derive(Debug, Clone)]
struct TextRun {
	row: u16,
	col: u16,
	text: String,
	tone: Tone,
}

/// [`Screen`] implementation over a ratatui [`Terminal`].
pub struct Surface<B: Backend, K: KeySource> {
	terminal: Terminal<B>,
	keys: K,
	theme: Theme,
	size: Size,
	runs: Vec<TextRun>,
	cursor: Option<(u16, u16)>,
}

impl<B: Backend, K: KeySource> Surface<B, K> {
	pub fn new(terminal: Terminal<B>, keys: K, theme: Theme) -> Self {
		Self {
			terminal,
			keys,
			theme,
			size: Size::default(),
			runs: Vec::new(),
			cursor: None,
		}
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme
	}

	#[must_use]
	pub fn backend(&self) -> &B {
		self.terminal.backend()
	}

	pub fn backend_mut(&mut self) -> &mut B {
		self.terminal.backend_mut()
	}

	#[must_use]
	pub fn keys(&self) -> &K {
		&self.keys
	}

	/// Whether the last presented frame asked for a visible cursor.
	#[must_use]
	pub fn cursor(&self) -> Option<(u16, u16)> {
		self.cursor
	}

	pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
		&mut self.terminal
	}
}

/// Truncate `text` to at most `max` characters.
fn clip(text: &str, max: usize) -> &str {
	match text.char_indices().nth(max) {
		Some((end, _)) => &text[..end],
		None => text,
	}
}

impl<B: Backend, K: KeySource> Screen for Surface<B, K> {
	fn dimensions(&mut self) -> Result<(u16, u16), SurfaceError> {
		self.size = self.terminal.size()?;
		Ok((self.size.height, self.size.width))
	}

	fn clear(&mut self) {
		self.runs.clear();
		self.cursor = None;
	}

	fn write(&mut self, row: u16, col: u16, text: &str, tone: Tone) {
		if row >= self.size.height {
			return;
		}
		let room = usize::from(self.size.width.saturating_sub(col).saturating_sub(1));
		let text = clip(text, room);
		if text.is_empty() {
			return;
		}
		self.runs.push(TextRun {
			row,
			col,
			text: text.to_string(),
			tone,
		});
	}

	fn show_cursor_at(&mut self, row: u16, col: u16) {
		self.cursor = Some((row, col));
	}

	fn hide_cursor(&mut self) -> Result<(), SurfaceError> {
		self.cursor = None;
		self.terminal.hide_cursor()?;
		Ok(())
	}

	fn present(&mut self) -> Result<(), SurfaceError> {
		let theme = self.theme;
		let runs = &self.runs;
		let cursor = self.cursor;
		self.terminal.draw(|frame| {
			let area = frame.area();
			let buffer = frame.buffer_mut();
			buffer.set_style(area, theme.normal_style());
			for run in runs {
				// The terminal may have shrunk since the run was queued.
				if run.row >= area.height || run.col >= area.width {
					continue;
				}
				let room = usize::from(area.width - run.col - 1);
				buffer.set_stringn(
					area.x + run.col,
					area.y + run.row,
					&run.text,
					room,
					theme.style(run.tone),
				);
			}
			if let Some((row, col)) = cursor {
				if row < area.height && col < area.width {
					frame.set_cursor_position((area.x + col, area.y + row));
				}
			}
		})?;
		Ok(())
	}

	fn read_key(&mut self) -> Result<Key, SurfaceError> {
		self.keys.next_key()
	}
}


#[cfg(test)]
mod tests {
	use super::testing::{row_text, surface};
	use super::*;
	use ratatui::style::Color;

	#[test]
	fn writes_are_clipped_to_leave_the_last_column_free() {
		let mut screen = surface(10, 3, vec![]);
		screen.dimensions().unwrap();
		screen.clear();
		screen.write(1, 4, "abcdefghij", Tone::Normal);
		screen.present().unwrap();
		assert_eq!(row_text(&screen, 1), "    abcde");
	}

	#[test]
	fn writes_outside_the_screen_are_dropped() {
		let mut screen = surface(10, 3, vec![]);
		screen.dimensions().unwrap();
		screen.clear();
		screen.write(3, 0, "below", Tone::Normal);
		screen.write(0, 9, "edge", Tone::Normal);
		screen.write(0, 40, "far", Tone::Normal);
		screen.present().unwrap();
		assert!(row_text(&screen, 0).is_empty());
	}

	#[test]
	fn runs_queued_before_a_shrink_are_clipped_on_present() {
		let mut screen = surface(20, 5, vec![]);
		screen.dimensions().unwrap();
		screen.clear();
		screen.write(4, 0, "bottom row", Tone::Normal);
		screen.write(0, 0, "a long line of text", Tone::Normal);
		screen.backend_mut().resize(8, 3);
		screen.present().unwrap();
		assert_eq!(row_text(&screen, 0), "a long");
	}

	#[test]
	fn tones_map_to_theme_styles() {
		let mut screen = surface(10, 2, vec![]);
		screen.dimensions().unwrap();
		screen.clear();
		screen.write(0, 0, "hi", Tone::Highlight);
		screen.present().unwrap();
		let buffer = screen.backend().buffer();
		assert_eq!(buffer.content[0].bg, Color::Green);
		assert_eq!(buffer.content[0].fg, Color::Black);
		assert_eq!(buffer.content[5].bg, Color::Black);
	}

	#[test]
	fn cursor_is_only_kept_until_the_next_frame() {
		let mut screen = surface(10, 2, vec![]);
		screen.dimensions().unwrap();
		screen.show_cursor_at(0, 3);
		assert_eq!(screen.cursor(), Some((0, 3)));
		screen.clear();
		assert_eq!(screen.cursor(), None);
	}

	#[test]
	fn scripted_keys_end_in_an_interrupt() {
		let mut screen = surface(10, 2, vec![Key::Enter]);
		assert_eq!(screen.read_key().unwrap(), Key::Enter);
		assert!(matches!(screen.read_key(), Err(SurfaceError::Interrupted)));
	}

	#[test]
	fn crossterm_events_translate_to_keys() {
		let press = |code, modifiers| Event::Key(KeyEvent::new(code, modifiers));
		assert_eq!(
			translate_event(press(KeyCode::Char('q'), KeyModifiers::NONE)).unwrap(),
			Some(Key::Char('q'))
		);
		assert_eq!(
			translate_event(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)).unwrap(),
			Some(Key::Char('Q'))
		);
		assert_eq!(
			translate_event(press(KeyCode::PageDown, KeyModifiers::NONE)).unwrap(),
			Some(Key::PageDown)
		);
		assert_eq!(
			translate_event(press(KeyCode::Tab, KeyModifiers::NONE)).unwrap(),
			Some(Key::Other)
		);
		assert_eq!(
			translate_event(press(KeyCode::Char('h'), KeyModifiers::CONTROL)).unwrap(),
			Some(Key::Backspace)
		);
		assert_eq!(
			translate_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)).unwrap(),
			Some(Key::Other)
		);
		assert_eq!(translate_event(Event::Resize(80, 24)).unwrap(), Some(Key::Resize));
		assert_eq!(translate_event(Event::FocusGained).unwrap(), None);
		assert!(matches!(
			translate_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
			Err(SurfaceError::Interrupted)
		));
	}
}
