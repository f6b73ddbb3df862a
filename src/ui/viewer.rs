//! Scrollable, read-only view over a block of result text.

use crate::tui::{Key, Screen, SurfaceError, Tone};

use super::chrome::{self, FOOTER_ROWS, HEADER_ROWS, VIEWER_HINT};

/// Number of text rows available on a screen `height` rows tall.
#[must_use]
pub fn visible_rows(height: u16) -> usize {
	usize::from(height.saturating_sub(HEADER_ROWS + FOOTER_ROWS))
}

/// Outcome of feeding one key to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStep {
	Continue,
	Close,
}

/// Lines of the text being shown and the index of the first visible one.
#[derive(Debug, Clone)]
pub struct Viewport<'a> {
	lines: Vec<&'a str>,
	scroll_pos: usize,
}

impl<'a> Viewport<'a> {
	pub fn new(text: &'a str) -> Self {
		Self {
			lines: text.split('\n').collect(),
			scroll_pos: 0,
		}
	}

	#[must_use]
	pub fn total_lines(&self) -> usize {
		self.lines.len()
	}

	#[must_use]
	pub fn scroll_pos(&self) -> usize {
		self.scroll_pos
	}

	/// Largest valid scroll position for a window of `visible` rows.
	#[must_use]
	pub fn max_scroll(&self, visible: usize) -> usize {
		self.lines.len().saturating_sub(visible)
	}

	#[must_use]
	pub fn is_scrollable(&self, visible: usize) -> bool {
		self.lines.len() > visible
	}

	/// Lines inside the window of `visible` rows.
	#[must_use]
	pub fn window(&self, visible: usize) -> &[&'a str] {
		let start = self.scroll_pos.min(self.lines.len());
		let end = start.saturating_add(visible).min(self.lines.len());
		&self.lines[start..end]
	}

	/// Pull the scroll position back into range after the window changed size.
	pub fn clamp(&mut self, visible: usize) {
		self.scroll_pos = self.scroll_pos.min(self.max_scroll(visible));
	}

	fn scroll_up(&mut self, by: usize, visible: usize) {
		self.scroll_pos = self.scroll_pos.saturating_sub(by);
		self.clamp(visible);
	}

	fn scroll_down(&mut self, by: usize, visible: usize) {
		self.scroll_pos = self.scroll_pos.saturating_add(by);
		self.clamp(visible);
	}

	pub fn apply(&mut self, key: Key, visible: usize) -> ViewStep {
		let half = visible / 2;
		match key {
			Key::Up => self.scroll_up(1, visible),
			Key::Down => self.scroll_down(1, visible),
			Key::PageUp => self.scroll_up(visible, visible),
			Key::PageDown => self.scroll_down(visible, visible),
			Key::Char('u') => self.scroll_up(half, visible),
			Key::Char('d') => self.scroll_down(half, visible),
			Key::Home => self.scroll_pos = 0,
			Key::End => self.scroll_pos = self.max_scroll(visible),
			Key::Enter | Key::Char('q' | 'Q') => return ViewStep::Close,
			_ => {}
		}
		ViewStep::Continue
	}

	/// ` [first-last/total] `, or `None` when everything fits or nothing is visible.
	#[must_use]
	pub fn indicator(&self, visible: usize) -> Option<String> {
		if visible == 0 || !self.is_scrollable(visible) {
			return None;
		}
		let total = self.lines.len();
		let last = (self.scroll_pos + visible).min(total);
		Some(format!(" [{}-{}/{}] ", self.scroll_pos + 1, last, total))
	}

	/// Draw the current window and return the window size it was drawn with.
	fn draw<S: Screen + ?Sized>(&mut self, screen: &mut S, title: &str) -> Result<usize, SurfaceError> {
		let (height, width) = screen.dimensions()?;
		let visible = visible_rows(height);
		self.clamp(visible);

		screen.clear();
		chrome::draw_header(screen, title, width);
		chrome::draw_footer(screen, VIEWER_HINT, height, width);

		for (offset, line) in self.window(visible).iter().enumerate() {
			let row = HEADER_ROWS.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
			screen.write(row, 0, line, Tone::Normal);
		}

		if let Some(indicator) = self.indicator(visible) {
			let len = u16::try_from(indicator.chars().count()).unwrap_or(u16::MAX);
			let col = width.saturating_sub(len).saturating_sub(1);
			screen.write(0, col, &indicator, Tone::Banner);
		}

		screen.present()?;
		Ok(visible)
	}
}

/// Show `text` until the user leaves the viewer.
pub fn show_text<S: Screen + ?Sized>(screen: &mut S, title: &str, text: &str) -> Result<(), SurfaceError> {
	let mut viewport = Viewport::new(text);
	loop {
		let visible = viewport.draw(screen, title)?;
		if viewport.apply(screen.read_key()?, visible) == ViewStep::Close {
			return Ok(());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::surface::testing::{row_text, surface};

	fn numbered(count: usize) -> String {
		(1..=count)
			.map(|n| format!("line {n}"))
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn visible_rows_reserve_header_and_footer() {
		assert_eq!(visible_rows(24), 21);
		assert_eq!(visible_rows(3), 0);
		assert_eq!(visible_rows(1), 0);
	}

	#[test]
	fn page_down_on_a_standard_terminal() {
		let text = numbered(200);
		let mut viewport = Viewport::new(&text);
		let visible = visible_rows(24);
		viewport.apply(Key::PageDown, visible);
		assert_eq!(viewport.scroll_pos(), 21);
	}

	#[test]
	fn page_down_at_the_bottom_is_a_no_op() {
		let text = numbered(200);
		let mut viewport = Viewport::new(&text);
		viewport.apply(Key::End, 21);
		assert_eq!(viewport.scroll_pos(), 179);
		viewport.apply(Key::PageDown, 21);
		assert_eq!(viewport.scroll_pos(), 179);
		viewport.apply(Key::Down, 21);
		assert_eq!(viewport.scroll_pos(), 179);
	}

	#[test]
	fn half_page_keys_move_by_half_the_window() {
		let text = numbered(200);
		let mut viewport = Viewport::new(&text);
		viewport.apply(Key::Char('d'), 21);
		assert_eq!(viewport.scroll_pos(), 10);
		viewport.apply(Key::Char('u'), 21);
		viewport.apply(Key::Char('u'), 21);
		assert_eq!(viewport.scroll_pos(), 0);
	}

	#[test]
	fn short_text_never_scrolls() {
		let text = numbered(5);
		let mut viewport = Viewport::new(&text);
		for key in [Key::Down, Key::PageDown, Key::Char('d'), Key::End, Key::Up] {
			viewport.apply(key, 21);
			assert_eq!(viewport.scroll_pos(), 0);
		}
		assert_eq!(viewport.indicator(21), None);
	}

	#[test]
	fn scroll_position_stays_in_range_for_any_keys() {
		let keys = [
			Key::Up,
			Key::Down,
			Key::PageUp,
			Key::PageDown,
			Key::Char('u'),
			Key::Char('d'),
			Key::Home,
			Key::End,
			Key::Char('x'),
		];
		for total in [1usize, 7, 21, 22, 200] {
			let text = numbered(total);
			for visible in [0usize, 1, 5, 21] {
				let mut viewport = Viewport::new(&text);
				let mut state = (total * 31 + visible) as u64;
				for _ in 0..200 {
					state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
					let key = keys[((state >> 33) as usize) % keys.len()];
					assert_eq!(viewport.apply(key, visible), ViewStep::Continue);
					assert!(viewport.scroll_pos() <= total.saturating_sub(visible));
				}
			}
		}
	}

	#[test]
	fn enter_and_q_close_the_viewer() {
		let mut viewport = Viewport::new("text");
		assert_eq!(viewport.apply(Key::Enter, 10), ViewStep::Close);
		assert_eq!(viewport.apply(Key::Char('q'), 10), ViewStep::Close);
		assert_eq!(viewport.apply(Key::Char('Q'), 10), ViewStep::Close);
		assert_eq!(viewport.apply(Key::Escape, 10), ViewStep::Continue);
	}

	#[test]
	fn lines_are_kept_byte_for_byte() {
		let text = "a\n\n  indented\r\ntrailing \n";
		let viewport = Viewport::new(text);
		assert_eq!(viewport.window(10), &["a", "", "  indented\r", "trailing ", ""]);
	}

	#[test]
	fn indicator_reports_the_visible_range() {
		let text = numbered(200);
		let mut viewport = Viewport::new(&text);
		assert_eq!(viewport.indicator(21).as_deref(), Some(" [1-21/200] "));
		viewport.apply(Key::End, 21);
		assert_eq!(viewport.indicator(21).as_deref(), Some(" [180-200/200] "));
	}

	#[test]
	fn indicator_is_hidden_without_a_visible_row() {
		let viewport = Viewport::new("a\nb\nc");
		assert_eq!(viewport.indicator(0), None);
		assert_eq!(viewport.indicator(1).as_deref(), Some(" [1-1/3] "));
	}

	#[test]
	fn shrinking_the_terminal_reclamps_the_scroll_position() {
		let text = numbered(30);
		let mut screen = surface(40, 10, vec![Key::End, Key::Enter]);
		let mut viewport = Viewport::new(&text);
		let visible = viewport.draw(&mut screen, "T").unwrap();
		assert_eq!(visible, 7);
		viewport.apply(Key::End, visible);
		assert_eq!(viewport.scroll_pos(), 23);

		screen.backend_mut().resize(40, 30);
		let visible = viewport.draw(&mut screen, "T").unwrap();
		assert_eq!(visible, 27);
		assert_eq!(viewport.scroll_pos(), 3);
		assert_eq!(row_text(&screen, 2), "line 4");
	}

	#[test]
	fn show_text_renders_lines_below_the_header() {
		let text = numbered(30);
		let mut screen = surface(60, 10, vec![Key::Down, Key::Char('q')]);
		show_text(&mut screen, "LIBRARY CATALOG", &text).unwrap();
		assert_eq!(row_text(&screen, 2), "line 2");
		assert_eq!(row_text(&screen, 8), "line 8");
		assert!(row_text(&screen, 0).ends_with("[2-8/30]"));
		assert_eq!(
			row_text(&screen, 9),
			" [↑/↓] Scroll  [u/d] Half-page  [Enter/Q] Back"
		);
	}
}
