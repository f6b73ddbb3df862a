//! Header and footer bars shared by every screen.

use unicode_width::UnicodeWidthStr;

use crate::tui::{Screen, Tone};

/// Rows at the top reserved for the header bar and the gap below it.
pub const HEADER_ROWS: u16 = 2;
/// Rows at the bottom reserved for the footer bar.
pub const FOOTER_ROWS: u16 = 1;
/// First row used for menu items, prompts and status messages.
pub const BODY_TOP: u16 = 3;

pub(crate) const MENU_HINT: &str = " [↑/↓] Navigate  [Enter] Select  [Q] Quit ";
pub(crate) const INPUT_HINT: &str = " [Enter] Search  [Esc] Cancel ";
pub(crate) const VIEWER_HINT: &str = " [↑/↓] Scroll  [u/d] Half-page  [Enter/Q] Back ";

/// Fill the top row and centre ` title ` in it.
pub fn draw_header<S: Screen + ?Sized>(screen: &mut S, title: &str, width: u16) {
	let banner = format!(" {title} ");
	screen.write(0, 0, &" ".repeat(usize::from(width)), Tone::Banner);
	let len = u16::try_from(banner.width()).unwrap_or(u16::MAX);
	screen.write(0, width.saturating_sub(len) / 2, &banner, Tone::Banner);
}

/// Fill the bottom row and print `hint` at its start.
pub fn draw_footer<S: Screen + ?Sized>(screen: &mut S, hint: &str, height: u16, width: u16) {
	let Some(row) = height.checked_sub(1) else {
		return;
	};
	screen.write(row, 0, &" ".repeat(usize::from(width)), Tone::Highlight);
	screen.write(row, 0, hint, Tone::Highlight);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::surface::testing::{row_text, surface};

	#[test]
	fn header_centres_the_title() {
		let mut screen = surface(20, 4, vec![]);
		let (height, width) = screen.dimensions().unwrap();
		screen.clear();
		draw_header(&mut screen, "CAT", width);
		draw_footer(&mut screen, " [Q]uit ", height, width);
		screen.present().unwrap();
		assert_eq!(row_text(&screen, 0), "        CAT");
		assert_eq!(row_text(&screen, 3), " [Q]uit");
	}

	#[test]
	fn footer_is_skipped_on_a_zero_height_screen() {
		let mut screen = surface(20, 4, vec![]);
		screen.clear();
		draw_footer(&mut screen, "hint", 0, 20);
		screen.present().unwrap();
		assert!(row_text(&screen, 3).is_empty());
	}
}
