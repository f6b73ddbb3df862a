use std::io::Stdout;
use std::ops::{Deref, DerefMut};

use ratatui::backend::CrosstermBackend;
use tracing::debug;

use super::surface::{CrosstermKeys, Screen, Surface, SurfaceError};
use super::theme::Theme;

pub type TerminalSurface = Surface<CrosstermBackend<Stdout>, CrosstermKeys>;

/// Exclusive hold on the controlling terminal.
///
/// Creating a session switches the terminal into raw mode on the alternate
/// screen. Dropping it restores the terminal, and the panic hook installed by
/// `ratatui::try_init` covers unwinding past it.
pub struct TerminalSession {
	surface: TerminalSurface,
}

impl TerminalSession {
	pub fn enter(theme: Theme) -> Result<Self, SurfaceError> {
		let terminal = ratatui::try_init()?;
		debug!("entered raw mode on the alternate screen");
		let mut session = Self {
			surface: Surface::new(terminal, CrosstermKeys, theme),
		};
		session.surface.terminal_mut().clear()?;
		session.surface.hide_cursor()?;
		Ok(session)
	}
}

impl Deref for TerminalSession {
	type Target = TerminalSurface;

	fn deref(&self) -> &Self::Target {
		&self.surface
	}
}

impl DerefMut for TerminalSession {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.surface
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		ratatui::restore();
		debug!("terminal restored");
	}
}
