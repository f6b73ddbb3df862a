//! Terminal building blocks: the drawing surface, the raw-mode session that
//! owns the real terminal, and the colour themes.

pub mod session;
pub mod surface;
pub mod theme;

pub use session::{TerminalSession, TerminalSurface};
pub use surface::{CrosstermKeys, Key, KeySource, Screen, ScriptedKeys, Surface, SurfaceError};
pub use theme::{Theme, Tone};
