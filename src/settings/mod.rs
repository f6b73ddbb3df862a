//! Configuration loading and resolution.
//!
//! Values are layered from config files, `SHELF__SECTION__KEY` environment
//! variables and CLI flags, in increasing precedence. `load` is the entry point
//! and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
