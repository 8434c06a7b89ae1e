// tui-scrollback - Scrollback log view for ratatui
//
// A small auxiliary view component: content items are queued with `add`,
// converted into styled lines on the next draw, kept in a bounded scrollback
// buffer, and the most recent lines that fit the viewport are emitted.
//
// Architecture:
// - ScrollbackLog: shared handle over the pending queue and line buffer
// - Renderable: the capability content items implement (lines given width + style)
// - LogView (ratatui widget): draws the visible window into a frame
// - ScrollbackLayer: tracing bridge that feeds events into a log
// - Palette: named style resolution, hardcoded defaults or TOML files

pub mod capture;
pub mod log;
pub mod renderable;
pub mod style;
pub mod widget;

pub use capture::ScrollbackLayer;
pub use log::ScrollbackLog;
pub use renderable::{RenderFn, Renderable};
pub use style::{Palette, StyleRef, StyleResolver};
pub use widget::LogView;
