//! Terminal management module - raw mode, TUI wrapper, styles and rendering.

mod raw_mode;
pub mod rendering;
pub mod styles;
mod tui;

pub use rendering::render_app;
pub use tui::Tui;
