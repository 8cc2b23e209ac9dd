//! Character encoding analysis.
//!
//! Turns text (or raw bytes) into an ordered list of [`CharDescriptor`]s,
//! one per decoded unit, holding every representation the UI and exporter
//! need.

mod analyzer;
mod character;

pub use analyzer::{analyze_bytes, analyze_text, format_binary, Analyzer};
pub use character::{
    classify, control_name, display_glyph, is_control, is_printable, CharCategory,
    CharDescriptor,
};
