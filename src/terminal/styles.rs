//! Color palette and text styles.

use ratatui::style::{Color, Modifier, Style};

use crate::analysis::CharCategory;

pub const COLOR_PRIMARY: Color = Color::Rgb(0x7D, 0x56, 0xF4);
pub const COLOR_SUCCESS: Color = Color::Rgb(0x73, 0xF5, 0x9F);
pub const COLOR_ERROR: Color = Color::Rgb(0xFF, 0x46, 0x72);
pub const COLOR_MUTED: Color = Color::Rgb(0x92, 0x92, 0x92);
pub const COLOR_TEXT: Color = Color::Rgb(0xEE, 0xEE, 0xEE);
pub const COLOR_WHITESPACE: Color = Color::Rgb(0x00, 0xE2, 0xC7);
pub const COLOR_CONTROL: Color = Color::Rgb(0xFF, 0x76, 0x98);
pub const COLOR_EXTENDED: Color = Color::Rgb(0xFD, 0xFF, 0x90);

pub fn header() -> Style {
    Style::default()
        .fg(COLOR_TEXT)
        .bg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn success() -> Style {
    Style::default().fg(COLOR_SUCCESS)
}

pub fn error() -> Style {
    Style::default().fg(COLOR_ERROR)
}

pub fn highlighted() -> Style {
    Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn table_label() -> Style {
    Style::default().fg(COLOR_MUTED).add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default()
        .fg(COLOR_TEXT)
        .bg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Foreground color for a character category.
pub fn category(category: CharCategory) -> Style {
    let fg = match category {
        CharCategory::Printable => COLOR_TEXT,
        CharCategory::Whitespace => COLOR_WHITESPACE,
        CharCategory::Control => COLOR_CONTROL,
        CharCategory::Extended => COLOR_EXTENDED,
    };
    Style::default().fg(fg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_have_distinct_colors() {
        let colors = [
            category(CharCategory::Printable).fg,
            category(CharCategory::Whitespace).fg,
            category(CharCategory::Control).fg,
            category(CharCategory::Extended).fg,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
