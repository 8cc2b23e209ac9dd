//! Character descriptor type and the per-codepoint classification rules.

use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Category of a single analyzed character.
///
/// Exactly one category applies to every codepoint; see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    #[default]
    Printable,
    Whitespace,
    Control,
    Extended,
}

impl CharCategory {
    /// Lowercase name used in exports.
    pub fn name(&self) -> &'static str {
        match self {
            CharCategory::Printable => "printable",
            CharCategory::Whitespace => "whitespace",
            CharCategory::Control => "control",
            CharCategory::Extended => "extended",
        }
    }
}

impl fmt::Display for CharCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All encoding representations of a single analyzed unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharDescriptor {
    /// Unicode scalar value, or the raw byte value in byte mode
    pub codepoint: u32,
    /// Glyph, or a placeholder for non-printable values
    pub display: String,
    pub hex: String,
    pub decimal: u32,
    pub binary: String,
    pub octal: String,
    /// `U+XXXX` form
    pub unicode_label: String,
    pub utf8_bytes: Vec<u8>,
    /// `utf8_bytes` as space-separated hex pairs
    pub utf8_hex: String,
    pub category: CharCategory,
    /// Offset of the first byte within the original input
    pub byte_offset: usize,
    /// Index among decoded units
    pub unit_offset: usize,
}

impl CharDescriptor {
    pub fn is_printable(&self) -> bool {
        self.category == CharCategory::Printable
    }

    pub fn is_whitespace(&self) -> bool {
        self.category == CharCategory::Whitespace
    }

    pub fn is_control(&self) -> bool {
        self.category == CharCategory::Control
    }

    pub fn is_extended(&self) -> bool {
        self.category == CharCategory::Extended
    }

    /// ASCII mnemonic for C0 controls and DEL (`NUL`, `ESC`, ...).
    pub fn control_name(&self) -> Option<&'static str> {
        control_name(self.codepoint)
    }
}

impl fmt::Display for CharDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (U+{:04X})", self.display, self.codepoint)
    }
}

/// Classify a codepoint.
///
/// Whitespace is checked before control: tab, LF and CR are control codes
/// but are reported as whitespace.
pub fn classify(codepoint: u32) -> CharCategory {
    match codepoint {
        0x20 | 0x09 | 0x0A | 0x0D => CharCategory::Whitespace,
        cp if is_control(cp) => CharCategory::Control,
        cp if cp > 0x7F => CharCategory::Extended,
        _ => CharCategory::Printable,
    }
}

/// Human-viewable rendering of a codepoint.
pub fn display_glyph(codepoint: u32) -> String {
    match codepoint {
        0x20 => "␣".to_string(),
        0x09 => "⇥".to_string(),
        0x0A => "↵".to_string(),
        0x0D => "↩".to_string(),
        0x00 => "∅".to_string(),
        cp => match char::from_u32(cp) {
            Some(ch) if is_printable(cp) => ch.to_string(),
            _ => format!("<{:02X}>", cp),
        },
    }
}

/// C0, DEL and C1 control codes (Unicode general category Cc).
pub fn is_control(codepoint: u32) -> bool {
    codepoint < 0x20 || (0x7F..=0x9F).contains(&codepoint)
}

/// Whether a codepoint has a visible glyph.
///
/// Letters, marks, numbers, punctuation and symbols are printable, plus ASCII
/// space. Other separators, controls, format characters, private use,
/// surrogates and unassigned codepoints are not.
pub fn is_printable(codepoint: u32) -> bool {
    if codepoint == 0x20 {
        return true;
    }
    let Some(ch) = char::from_u32(codepoint) else {
        return false;
    };

    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}

/// ASCII mnemonic of a control code.
pub fn control_name(codepoint: u32) -> Option<&'static str> {
    const C0: [&str; 32] = [
        "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "TAB", "LF", "VT", "FF",
        "CR", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM",
        "SUB", "ESC", "FS", "GS", "RS", "US",
    ];
    match codepoint {
        0x7F => Some("DEL"),
        cp if cp < 0x20 => Some(C0[cp as usize]),
        _ => None,
    }
}
