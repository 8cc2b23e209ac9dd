//! String and byte analysis entry points.

use super::character::{classify, display_glyph, CharDescriptor};

/// Stateless analyzer. Both entry points are pure over their argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze `input` as a sequence of Unicode scalar values.
    ///
    /// One descriptor is produced per `char`; multi-byte characters keep all
    /// of their UTF-8 bytes in a single descriptor.
    pub fn analyze_text(&self, input: &str) -> Vec<CharDescriptor> {
        let mut descriptors = Vec::with_capacity(input.chars().count());
        let mut byte_offset = 0;

        for (unit_offset, ch) in input.chars().enumerate() {
            let mut buf = [0u8; 4];
            let utf8_bytes = ch.encode_utf8(&mut buf).as_bytes().to_vec();
            let codepoint = ch as u32;

            descriptors.push(CharDescriptor {
                codepoint,
                display: display_glyph(codepoint),
                hex: format!("{:02X}", codepoint),
                decimal: codepoint,
                binary: format_binary(codepoint),
                octal: format!("{:o}", codepoint),
                unicode_label: format!("U+{:04X}", codepoint),
                utf8_hex: hex_pairs(&utf8_bytes),
                category: classify(codepoint),
                byte_offset,
                unit_offset,
                utf8_bytes,
            });

            byte_offset += ch.len_utf8();
        }

        descriptors
    }

    /// Analyze `input` byte by byte, without multi-byte decoding.
    pub fn analyze_bytes(&self, input: &[u8]) -> Vec<CharDescriptor> {
        input
            .iter()
            .enumerate()
            .map(|(offset, &byte)| {
                let codepoint = u32::from(byte);
                CharDescriptor {
                    codepoint,
                    display: display_glyph(codepoint),
                    hex: format!("{:02X}", byte),
                    decimal: codepoint,
                    binary: format!("{:08b}", byte),
                    octal: format!("{:03o}", byte),
                    unicode_label: format!("U+{:04X}", codepoint),
                    utf8_bytes: vec![byte],
                    utf8_hex: hex::encode_upper([byte]),
                    category: classify(codepoint),
                    byte_offset: offset,
                    unit_offset: offset,
                }
            })
            .collect()
    }
}

/// Analyze a string with a default [`Analyzer`].
pub fn analyze_text(input: &str) -> Vec<CharDescriptor> {
    Analyzer::new().analyze_text(input)
}

/// Analyze raw bytes with a default [`Analyzer`].
pub fn analyze_bytes(input: &[u8]) -> Vec<CharDescriptor> {
    Analyzer::new().analyze_bytes(input)
}

/// Zero-padded binary: 8 bits up to 0xFF, 16 up to 0xFFFF, otherwise 21.
pub fn format_binary(codepoint: u32) -> String {
    if codepoint <= 0xFF {
        format!("{:08b}", codepoint)
    } else if codepoint <= 0xFFFF {
        format!("{:016b}", codepoint)
    } else {
        format!("{:021b}", codepoint)
    }
}

fn hex_pairs(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}
