//! Find characters by glyph, hex, decimal or Unicode label.

use crate::analysis::CharDescriptor;

/// Indices of descriptors matching `query`, in ascending order.
///
/// The query is compared case-insensitively against the display glyph, the
/// hex value (optional `0x` prefix), the decimal value and the Unicode label
/// (optional `U+` prefix). An empty query matches nothing.
pub fn find_matches(descriptors: &[CharDescriptor], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let hex_query = query.strip_prefix("0x").unwrap_or(&query);
    let upper = query.to_uppercase();
    let unicode_query = upper.strip_prefix("U+").unwrap_or(&upper);

    descriptors
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            c.display.to_lowercase() == query
                || c.hex.to_lowercase() == hex_query
                || c.decimal.to_string() == query
                || c.unicode_label.trim_start_matches("U+") == unicode_query
        })
        .map(|(idx, _)| idx)
        .collect()
}
