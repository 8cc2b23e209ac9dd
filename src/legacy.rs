//! Single-shot, non-interactive output: four rows (ASCII/Hex/Dec/Bin) with
//! one right-aligned column per input byte.

use std::fmt::Write;

const COLUMN: usize = 9;

/// Render the four-row layout for `input`.
///
/// The ASCII row prints bytes outside printable ASCII as `.` rather than
/// writing the raw byte, so control bytes and UTF-8 continuation bytes cannot
/// disturb the terminal or the column alignment.
pub fn render(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::new();

    let _ = writeln!(out, "Input string: \"{}\"", input);
    push_row(&mut out, "ASCII:", bytes, |b| ascii_glyph(b).to_string());
    push_row(&mut out, "Hex:  ", bytes, |b| format!("{:X}", b));
    push_row(&mut out, "Dec:  ", bytes, |b| b.to_string());
    push_row(&mut out, "Bin:  ", bytes, |b| format!("{:08b}", b));

    out
}

fn push_row(out: &mut String, label: &str, bytes: &[u8], cell: impl Fn(u8) -> String) {
    out.push_str(label);
    for &b in bytes {
        let _ = write!(out, "{:>width$}", cell(b), width = COLUMN);
    }
    out.push('\n');
}

/// Printable ASCII as itself, anything else as `.`.
fn ascii_glyph(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_hi() {
        let expected = "\
Input string: \"Hi\"
ASCII:        H        i
Hex:         48       69
Dec:         72      105
Bin:   01001000 01101001
";
        assert_eq!(render("Hi"), expected);
    }

    #[test]
    fn test_render_multibyte_is_per_byte() {
        let out = render("é");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "ASCII:        .        .");
        assert_eq!(lines[2], "Hex:         C3       A9");
        assert_eq!(lines[3], "Dec:        195      169");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(""), "Input string: \"\"\nASCII:\nHex:  \nDec:  \nBin:  \n");
    }
}
