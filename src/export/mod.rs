//! Export analyzed characters to text, JSON or CSV files.
//!
//! Rendering and writing are split: the `render_*` / `write_csv` functions
//! produce the file contents, [`Exporter::export`] picks a timestamped file
//! name and writes it to the output directory.

mod errors;

pub use errors::ExportError;

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analysis::CharDescriptor;

/// Header row of the CSV export, in column order.
pub const CSV_HEADER: [&str; 9] = [
    "Position",
    "Char",
    "Hex",
    "Decimal",
    "Octal",
    "Binary",
    "Unicode",
    "UTF8_Bytes",
    "Type",
];

/// Supported export formats, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv];

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Text",
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Short description shown in the export menu.
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Plain text table",
            ExportFormat::Json => "Structured JSON",
            ExportFormat::Csv => "Comma-separated values",
        }
    }

    /// Format at a menu index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes export files into a directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl Exporter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export `chars` in `format`, returning the path of the written file.
    pub fn export(
        &self,
        chars: &[CharDescriptor],
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        if chars.is_empty() {
            return Err(ExportError::Empty);
        }

        let now = Local::now();
        let path = self.output_dir.join(export_file_name(format, &now));

        match format {
            ExportFormat::Text => write_file(&path, render_text(chars).as_bytes())?,
            ExportFormat::Json => write_file(&path, render_json(chars, &now)?.as_bytes())?,
            ExportFormat::Csv => {
                let file = std::fs::File::create(&path).map_err(|e| ExportError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                write_csv(chars, file)?;
            }
        }

        log::info!("Exported {} characters as {} to {:?}", chars.len(), format, path);
        Ok(path)
    }
}

/// `stringinspect-YYYYMMDD-HHMMSS.<ext>`
pub fn export_file_name(format: ExportFormat, now: &DateTime<Local>) -> String {
    format!(
        "stringinspect-{}.{}",
        now.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Original text as shown on screen: every display glyph concatenated.
fn reconstruct_original(chars: &[CharDescriptor]) -> String {
    chars.iter().map(|c| c.display.as_str()).collect()
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Fixed-width plain-text table.
pub fn render_text(chars: &[CharDescriptor]) -> String {
    let mut out = String::new();

    out.push_str("StringInspect Export\n");
    out.push_str("====================\n\n");
    let _ = write!(out, "Original: {}\n\n", reconstruct_original(chars));

    let _ = writeln!(
        out,
        "{:<6} {:<8} {:<6} {:<6} {:<10} {:<10} {:<12}",
        "Pos", "Char", "Hex", "Dec", "Oct", "Unicode", "UTF-8"
    );
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for (i, c) in chars.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:<6} {:<6} {:<10} {:<10} {:<12}",
            i,
            truncate_bytes(&c.display, 6),
            c.hex,
            c.decimal,
            c.octal,
            c.unicode_label,
            c.utf8_hex
        );
    }

    let _ = writeln!(out, "\nTotal: {} characters", chars.len());
    out
}

#[derive(Debug, Serialize)]
struct JsonCharacter<'a> {
    position: usize,
    char: &'a str,
    hex: &'a str,
    decimal: u32,
    octal: &'a str,
    binary: &'a str,
    unicode: &'a str,
    utf8_bytes: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    byte_offset: usize,
    rune_offset: usize,
}

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    original: String,
    count: usize,
    exported_at: String,
    characters: Vec<JsonCharacter<'a>>,
}

/// Structured JSON document, pretty-printed with two-space indent.
pub fn render_json(
    chars: &[CharDescriptor],
    exported_at: &DateTime<Local>,
) -> Result<String, ExportError> {
    let export = JsonExport {
        original: reconstruct_original(chars),
        count: chars.len(),
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        characters: chars
            .iter()
            .enumerate()
            .map(|(i, c)| JsonCharacter {
                position: i,
                char: &c.display,
                hex: &c.hex,
                decimal: c.decimal,
                octal: &c.octal,
                binary: &c.binary,
                unicode: &c.unicode_label,
                utf8_bytes: &c.utf8_hex,
                kind: c.category.name(),
                byte_offset: c.byte_offset,
                rune_offset: c.unit_offset,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&export)?)
}

/// CSV with [`CSV_HEADER`] followed by one row per character.
pub fn write_csv<W: Write>(chars: &[CharDescriptor], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (i, c) in chars.iter().enumerate() {
        csv_writer.write_record([
            i.to_string().as_str(),
            c.display.as_str(),
            c.hex.as_str(),
            c.decimal.to_string().as_str(),
            c.octal.as_str(),
            c.binary.as_str(),
            c.unicode_label.as_str(),
            c.utf8_hex.as_str(),
            c.category.name(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
