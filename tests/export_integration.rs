//! Export files written to a temporary directory.

use pretty_assertions::assert_eq;
use stringinspect::analysis::analyze_text;
use stringinspect::export::{ExportError, ExportFormat, Exporter, CSV_HEADER};
use tempfile::TempDir;

fn exporter() -> (TempDir, Exporter) {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::new(dir.path().to_path_buf());
    (dir, exporter)
}

#[test]
fn test_export_empty_is_rejected() {
    let (dir, exporter) = exporter();
    let err = exporter.export(&[], ExportFormat::Json).unwrap_err();
    assert!(matches!(err, ExportError::Empty));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_file_name_and_location() {
    let (dir, exporter) = exporter();
    let chars = analyze_text("abc");

    for format in ExportFormat::ALL {
        let path = exporter.export(&chars, format).unwrap();
        assert_eq!(path.parent(), Some(dir.path()));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("stringinspect-"), "{}", name);
        assert!(name.ends_with(&format!(".{}", format.extension())), "{}", name);
    }
}

#[test]
fn test_export_json_document() {
    let (_dir, exporter) = exporter();
    let chars = analyze_text("A é");

    let path = exporter.export(&chars, ExportFormat::Json).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(value["count"], 3);
    assert_eq!(value["original"], "A␣é");
    assert!(value["exported_at"].is_string());

    let characters = value["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 3);

    let e = &characters[2];
    assert_eq!(e["position"], 2);
    assert_eq!(e["char"], "é");
    assert_eq!(e["hex"], "E9");
    assert_eq!(e["decimal"], 233);
    assert_eq!(e["octal"], "351");
    assert_eq!(e["binary"], "11101001");
    assert_eq!(e["unicode"], "U+00E9");
    assert_eq!(e["utf8_bytes"], "C3 A9");
    assert_eq!(e["type"], "extended");
    assert_eq!(e["byte_offset"], 2);
    assert_eq!(e["rune_offset"], 2);

    assert_eq!(characters[1]["type"], "whitespace");
}

#[test]
fn test_export_csv_rows() {
    let (_dir, exporter) = exporter();
    let chars = analyze_text("A,");

    let path = exporter.export(&chars, ExportFormat::Csv).unwrap();
    let mut reader = csv::Reader::from_path(path).unwrap();

    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, CSV_HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].iter().collect::<Vec<_>>(),
        ["0", "A", "41", "65", "101", "01000001", "U+0041", "41", "printable"]
    );
    assert_eq!(&rows[1][1], ",");
}

#[test]
fn test_export_text_layout() {
    let (_dir, exporter) = exporter();
    let chars = analyze_text("Hi");

    let path = exporter.export(&chars, ExportFormat::Text).unwrap();
    let text = std::fs::read_to_string(path).unwrap();

    let expected = format!(
        "StringInspect Export\n\
         ====================\n\
         \n\
         Original: Hi\n\
         \n\
         Pos    Char     Hex    Dec    Oct        Unicode    UTF-8       \n\
         {}\n\
         0      H        48     72     110        U+0048     48          \n\
         1      i        69     105    151        U+0069     69          \n\
         \n\
         Total: 2 characters\n",
        "-".repeat(70)
    );
    assert_eq!(text, expected);
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let exporter = Exporter::new(dir.path().join("missing"));

    let err = exporter
        .export(&analyze_text("x"), ExportFormat::Text)
        .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}
