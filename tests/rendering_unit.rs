//! Screen rendering checked against ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use stringinspect::app::{App, AppSettings};
use stringinspect::clipboard::MemoryClipboard;
use stringinspect::terminal::rendering::{render_app, status_text};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(content: &str) -> App {
    let mut app = App::with_content(
        AppSettings::default(),
        Box::new(MemoryClipboard::default()),
        content,
    );
    app.resize(80, 24);
    app
}

/// Render `app` and return the screen as one string per row.
fn draw(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| render_app(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

#[test]
fn test_empty_session_shows_placeholder() {
    let app = app_with("");
    let screen = draw(&app);

    assert!(screen[0].contains("StringInspect"));
    assert!(screen_contains(&screen, "Type or paste text to analyze..."));
    assert!(screen[23].contains("[Input]"));
    assert!(screen[23].contains("0 chars"));
}

#[test]
fn test_table_view_rows() {
    let app = app_with("AB");
    let screen = draw(&app);

    assert!(screen_contains(&screen, "> AB"));
    for label in ["Char", "Hex", "Dec", "Bin", "Oct", "Unicode"] {
        assert!(
            screen.iter().any(|row| row.starts_with(label)),
            "missing row {}",
            label
        );
    }
    assert!(screen_contains(&screen, "41"));
    assert!(screen_contains(&screen, "66"));
    assert!(screen_contains(&screen, "01000001"));
    assert!(screen_contains(&screen, "U+0042"));
}

#[test]
fn test_table_view_scrolls_to_cursor() {
    let mut app = app_with("abcdefghij");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::End));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "U+006A"));
    assert!(!screen_contains(&screen, "U+0061"));
}

#[test]
fn test_detail_view_fields() {
    let mut app = app_with("\u{1b}");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "Character Details"));
    assert!(screen_contains(&screen, "<1B>"));
    assert!(screen_contains(&screen, "Hexadecimal:   0x1B"));
    assert!(screen_contains(&screen, "Control:       ESC"));
    assert!(screen_contains(&screen, "(1/1)"));
    assert!(screen[23].contains("[Detail]"));
}

#[test]
fn test_compact_view_dump_line() {
    let mut app = app_with("Hello");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "Compact View (Hex Dump)"));
    assert!(screen_contains(&screen, "0000  48 65 6C 6C 6F"));
    assert!(screen_contains(&screen, "│ Hello"));
}

#[test]
fn test_compact_view_masks_multibyte_glyphs() {
    let mut app = app_with("aé b日");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "0000  61 E9 20 62 65E5"));
    assert!(screen_contains(&screen, "│ a..b."));
    assert!(!screen_contains(&screen, "│ aé"));
}

#[test]
fn test_export_menu_popup() {
    let mut app = app_with("abc");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('e')));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "Export Format"));
    assert!(screen_contains(&screen, "> [1] Text - Plain text table"));
    assert!(screen_contains(&screen, "[2] JSON"));
    assert!(screen_contains(&screen, "[3] CSV"));
}

#[test]
fn test_search_overlay_reports_matches() {
    let mut app = app_with("banana");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('/')));
    app.handle_key(key(KeyCode::Char('a')));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "Search"));
    assert!(screen_contains(&screen, "Found 3 match(es)"));
}

#[test]
fn test_help_overlay() {
    let mut app = app_with("abc");
    app.handle_key(key(KeyCode::F(1)));
    let screen = draw(&app);

    assert!(screen_contains(&screen, "Help"));
    assert!(screen_contains(&screen, "switch view"));
}

#[test]
fn test_status_text_prefers_message() {
    let mut app = App::with_content(
        AppSettings::default(),
        Box::new(MemoryClipboard::default()),
        "abc",
    );
    assert_eq!(
        status_text(&app),
        ("[Input]".to_string(), "3 chars │ F1 help │ q quit".to_string())
    );

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('c')));
    let (mode, message) = status_text(&app);
    assert_eq!(mode, "[Table]");
    assert_eq!(message, "Copied: a (U+0061, 0x61, 97)");
}

#[test]
fn test_long_input_scrolls_to_cursor() {
    let content = format!("{}END", "x".repeat(9_997));
    let app = app_with(&content);
    assert_eq!(app.input().char_count(), 10_000);

    let started = Instant::now();
    let screen = draw(&app);
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "frame took {:?}",
        started.elapsed()
    );

    assert!(screen[2].starts_with("> x"));
    assert!(screen[2].contains("xEND"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_with("some text");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('e')));

    let mut terminal = Terminal::new(TestBackend::new(12, 4)).unwrap();
    terminal.draw(|frame| render_app(frame, &app)).unwrap();
}
