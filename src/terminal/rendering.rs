//! Rendering functions for the interactive UI.
//!
//! Everything here is pure over `&App`: no terminal state is touched, which
//! keeps the views testable against ratatui's `TestBackend`.

use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::styles;
use crate::analysis::{display_glyph, is_control, CharDescriptor};
use crate::app::{App, Mode, ViewMode, COLUMN_WIDTH, HELP_GROUPS};
use crate::export::ExportFormat;

const INPUT_PROMPT: &str = "> ";
const INPUT_PLACEHOLDER: &str = "Type or paste text to analyze...";
const SEARCH_PROMPT: &str = "/ ";
const BYTES_PER_DUMP_LINE: usize = 16;
const LABEL_WIDTH: usize = 10;

/// Render the whole screen for `app`.
pub fn render_app(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [header, _, input, _, content, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header);
    render_input(frame, app, input);

    if !app.characters().is_empty() {
        match app.view_mode() {
            ViewMode::Table => render_table_view(frame, app, content),
            ViewMode::Detail => render_detail_view(frame, app, content),
            ViewMode::Compact => render_compact_view(frame, app, content),
        }
    }

    render_status_bar(frame, app, status);

    match app.mode() {
        Mode::Search => render_search_overlay(frame, app, area),
        Mode::Export => render_export_menu(frame, app, area),
        _ => {}
    }

    if app.show_help() {
        render_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" StringInspect ", styles::header()),
        Span::styled(" - Character Encoding Analyzer", styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Input text with control characters replaced by their visible glyphs.
fn visible_input(value: &str) -> Vec<String> {
    value
        .chars()
        .map(|ch| {
            if is_control(ch as u32) {
                display_glyph(ch as u32)
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// Index of the first glyph to draw so that `cursor` stays inside `width` cells.
fn scroll_start(glyphs: &[String], cursor: usize, width: usize) -> usize {
    let mut start = cursor.min(glyphs.len());
    let mut used = 0;
    while start > 0 {
        let w = glyphs[start - 1].width();
        if used + w >= width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = app.input();
    let prompt = Span::styled(INPUT_PROMPT, styles::highlighted());

    if input.is_empty() {
        let line = Line::from(vec![prompt, Span::styled(INPUT_PLACEHOLDER, styles::muted())]);
        frame.render_widget(Paragraph::new(line), area);
        if app.input_focused() {
            frame.set_cursor_position(Position::new(area.x + INPUT_PROMPT.len() as u16, area.y));
        }
        return;
    }

    let glyphs = visible_input(input.value());
    let width = usize::from(area.width).saturating_sub(INPUT_PROMPT.len() + 1);
    let start = scroll_start(&glyphs, input.cursor(), width);
    let text: String = glyphs[start..].concat();

    let line = Line::from(vec![prompt, Span::raw(text)]);
    frame.render_widget(Paragraph::new(line), area);

    if app.input_focused() {
        let offset: usize = glyphs[start..input.cursor().min(glyphs.len())]
            .iter()
            .map(|g| g.width())
            .sum();
        let x = area.x + (INPUT_PROMPT.len() + offset).min(usize::from(area.width)) as u16;
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

/// Center `text` in `width` display cells.
fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Visible `[start, end)` window of `len` columns keeping `cursor` in view.
pub fn table_window(cursor: usize, len: usize, page: usize) -> (usize, usize) {
    let visible = page.max(1).min(len);
    let mut start = if cursor >= visible {
        cursor - visible + 1
    } else {
        0
    };
    let mut end = start + visible;
    if end > len {
        end = len;
        start = end.saturating_sub(visible);
    }
    (start, end)
}

fn cell_style(app: &App, idx: usize, c: &CharDescriptor) -> ratatui::style::Style {
    if idx == app.cursor() && !app.input_focused() {
        styles::selected()
    } else {
        styles::category(c.category)
    }
}

fn render_table_view(frame: &mut Frame, app: &App, area: Rect) {
    let chars = app.characters();
    let (start, end) = table_window(app.cursor(), chars.len(), app.page_size());

    type Field = fn(&CharDescriptor) -> String;
    let rows: [(&str, Field); 6] = [
        ("Char", |c: &CharDescriptor| c.display.clone()),
        ("Hex", |c: &CharDescriptor| c.hex.clone()),
        ("Dec", |c: &CharDescriptor| c.decimal.to_string()),
        ("Bin", |c: &CharDescriptor| c.binary.clone()),
        ("Oct", |c: &CharDescriptor| c.octal.clone()),
        ("Unicode", |c: &CharDescriptor| c.unicode_label.clone()),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, field)| {
            let mut spans = vec![Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                styles::table_label(),
            )];
            for (idx, c) in chars.iter().enumerate().take(end).skip(start) {
                spans.push(Span::styled(
                    center(&field(c), usize::from(COLUMN_WIDTH)),
                    cell_style(app, idx, c),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(c) = app.selected() else {
        return;
    };

    let [title_area, box_area, details_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled("Character Details", styles::title())),
        title_area,
    );

    let box_width = (c.display.width() as u16 + 8).min(box_area.width);
    let glyph_box = Rect {
        width: box_width,
        ..box_area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::highlighted());
    let glyph = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            c.display.clone(),
            styles::category(c.category).add_modifier(ratatui::style::Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(glyph, glyph_box);

    let mut details = vec![
        ("Unicode", c.unicode_label.clone()),
        ("Hexadecimal", format!("0x{}", c.hex)),
        ("Decimal", c.decimal.to_string()),
        ("Octal", format!("0o{}", c.octal)),
        ("Binary", c.binary.clone()),
        ("UTF-8 Bytes", c.utf8_hex.clone()),
    ];
    if let Some(name) = c.control_name() {
        details.push(("Control", name.to_string()));
    }
    details.push((
        "Position",
        format!("{} (byte: {})", c.unit_offset, c.byte_offset),
    ));

    let mut lines: Vec<Line> = details
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<14} ", format!("{}:", label)), styles::muted()),
                Span::raw(value),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "← → to navigate ({}/{})",
            app.cursor() + 1,
            app.characters().len()
        ),
        styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines), details_area);
}

/// Hex-dump lines: offset, 16 hex cells split 8/8, then the glyphs.
fn compact_lines(app: &App) -> Vec<Line<'static>> {
    let chars = app.characters();
    let mut lines = vec![
        Line::styled("Compact View (Hex Dump)", styles::title()),
        Line::raw(""),
    ];

    for (row, chunk) in chars.chunks(BYTES_PER_DUMP_LINE).enumerate() {
        let base = row * BYTES_PER_DUMP_LINE;
        let mut spans = vec![Span::styled(format!("{:04X}  ", base), styles::muted())];

        for j in 0..BYTES_PER_DUMP_LINE {
            match chunk.get(j) {
                Some(c) => {
                    spans.push(Span::styled(c.hex.clone(), cell_style(app, base + j, c)));
                    spans.push(Span::raw(" "));
                }
                None => spans.push(Span::raw("   ")),
            }
            if j == 7 {
                spans.push(Span::raw(" "));
            }
        }

        spans.push(Span::raw(" │ "));

        for (j, c) in chunk.iter().enumerate() {
            let glyph = if c.display.len() > 1 {
                ".".to_string()
            } else {
                c.display.clone()
            };
            spans.push(Span::styled(glyph, cell_style(app, base + j, c)));
        }

        lines.push(Line::from(spans));
    }

    lines
}

fn render_compact_view(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Paragraph::new(compact_lines(app)), area);
}

/// Left and right halves of the status bar.
pub fn status_text(app: &App) -> (String, String) {
    let mode = if app.input_focused() {
        "Input"
    } else {
        app.view_mode().name()
    };
    let right = match app.status() {
        Some(msg) => msg.to_string(),
        None => format!("{} chars │ F1 help │ q quit", app.characters().len()),
    };
    (format!("[{}]", mode), right)
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (left, right) = status_text(app);
    let right_style = if app.status().is_some() {
        styles::success()
    } else {
        styles::muted()
    };
    let gap = usize::from(area.width)
        .saturating_sub(left.width() + right.width())
        .max(1);
    let line = Line::from(vec![
        Span::styled(left, styles::muted()),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, right_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::highlighted())
        .title(Span::styled(format!(" {} ", title), styles::title()))
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, width: u16) {
    let popup = centered_rect(area, width, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(popup_block(title)), popup);
}

fn render_search_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let query = app.search_input().value();
    let matches = app.search_matches();

    let info = if !matches.is_empty() {
        Line::styled(
            format!(
                "Found {} match(es) - Tab to cycle, Enter to confirm",
                matches.len()
            ),
            styles::success(),
        )
    } else if !query.is_empty() {
        Line::styled("No matches", styles::error())
    } else {
        Line::styled(
            "Type hex (0x41), decimal (65), or character (A)",
            styles::muted(),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(SEARCH_PROMPT, styles::highlighted()),
            Span::raw(query.to_string()),
        ]),
        Line::raw(""),
        info,
        Line::raw(""),
        Line::styled(
            "enter confirm • esc cancel • tab next match",
            styles::muted(),
        ),
    ];
    render_popup(frame, area, "Search", lines, 60);
}

fn render_export_menu(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = ExportFormat::ALL
        .iter()
        .enumerate()
        .map(|(i, format)| {
            let (prefix, style) = if i == app.export_cursor() {
                ("> ", styles::highlighted())
            } else {
                ("  ", styles::muted())
            };
            Line::styled(
                format!(
                    "{}[{}] {} - {}",
                    prefix,
                    i + 1,
                    format.name(),
                    format.description()
                ),
                style,
            )
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "↑/↓ select • enter confirm • esc cancel",
        styles::muted(),
    ));
    render_popup(frame, area, "Export Format", lines, 50);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_GROUPS
        .iter()
        .map(|group| {
            let mut spans = Vec::new();
            for (i, (key, desc)) in group.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" • ", styles::muted()));
                }
                spans.push(Span::styled(*key, styles::highlighted()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(*desc, styles::muted()));
            }
            Line::from(spans)
        })
        .collect();
    let height = lines.len() as u16 + 2;
    let popup = Rect {
        y: area.y + area.height.saturating_sub(height + 1),
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(popup_block("Help")), popup);
}
