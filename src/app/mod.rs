//! Interactive session state and key handling.
//!
//! [`App`] holds everything the UI needs between key presses: the input line,
//! the analyzed characters, cursor, view mode, overlays and status message.
//! Rendering reads it through accessors; key events mutate it through
//! [`App::handle_key`].

mod input_line;
mod keys;

pub use input_line::TextInput;
pub use keys::{nav_action, NavAction, HELP_GROUPS};

use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;

use crate::analysis::{Analyzer, CharDescriptor};
use crate::clipboard::ClipboardProvider;
use crate::config::Config;
use crate::export::{ExportFormat, Exporter};
use crate::history::History;
use crate::search::find_matches;

/// Width of one table column, in terminal cells.
pub const COLUMN_WIDTH: u16 = 10;

const SEARCH_CHAR_LIMIT: usize = 50;

/// How the analyzed characters are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Detail,
    Compact,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Detail => "Detail",
            ViewMode::Compact => "Compact",
        }
    }

    /// Parse a lowercase view name as used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(ViewMode::Table),
            "detail" => Some(ViewMode::Detail),
            "compact" => Some(ViewMode::Compact),
            _ => None,
        }
    }
}

/// Which part of the UI receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing into the input line
    #[default]
    Input,
    /// Moving the cursor over analyzed characters
    Navigate,
    /// Typing a search query
    Search,
    /// Choosing an export format
    Export,
}

/// Startup options for a session.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub char_limit: usize,
    pub history_limit: usize,
    pub view_mode: ViewMode,
    pub export_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            char_limit: 10_000,
            history_limit: 100,
            view_mode: ViewMode::Table,
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            char_limit: config.input.char_limit,
            history_limit: config.history.limit,
            view_mode: view_mode_from_config(config.view.default.as_deref()),
            export_dir: config
                .export
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// `[view] default`, warning about names that are not a view.
fn view_mode_from_config(name: Option<&str>) -> ViewMode {
    let Some(name) = name else {
        return ViewMode::default();
    };
    ViewMode::from_name(name).unwrap_or_else(|| {
        log::warn!("Unknown view '{}' in config, using table", name);
        ViewMode::default()
    })
}

/// The interactive session.
pub struct App {
    input: TextInput,
    search_input: TextInput,
    analyzer: Analyzer,
    history: History,
    exporter: Exporter,
    clipboard: Box<dyn ClipboardProvider>,

    characters: Vec<CharDescriptor>,
    cursor: usize,
    view_mode: ViewMode,
    mode: Mode,
    show_help: bool,
    export_cursor: usize,
    search_matches: Vec<usize>,
    search_cursor: usize,
    status: Option<String>,

    width: u16,
    height: u16,
    quit: bool,
}

impl App {
    pub fn new(settings: AppSettings, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            input: TextInput::new(settings.char_limit),
            search_input: TextInput::new(SEARCH_CHAR_LIMIT),
            analyzer: Analyzer::new(),
            history: History::new(settings.history_limit),
            exporter: Exporter::new(settings.export_dir),
            clipboard,
            characters: Vec::new(),
            cursor: 0,
            view_mode: settings.view_mode,
            mode: Mode::Input,
            show_help: false,
            export_cursor: 0,
            search_matches: Vec::new(),
            search_cursor: 0,
            status: None,
            width: 80,
            height: 24,
            quit: false,
        }
    }

    /// Start with `content` already typed into the input line.
    pub fn with_content(
        settings: AppSettings,
        clipboard: Box<dyn ClipboardProvider>,
        content: &str,
    ) -> Self {
        let mut app = Self::new(settings, clipboard);
        if !content.is_empty() {
            app.input.set_value(content);
            app.analyze_input();
        }
        app
    }

    // ---- accessors used by rendering ----

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn search_input(&self) -> &TextInput {
        &self.search_input
    }

    pub fn characters(&self) -> &[CharDescriptor] {
        &self.characters
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&CharDescriptor> {
        self.characters.get(self.cursor)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the input line has focus (no character is highlighted).
    pub fn input_focused(&self) -> bool {
        self.mode == Mode::Input
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn export_cursor(&self) -> usize {
        self.export_cursor
    }

    pub fn search_matches(&self) -> &[usize] {
        &self.search_matches
    }

    pub fn search_cursor(&self) -> usize {
        self.search_cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Characters that fit side by side in the table view (at least one).
    pub fn page_size(&self) -> usize {
        (usize::from(self.width.saturating_sub(20)) / usize::from(COLUMN_WIDTH)).max(1)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    // ---- key handling ----

    /// Dispatch a key press to the active mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Input => self.handle_input_key(key),
            Mode::Navigate => self.handle_navigation_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Export => self.handle_export_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if keys::is_ctrl_c(&key) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Tab => {
                if !self.characters.is_empty() {
                    self.mode = Mode::Navigate;
                }
            }
            KeyCode::Up => {
                let previous = self.history.up(self.input.value());
                self.input.set_value(&previous);
                self.analyze_input();
            }
            KeyCode::Down => {
                let next = self.history.down();
                self.input.set_value(&next);
                self.analyze_input();
            }
            KeyCode::Enter => {
                self.history.add(self.input.value());
                self.history.reset();
                log::debug!("History now holds {} entries", self.history.len());
            }
            _ if keys::is_ctrl_v(&key) => match self.clipboard.get_text() {
                Ok(text) if !text.is_empty() => {
                    self.input.insert_str(&text);
                    self.analyze_input();
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Paste failed: {}", e);
                    self.status = Some("Paste failed".to_string());
                }
            },
            _ => {
                if self.input.handle_key(key) {
                    self.analyze_input();
                }
            }
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        let Some(action) = nav_action(key) else {
            self.status = None;
            return;
        };

        let mut clear_status = true;

        match action {
            NavAction::Quit => self.quit = true,
            NavAction::ToggleHelp => self.show_help = !self.show_help,
            NavAction::CycleView => match self.view_mode {
                ViewMode::Table => self.view_mode = ViewMode::Detail,
                ViewMode::Detail => self.view_mode = ViewMode::Compact,
                ViewMode::Compact => {
                    self.view_mode = ViewMode::Table;
                    self.mode = Mode::Input;
                }
            },
            NavAction::Left => self.cursor = self.cursor.saturating_sub(1),
            NavAction::Right => {
                if self.cursor + 1 < self.characters.len() {
                    self.cursor += 1;
                }
            }
            NavAction::First => self.cursor = 0,
            NavAction::Last => self.cursor = self.characters.len().saturating_sub(1),
            NavAction::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size()),
            NavAction::PageDown => {
                self.cursor = (self.cursor + self.page_size())
                    .min(self.characters.len().saturating_sub(1));
            }
            NavAction::Copy => {
                clear_status = false;
                self.copy_selected();
            }
            NavAction::Paste => {
                clear_status = false;
                self.paste_replace();
            }
            NavAction::Export => {
                clear_status = false;
                if self.characters.is_empty() {
                    self.status = Some("Nothing to export".to_string());
                } else {
                    self.mode = Mode::Export;
                    self.export_cursor = 0;
                }
            }
            NavAction::Search => {
                clear_status = false;
                if self.characters.is_empty() {
                    self.status = Some("Nothing to search".to_string());
                } else {
                    self.mode = Mode::Search;
                    self.search_input.clear();
                    self.search_matches.clear();
                    self.search_cursor = 0;
                }
            }
            NavAction::FocusInput => self.mode = Mode::Input,
        }

        if clear_status {
            self.status = None;
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        let last = ExportFormat::ALL.len() - 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.export_cursor = self.export_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.export_cursor = (self.export_cursor + 1).min(last);
            }
            KeyCode::Enter => self.run_export(),
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Navigate,
            KeyCode::Char(c @ '1'..='3') => {
                self.export_cursor = (c as usize) - ('1' as usize);
                self.run_export();
            }
            _ if keys::is_ctrl_c(&key) => self.quit = true,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_matches.clear();
                self.mode = Mode::Input;
            }
            KeyCode::Enter => {
                if let Some(&idx) = self.search_matches.get(self.search_cursor) {
                    self.cursor = idx;
                    self.status = Some(format!(
                        "Match {}/{}",
                        self.search_cursor + 1,
                        self.search_matches.len()
                    ));
                }
                self.mode = Mode::Navigate;
            }
            KeyCode::Tab => {
                if !self.search_matches.is_empty() {
                    self.search_cursor = (self.search_cursor + 1) % self.search_matches.len();
                    self.cursor = self.search_matches[self.search_cursor];
                }
            }
            _ => {
                if self.search_input.handle_key(key) {
                    self.perform_search();
                }
            }
        }
    }

    /// Text pasted by the terminal (bracketed paste) goes to whichever line has focus.
    pub fn paste_text(&mut self, text: &str) {
        match self.mode {
            Mode::Input => {
                self.input.insert_str(text);
                self.analyze_input();
            }
            Mode::Search => {
                self.search_input.insert_str(text);
                self.perform_search();
            }
            Mode::Navigate => {
                self.input.set_value(text);
                self.analyze_input();
                self.status = Some(format!("Pasted {} chars", text.chars().count()));
            }
            Mode::Export => {}
        }
    }

    // ---- actions ----

    /// Re-analyze the input line. Clears the status and clamps the cursor.
    fn analyze_input(&mut self) {
        self.characters = self.analyzer.analyze_text(self.input.value());
        self.status = None;
        self.cursor = self.cursor.min(self.characters.len().saturating_sub(1));
    }

    fn perform_search(&mut self) {
        self.search_matches = find_matches(&self.characters, self.search_input.value());
        self.search_cursor = 0;
        if let Some(&first) = self.search_matches.first() {
            self.cursor = first;
        }
    }

    fn copy_selected(&mut self) {
        let Some(selected) = self.selected() else {
            return;
        };
        let text = format!(
            "{} (U+{:04X}, 0x{}, {})",
            selected.display, selected.decimal, selected.hex, selected.decimal
        );

        self.status = Some(match self.clipboard.set_text(&text) {
            Ok(()) => format!("Copied: {}", text),
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                "Copy failed".to_string()
            }
        });
    }

    fn paste_replace(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) if !text.is_empty() => {
                self.input.set_value(&text);
                self.analyze_input();
                self.status = Some(format!("Pasted {} chars", text.chars().count()));
            }
            Ok(_) => self.status = Some("Paste failed".to_string()),
            Err(e) => {
                log::warn!("Paste failed: {}", e);
                self.status = Some("Paste failed".to_string());
            }
        }
    }

    fn run_export(&mut self) {
        let format = ExportFormat::from_index(self.export_cursor).unwrap_or_default();
        self.status = Some(match self.exporter.export(&self.characters, format) {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => {
                log::warn!("Export as {} failed: {}", format, e);
                format!("Export failed: {}", e)
            }
        });
        self.mode = Mode::Navigate;
    }
}
