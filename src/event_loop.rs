//! Synchronous main loop: draw, wait for a terminal event, update the session.

use crossterm::event::{self, Event, KeyEventKind};
use std::io;

use crate::app::App;
use crate::terminal::Tui;

/// Run the session until the user quits.
///
/// Only key presses are dispatched; key release and repeat events reported by
/// some terminals are ignored so a single press never acts twice.
pub fn run(tui: &mut Tui, app: &mut App) -> io::Result<()> {
    let (cols, rows) = tui.size()?;
    app.resize(cols, rows);

    while !app.should_quit() {
        tui.draw(app)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(cols, rows) => {
                log::debug!("Terminal resized to {}x{}", cols, rows);
                app.resize(cols, rows);
            }
            Event::Paste(text) => app.paste_text(&text),
            _ => {}
        }
    }

    log::info!("Session ended with {} characters analyzed", app.characters().len());
    Ok(())
}
