use clap::Parser;
use std::path::Path;

use stringinspect::app::{App, AppSettings};
use stringinspect::cli::{handle_config_action, Args, Command};
use stringinspect::clipboard::SystemClipboard;
use stringinspect::config::Config;
use stringinspect::error::Result;
use stringinspect::event_loop;
use stringinspect::legacy;
use stringinspect::logging::{default_log_path, init_file_logger};
use stringinspect::terminal::Tui;

fn main() {
    let args = Args::parse();

    if let Some(Command::Config { action }) = args.command {
        handle_config_action(action, args.config.as_deref());
        return;
    }

    if let Some(text) = &args.text {
        print!("{}", legacy::render(text));
        return;
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log.file.clone())
        .unwrap_or_else(default_log_path);
    if let Err(e) = init_file_logger(&log_path, config.log_level()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let content = match &args.file {
        Some(path) => match read_input_file(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file: {}", e);
                std::process::exit(1);
            }
        },
        None => String::new(),
    };

    let mut settings = AppSettings::from_config(&config);
    if let Some(view) = args.view {
        settings.view_mode = view.into();
    }
    if let Some(dir) = args.export_dir.clone() {
        settings.export_dir = dir;
    }

    log::info!(
        "Starting session: view={}, export_dir={}, limit={}",
        settings.view_mode.name(),
        settings.export_dir.display(),
        settings.char_limit
    );

    let mut app = App::with_content(settings, Box::new(SystemClipboard), &content);

    if let Err(e) = run_session(&mut app) {
        log::error!("Session failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Read `path` as the initial input. Invalid UTF-8 is replaced, not rejected.
fn read_input_file(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    log::info!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run_session(app: &mut App) -> Result<()> {
    let mut tui = Tui::new()?;
    let result = event_loop::run(&mut tui, app);

    if let Err(e) = tui.restore() {
        log::warn!("Failed to restore terminal: {}", e);
    }

    result?;
    Ok(())
}
