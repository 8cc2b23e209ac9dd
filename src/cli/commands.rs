//! Subcommand handlers for config actions.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::logging::default_log_path;

/// Handle config subcommand actions.
///
/// `path` overrides the default config location (`--config`).
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(&config_path)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            print!("{}", show_config(&config, &config_path));
        }
        ConfigAction::Init => match write_default_config(&config_path) {
            Ok(()) => println!("Created config file: {}", config_path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'stringinspect config show' to view current settings.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Human-readable summary of the effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current configuration:");
    let _ = writeln!(out, "  Input limit: {} chars", config.input.char_limit);
    let _ = writeln!(out, "  History limit: {}", config.history.limit);
    let _ = writeln!(
        out,
        "  View: {}",
        config.view.default.as_deref().unwrap_or("table")
    );
    let _ = writeln!(
        out,
        "  Export directory: {}",
        config
            .export
            .directory
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .display()
    );
    let _ = writeln!(out, "  Log level: {}", config.log_level());
    let log_file = config.log.file.clone().unwrap_or_else(default_log_path);
    let _ = writeln!(out, "  Log file: {}", log_file.display());
    let _ = writeln!(out);

    let state = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };
    let _ = writeln!(out, "Config file: {} ({})", config_path.display(), state);
    out
}

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
///
/// Fails with [`io::ErrorKind::AlreadyExists`] rather than overwriting.
pub fn write_default_config(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_default_config_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
        assert!(Config::parse(&written).is_ok());
    }

    #[test]
    fn test_write_default_config_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_default_config(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_show_config_reports_values() {
        let config = Config::parse("[history]\nlimit = 7\n[view]\ndefault = \"compact\"\n").unwrap();
        let out = show_config(&config, Path::new("/nonexistent/stringinspect.toml"));

        assert!(out.contains("History limit: 7"));
        assert!(out.contains("View: compact"));
        assert!(out.contains("Input limit: 10000 chars"));
        assert!(out.contains("(not found)"));
    }
}
