//! File logger setup.
//!
//! The TUI owns the terminal, so log output goes to a file through
//! `simplelog`'s [`WriteLogger`]. Everything else logs via the `log` macros.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log file '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Default log file: `<data dir>/stringinspect/stringinspect.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stringinspect")
        .join("stringinspect.log")
}

/// Install a file logger at `path`, truncating any previous log.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LoggingError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| LoggingError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        assert!(default_log_path().ends_with("stringinspect/stringinspect.log"));
    }

    #[test]
    fn test_create_fails_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_file_logger(dir.path(), LevelFilter::Info).unwrap_err();
        assert!(matches!(err, LoggingError::Create { .. }));
    }
}
