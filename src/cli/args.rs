//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ViewArg;

/// Inspect the characters of a string: codepoints, encodings and categories
#[derive(Parser, Debug)]
#[command(name = "stringinspect")]
#[command(version, about = "Interactive character-encoding analyzer", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print a byte table for TEXT and exit
    pub text: Option<String>,

    /// Load file contents as the initial input
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Initial view
    #[arg(long)]
    pub view: Option<ViewArg>,

    /// Directory for exported files
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
