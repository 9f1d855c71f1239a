//! CLI argument definitions for `txtar-escape`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use txtar_escape_config::LogFormat;
use txtar_escape_core::Direction;

/// Which rewrite to perform.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Command {
    /// Replace old-delimiter fences with new-delimiter fences.
    Escape,
    /// Replace new-delimiter fences with old-delimiter fences.
    Unescape,
}

impl From<Command> for Direction {
    fn from(command: Command) -> Self {
        match command {
            Command::Escape => Self::Escape,
            Command::Unescape => Self::Unescape,
        }
    }
}

/// Escape or unescape delimiter fences in txtar files.
#[derive(Parser, Debug)]
#[command(name = "txtar-escape", version)]
pub(crate) struct Cli {
    /// The rewrite to perform.
    #[arg(value_enum, value_name = "COMMAND")]
    pub(crate) command: Command,
    /// Starting directory.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub(crate) dir: PathBuf,
    /// File name glob to match (defaults to the configured pattern, `*.txtar`).
    #[arg(long, value_name = "GLOB", conflicts_with = "extension")]
    pub(crate) pattern: Option<String>,
    /// File extension to match; shorthand for `--pattern '*.<EXT>'`.
    #[arg(long, value_name = "EXT")]
    pub(crate) extension: Option<String>,
    /// Original delimiter (defaults to `--`).
    #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub(crate) old_delim: Option<String>,
    /// Replacement delimiter (defaults to `@@`).
    #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub(crate) new_delim: Option<String>,
    /// Configuration file to load instead of the discovered one.
    #[arg(long, value_name = "PATH")]
    pub(crate) config_path: Option<PathBuf>,
    /// Log output format on stderr.
    #[arg(long, value_name = "FORMAT")]
    pub(crate) log_format: Option<LogFormat>,
    /// Increase verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}
