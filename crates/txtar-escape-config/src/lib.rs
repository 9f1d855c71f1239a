//! Layered configuration for the `txtar-escape` tool.
//!
//! Values resolve with the usual `ortho_config` precedence: built-in
//! defaults, then a configuration file (`--config-path`,
//! `TXTAR_ESCAPE_CONFIG_PATH`, or `.txtar_escape.toml` discovered in the
//! working or home directory), then `TXTAR_ESCAPE_*` environment variables.
//! The CLI applies its own flags on top of the loaded values.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_NEW_DELIM, DEFAULT_OLD_DELIM, DEFAULT_PATTERN, default_log_format, default_new_delim,
    default_old_delim, default_pattern,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Settings shared by the escape and unescape commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "TXTAR_ESCAPE")]
pub struct Config {
    /// Glob selecting the files to rewrite.
    #[ortho_config(default = default_pattern())]
    pub pattern: String,
    /// Delimiter used by unescaped archives.
    #[ortho_config(default = default_old_delim())]
    pub old_delim: String,
    /// Delimiter substituted while archives are escaped.
    #[ortho_config(default = default_new_delim())]
    pub new_delim: String,
    /// Rendering of log events on stderr.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            old_delim: default_old_delim(),
            new_delim: default_new_delim(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Glob selecting the files to rewrite.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Delimiter used by unescaped archives.
    #[must_use]
    pub fn old_delim(&self) -> &str {
        &self.old_delim
    }

    /// Delimiter substituted while archives are escaped.
    #[must_use]
    pub fn new_delim(&self) -> &str {
        &self.new_delim
    }

    /// Rendering of log events on stderr.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
