use crate::logging::LogFormat;

/// Default file name glob.
pub const DEFAULT_PATTERN: &str = "*.txtar";

/// Default delimiter of an unescaped txtar archive.
pub const DEFAULT_OLD_DELIM: &str = "--";

/// Default delimiter written while escaping.
pub const DEFAULT_NEW_DELIM: &str = "@@";

/// Owned default glob (used by serde and the config derive).
#[must_use]
pub fn default_pattern() -> String {
    DEFAULT_PATTERN.to_owned()
}

/// Owned default old delimiter.
#[must_use]
pub fn default_old_delim() -> String {
    DEFAULT_OLD_DELIM.to_owned()
}

/// Owned default new delimiter.
#[must_use]
pub fn default_new_delim() -> String {
    DEFAULT_NEW_DELIM.to_owned()
}

/// Default log rendering for an interactive tool.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
