//! Delimiter tokens and rewrite directions.

use std::fmt;
use std::str::FromStr;

use crate::error::DelimiterError;

/// A validated delimiter token such as `--` or `@@`.
///
/// Tokens are arbitrary non-empty strings without line breaks. They are
/// always matched and emitted literally, so regex metacharacters carry no
/// special meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter(String);

impl Delimiter {
    /// Validates a delimiter token.
    ///
    /// # Errors
    ///
    /// Returns [`DelimiterError::Empty`] for the empty string and
    /// [`DelimiterError::LineBreak`] when the token contains `\n` or `\r`.
    pub fn new(token: impl Into<String>) -> Result<Self, DelimiterError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DelimiterError::Empty);
        }
        if token.contains(['\n', '\r']) {
            return Err(DelimiterError::LineBreak { token });
        }
        Ok(Self(token))
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Delimiter {
    type Err = DelimiterError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::new(token)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Delimiter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which way a rewrite runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Replace old-delimiter fences with new-delimiter fences.
    Escape,
    /// Replace new-delimiter fences with old-delimiter fences.
    Unescape,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Escape => Self::Unescape,
            Self::Unescape => Self::Escape,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => f.write_str("escape"),
            Self::Unescape => f.write_str("unescape"),
        }
    }
}

/// The original (`old`) and replacement (`new`) delimiters of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    old: Delimiter,
    new: Delimiter,
}

impl DelimiterPair {
    /// Pairs an original delimiter with its replacement.
    #[must_use]
    pub const fn new(old: Delimiter, new: Delimiter) -> Self {
        Self { old, new }
    }

    /// Validates both tokens and pairs them.
    ///
    /// # Errors
    ///
    /// Returns the first [`DelimiterError`] raised by either token, checking
    /// `old` first.
    pub fn parse(old: &str, new: &str) -> Result<Self, DelimiterError> {
        Ok(Self::new(Delimiter::new(old)?, Delimiter::new(new)?))
    }

    /// The original delimiter.
    #[must_use]
    pub const fn old(&self) -> &Delimiter {
        &self.old
    }

    /// The replacement delimiter.
    #[must_use]
    pub const fn new_delimiter(&self) -> &Delimiter {
        &self.new
    }

    /// Resolves the `(from, to)` tokens for a direction.
    #[must_use]
    pub const fn resolve(&self, direction: Direction) -> (&Delimiter, &Delimiter) {
        match direction {
            Direction::Escape => (&self.old, &self.new),
            Direction::Unescape => (&self.new, &self.old),
        }
    }
}
