//! Error types for delimiter rewriting.
//!
//! Configuration problems ([`DelimiterError`], [`PatternError`], and the
//! root checks in [`RewriteError`]) surface before any file is touched.
//! [`FileError`] describes a single file that could not be processed; the
//! rewriter records those and keeps going.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A delimiter token was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DelimiterError {
    /// The token was the empty string.
    #[error("delimiter must not be empty")]
    Empty,

    /// The token contained a carriage return or line feed.
    #[error("delimiter {token:?} must not contain a line break")]
    LineBreak {
        /// The rejected token.
        token: String,
    },
}

/// A file name pattern could not be compiled.
#[derive(Debug, Error)]
#[error("invalid file pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The pattern as supplied.
    pub pattern: String,
    /// Underlying glob error.
    #[source]
    pub source: globset::Error,
}

/// Errors that stop a rewrite before any file is processed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RewriteError {
    /// One of the delimiter tokens was invalid.
    #[error("invalid delimiter: {0}")]
    Delimiter(#[from] DelimiterError),

    /// The file name pattern was invalid.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The fence expression could not be compiled.
    #[error("failed to compile fence expression: {0}")]
    Compile(#[from] regex::Error),

    /// The root directory does not exist.
    #[error("root directory '{}' does not exist", path.display())]
    RootNotFound {
        /// The missing root.
        path: PathBuf,
    },

    /// The root exists but is not a directory.
    #[error("root '{}' is not a directory", path.display())]
    RootNotDirectory {
        /// The offending root.
        path: PathBuf,
    },

    /// The root could not be inspected.
    #[error("failed to inspect root directory '{}': {source}", path.display())]
    InspectRoot {
        /// The root being inspected.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// A single file (or directory entry) that could not be processed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileError {
    /// Reading the file failed, including invalid UTF-8 content.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Writing the rewritten content failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Walking the directory tree failed at some entry.
    #[error("failed to traverse directory tree: {source}")]
    Traverse {
        /// Underlying traversal error, which carries the failing path.
        #[source]
        source: walkdir::Error,
    },
}

impl FileError {
    /// Returns the path associated with the failure, when known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
            Self::Traverse { source } => source.path(),
        }
    }
}
