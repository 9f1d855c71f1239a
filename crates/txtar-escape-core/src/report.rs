//! Per-run accounting for a rewrite.

use crate::error::FileError;

/// What happened to one matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The content did not change, so nothing was written.
    Unchanged,
    /// The file was overwritten.
    Modified {
        /// Number of fence lines rewritten.
        replacements: usize,
    },
}

/// Summary of a completed scan.
#[derive(Debug, Default)]
pub struct RewriteReport {
    scanned: usize,
    modified: usize,
    replacements: usize,
    failures: Vec<FileError>,
}

impl RewriteReport {
    /// Number of matched files that were read and transformed.
    #[must_use]
    pub const fn scanned(&self) -> usize {
        self.scanned
    }

    /// Number of files written back.
    #[must_use]
    pub const fn modified(&self) -> usize {
        self.modified
    }

    /// Total fence lines rewritten across all modified files.
    #[must_use]
    pub const fn replacements(&self) -> usize {
        self.replacements
    }

    /// Files or entries that could not be processed.
    #[must_use]
    pub fn failures(&self) -> &[FileError] {
        &self.failures
    }

    /// Returns true when every matched file was processed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        self.scanned = self.scanned.saturating_add(1);
        if let FileOutcome::Modified { replacements } = outcome {
            self.modified = self.modified.saturating_add(1);
            self.replacements = self.replacements.saturating_add(replacements);
        }
    }

    pub(crate) fn record_failure(&mut self, error: FileError) {
        self.failures.push(error);
    }
}
