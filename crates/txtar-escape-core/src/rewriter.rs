//! In-place rewriting of every matched file below a root.
//!
//! Files are handled one at a time: read fully, transformed with the
//! [`FenceRule`], and written back only when the text changed. A file that
//! cannot be read or written is logged, recorded in the [`RewriteReport`],
//! and skipped; the scan always runs to completion. There is no rollback, so
//! an interrupted run leaves earlier files rewritten.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::delimiter::Delimiter;
use crate::discovery::FileMatcher;
use crate::error::{FileError, RewriteError};
use crate::fence::FenceRule;
use crate::report::{FileOutcome, RewriteReport};

/// Applies one [`FenceRule`] to every file selected by a [`FileMatcher`].
#[derive(Debug, Clone)]
pub struct DelimiterRewriter {
    rule: FenceRule,
    matcher: FileMatcher,
}

impl DelimiterRewriter {
    /// Creates a rewriter from a compiled rule and matcher.
    #[must_use]
    pub const fn new(rule: FenceRule, matcher: FileMatcher) -> Self {
        Self { rule, matcher }
    }

    /// Returns the substitution rule.
    #[must_use]
    pub const fn rule(&self) -> &FenceRule {
        &self.rule
    }

    /// Returns the file matcher.
    #[must_use]
    pub const fn matcher(&self) -> &FileMatcher {
        &self.matcher
    }

    /// Rewrites every matching file below `root`.
    ///
    /// # Errors
    ///
    /// Fails before touching any file when `root` is missing, is not a
    /// directory, or cannot be inspected. Per-file failures do not abort the
    /// scan; they are reported through [`RewriteReport::failures`].
    pub fn rewrite(&self, root: &Path) -> Result<RewriteReport, RewriteError> {
        ensure_root_directory(root)?;

        let mut report = RewriteReport::default();
        for candidate in self.matcher.matching_files(root) {
            let result = candidate.and_then(|path| self.rewrite_file(&path));
            match result {
                Ok(outcome) => report.record(outcome),
                Err(error) => {
                    warn!(error = %error, "skipping file");
                    report.record_failure(error);
                }
            }
        }

        info!(
            root = %root.display(),
            pattern = self.matcher.pattern(),
            scanned = report.scanned(),
            modified = report.modified(),
            replacements = report.replacements(),
            failed = report.failures().len(),
            "rewrite finished"
        );
        Ok(report)
    }

    /// Rewrites a single file in place.
    ///
    /// The file is written only when the transformed text differs from the
    /// original, leaving untouched files with their modification time intact.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Read`] when the file cannot be read as UTF-8 text
    /// and [`FileError::Write`] when the rewritten text cannot be stored.
    pub fn rewrite_file(&self, path: &Path) -> Result<FileOutcome, FileError> {
        info!(path = %path.display(), "processing");
        let content = fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let outcome = self.rule.apply(&content);
        if !outcome.has_changes() {
            return Ok(FileOutcome::Unchanged);
        }

        let replacements = outcome.replacements();
        fs::write(path, outcome.output()).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), replacements, "modified");
        Ok(FileOutcome::Modified { replacements })
    }
}

fn ensure_root_directory(root: &Path) -> Result<(), RewriteError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(RewriteError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Err(RewriteError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(RewriteError::InspectRoot {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Rewrites `from` fences to `to` fences in every file below `root` whose
/// name matches `pattern`.
///
/// Escaping is `rewrite(root, pattern, old, new)`; unescaping is the same call
/// with the tokens swapped.
///
/// # Errors
///
/// Returns [`RewriteError`] for empty or multi-line delimiters, malformed
/// patterns, and missing roots, all before any file is read.
pub fn rewrite(
    root: &Path,
    pattern: &str,
    from: &str,
    to: &str,
) -> Result<RewriteReport, RewriteError> {
    let from = Delimiter::new(from)?;
    let to = Delimiter::new(to)?;
    let rule = FenceRule::new(&from, &to)?;
    let matcher = FileMatcher::new(pattern)?;
    DelimiterRewriter::new(rule, matcher).rewrite(root)
}
