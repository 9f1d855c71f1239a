//! Recursive discovery of files whose names match a glob.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use crate::error::{FileError, PatternError};

/// Matches files below a root directory against a glob.
///
/// A pattern without `/` is tested against the file name alone, so `*.txtar`
/// finds archives at any depth. A pattern containing `/` is tested against
/// the path relative to the root. `*` and `?` never cross a separator; `**`
/// does.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    pattern: String,
    matcher: GlobMatcher,
    match_relative_path: bool,
}

impl FileMatcher {
    /// Compiles a file name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the glob is malformed.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| PatternError {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(Self {
            pattern: pattern.to_owned(),
            matcher: glob.compile_matcher(),
            match_relative_path: pattern.contains('/'),
        })
    }

    /// Compiles the pattern for a bare file extension (see
    /// [`pattern_for_extension`]).
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the resulting glob is malformed.
    pub fn from_extension(extension: &str) -> Result<Self, PatternError> {
        Self::new(&pattern_for_extension(extension))
    }

    /// The glob this matcher was built from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Tests a path relative to the walk root.
    #[must_use]
    pub fn is_match(&self, relative: &Path) -> bool {
        if self.match_relative_path {
            return self.matcher.is_match(relative);
        }
        relative
            .file_name()
            .is_some_and(|name| self.matcher.is_match(name))
    }

    /// Lazily yields every matching file below `root`, in file name order.
    ///
    /// Directories are never yielded, even when their names match. Symlinked
    /// directories are not descended into; symlinks to regular files are
    /// yielded. Entries that cannot be read are yielded as
    /// [`FileError::Traverse`] so callers decide whether to continue.
    pub fn matching_files<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<PathBuf, FileError>> + 'a {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if self.accepts(root, &entry) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(source) => Some(Err(FileError::Traverse { source })),
            })
    }

    fn accepts(&self, root: &Path, entry: &DirEntry) -> bool {
        if !is_file(entry) {
            return false;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        self.is_match(relative)
    }
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Expands a bare extension into a file name glob.
///
/// `txtar` becomes `*.txtar`; a value already starting with `*` is returned
/// unchanged.
#[must_use]
pub fn pattern_for_extension(extension: &str) -> String {
    if extension.starts_with('*') {
        extension.to_owned()
    } else {
        format!("*.{extension}")
    }
}
