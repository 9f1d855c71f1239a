//! Resolution of parsed arguments and configuration into a rewrite request.
//!
//! Every validation that can fail without touching the filesystem happens
//! here, so a bad delimiter or glob is reported before any file is opened.

use std::path::PathBuf;

use txtar_escape_config::Config;
use txtar_escape_core::{
    DelimiterPair, DelimiterRewriter, Direction, FenceRule, FileMatcher, RewriteError,
    RewriteReport, pattern_for_extension,
};

use crate::cli::Cli;
use crate::errors::AppError;

#[derive(Debug)]
pub(crate) struct RewriteInvocation {
    pub(crate) direction: Direction,
    pub(crate) root: PathBuf,
    pub(crate) rewriter: DelimiterRewriter,
}

impl RewriteInvocation {
    /// Layers command-line flags over the loaded configuration.
    pub(crate) fn resolve(cli: Cli, config: &Config) -> Result<Self, AppError> {
        let direction = Direction::from(cli.command);
        let pattern = match (cli.pattern, cli.extension) {
            (Some(pattern), _) => pattern,
            (None, Some(extension)) => pattern_for_extension(&extension),
            (None, None) => config.pattern().to_owned(),
        };
        let old_delim = cli.old_delim.as_deref().unwrap_or(config.old_delim());
        let new_delim = cli.new_delim.as_deref().unwrap_or(config.new_delim());

        let pair = DelimiterPair::parse(old_delim, new_delim)?;
        let rule = FenceRule::for_direction(&pair, direction)?;
        let matcher = FileMatcher::new(&pattern).map_err(RewriteError::from)?;

        Ok(Self {
            direction,
            root: cli.dir,
            rewriter: DelimiterRewriter::new(rule, matcher),
        })
    }

    /// Runs the rewrite, turning per-file failures into an error once the
    /// scan has finished.
    pub(crate) fn execute(&self) -> Result<RewriteReport, AppError> {
        tracing::debug!(
            direction = %self.direction,
            root = %self.root.display(),
            pattern = self.rewriter.matcher().pattern(),
            target = %self.rewriter.rule().target(),
            "starting rewrite"
        );
        let report = self.rewriter.rewrite(&self.root)?;
        if report.is_success() {
            Ok(report)
        } else {
            Err(AppError::PartialFailure {
                failed: report.failures().len(),
            })
        }
    }
}
