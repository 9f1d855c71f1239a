//! Error types for the CLI runtime.

use std::sync::Arc;

use thiserror::Error;
use txtar_escape_core::{DelimiterError, RewriteError};

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("invalid delimiter: {0}")]
    Delimiter(#[from] DelimiterError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error("{failed} file(s) could not be rewritten")]
    PartialFailure { failed: usize },
}
