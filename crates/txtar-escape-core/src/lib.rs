//! Delimiter fence rewriting for txtar-style archives.
//!
//! A txtar archive separates its members with *fence lines* such as
//! `-- hello.txt --`. When an archive is itself stored inside another archive
//! those fences collide, so this crate swaps one delimiter token for another
//! across a directory tree and can swap it back again:
//!
//! - **Delimiters** via [`Delimiter`] and [`DelimiterPair`], validated tokens
//!   that are always matched literally
//! - **Fence rules** via [`FenceRule`], the compiled line-anchored
//!   substitution applied to file contents
//! - **Discovery** via [`FileMatcher`], recursive glob matching below a root
//! - **Rewriting** via [`DelimiterRewriter`], which reads, transforms, and
//!   conditionally writes every matched file
//!
//! # Example: Escaping a tree
//!
//! ```no_run
//! use std::path::Path;
//! use txtar_escape_core::{DelimiterPair, DelimiterRewriter, Direction, FenceRule, FileMatcher};
//!
//! let pair = DelimiterPair::new("--".parse()?, "@@".parse()?);
//! let rule = FenceRule::for_direction(&pair, Direction::Escape)?;
//! let matcher = FileMatcher::new("*.txtar")?;
//!
//! let report = DelimiterRewriter::new(rule, matcher).rewrite(Path::new("testdata"))?;
//! assert!(report.is_success());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Escaping then unescaping with the same pair reproduces the original bytes,
//! provided no label is itself a fence line for the new delimiter.

mod delimiter;
mod discovery;
mod error;
mod fence;
mod report;
mod rewriter;

pub use delimiter::{Delimiter, DelimiterPair, Direction};
pub use discovery::{FileMatcher, pattern_for_extension};
pub use error::{DelimiterError, FileError, PatternError, RewriteError};
pub use fence::{FenceRule, RewriteOutcome};
pub use report::{FileOutcome, RewriteReport};
pub use rewriter::{DelimiterRewriter, rewrite};

#[cfg(test)]
mod tests;
