//! Line-anchored fence substitution.
//!
//! A fence line is `<from><ws><label><ws><from>` occupying a whole line,
//! where `<ws>` is one or more horizontal whitespace characters and the label
//! is the shortest non-empty run that still lets the closing token end the
//! line. Each match becomes `<to> <label> <to>`. Only `\n` ends a line; a
//! `\r` directly before it is carried over so CRLF files keep their endings.

use std::borrow::Cow;

use regex::{Captures, Regex, Replacer};

use crate::delimiter::{Delimiter, DelimiterPair, Direction};
use crate::error::RewriteError;

/// Horizontal whitespace: `\s` without the line terminators.
const SEPARATOR: &str = r"[^\S\r\n]+";

/// A compiled fence substitution from one delimiter to another.
#[derive(Debug, Clone)]
pub struct FenceRule {
    regex: Regex,
    target: Delimiter,
}

impl FenceRule {
    /// Compiles a rule replacing `from` fences with `to` fences.
    ///
    /// A carriage return directly before the line feed is captured
    /// separately and re-emitted, so it never leaks into a label. Any other
    /// `\r` is ordinary label text.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Compile`] when the expression exceeds the
    /// regex size limits, which only happens for pathologically long tokens.
    pub fn new(from: &Delimiter, to: &Delimiter) -> Result<Self, RewriteError> {
        let token = regex::escape(from.as_str());
        let pattern = format!("(?m)^{token}{SEPARATOR}([^\\n]+?){SEPARATOR}{token}(\\r?)$");
        Ok(Self {
            regex: Regex::new(&pattern)?,
            target: to.clone(),
        })
    }

    /// Compiles the rule for one direction of a delimiter pair.
    ///
    /// # Errors
    ///
    /// See [`FenceRule::new`].
    pub fn for_direction(pair: &DelimiterPair, direction: Direction) -> Result<Self, RewriteError> {
        let (from, to) = pair.resolve(direction);
        Self::new(from, to)
    }

    /// Returns the delimiter written by this rule.
    #[must_use]
    pub const fn target(&self) -> &Delimiter {
        &self.target
    }

    /// Returns true when `line` is a fence line this rule would rewrite.
    #[must_use]
    pub fn is_fence(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Rewrites every fence line in `text`.
    ///
    /// Matches are non-overlapping and found leftmost first. The source text
    /// is borrowed back unchanged when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> RewriteOutcome<'t> {
        let mut replacer = FenceReplacer {
            target: self.target.as_str(),
            count: 0,
        };
        let output = self.regex.replace_all(text, replacer.by_ref());
        let changed = match &output {
            Cow::Borrowed(_) => false,
            Cow::Owned(rewritten) => rewritten.as_str() != text,
        };
        RewriteOutcome {
            output,
            replacements: replacer.count,
            changed,
        }
    }
}

/// Appends `<target> <label> <target>` without interpreting `$` in the target,
/// followed by the line's carriage return, if any.
struct FenceReplacer<'a> {
    target: &'a str,
    count: usize,
}

impl Replacer for FenceReplacer<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        let label = caps.get(1).map_or("", |label| label.as_str());
        let carriage_return = caps.get(2).map_or("", |cr| cr.as_str());
        dst.push_str(self.target);
        dst.push(' ');
        dst.push_str(label);
        dst.push(' ');
        dst.push_str(self.target);
        dst.push_str(carriage_return);
        self.count = self.count.saturating_add(1);
    }
}

/// Result of applying a [`FenceRule`] to one text.
#[derive(Debug)]
pub struct RewriteOutcome<'t> {
    output: Cow<'t, str>,
    replacements: usize,
    changed: bool,
}

impl RewriteOutcome<'_> {
    /// Returns the rewritten text.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the outcome, returning the rewritten text.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output.into_owned()
    }

    /// Number of fence lines that matched.
    #[must_use]
    pub const fn replacements(&self) -> usize {
        self.replacements
    }

    /// Returns true when the output differs from the input byte for byte.
    ///
    /// Fences that already carry the target delimiter with single spaces
    /// count as replacements but not as changes.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.changed
    }
}
