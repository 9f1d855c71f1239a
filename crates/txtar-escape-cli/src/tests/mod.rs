//! In-process tests for the CLI runtime.

mod support;
