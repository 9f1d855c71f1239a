//! Behaviour-driven development (BDD) step definitions for delimiter
//! rewriting scenarios.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use crate::{RewriteReport, rewrite};

const PATTERN: &str = "*.txtar";

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Scratch directory holding the files under test.
    workspace: Option<TempDir>,
    /// Report from the most recent successful rewrite.
    report: Option<RewriteReport>,
    /// Error message from the most recent failed rewrite.
    error: Option<String>,
}

impl TestWorld {
    fn root(&mut self) -> PathBuf {
        self.workspace
            .get_or_insert_with(|| TempDir::new().expect("temp dir"))
            .path()
            .to_path_buf()
    }

    fn run(&mut self, from: &str, to: &str) {
        let root = self.root();
        match rewrite(&root, PATTERN, from, to) {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(error) => {
                self.report = None;
                self.error = Some(error.to_string());
            }
        }
    }
}

/// Strips surrounding double quotes and expands `\n` escapes.
fn unquote(text: &str) -> String {
    text.trim_matches('"').replace("\\n", "\n")
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

#[given("a file {name} containing {content}")]
fn given_file(world: &RefCell<TestWorld>, name: String, content: String) {
    let root = world.borrow_mut().root();
    fs::write(root.join(unquote(&name)), unquote(&content)).expect("write file");
}

#[when("the tree is escaped")]
fn when_escaped(world: &RefCell<TestWorld>) {
    world.borrow_mut().run("--", "@@");
}

#[when("the tree is unescaped")]
fn when_unescaped(world: &RefCell<TestWorld>) {
    world.borrow_mut().run("@@", "--");
}

#[when("the tree is escaped with an empty new delimiter")]
fn when_escaped_with_empty_delimiter(world: &RefCell<TestWorld>) {
    world.borrow_mut().run("--", "");
}

#[then("the file {name} contains {content}")]
fn then_file_contains(world: &RefCell<TestWorld>, name: String, content: String) {
    let root = world.borrow_mut().root();
    let actual = fs::read_to_string(root.join(unquote(&name))).expect("read file");
    assert_eq!(actual, unquote(&content));
}

#[then("{count} file was modified")]
fn then_one_file_modified(world: &RefCell<TestWorld>, count: usize) {
    assert_modified(world, count);
}

#[then("{count} files were modified")]
fn then_files_modified(world: &RefCell<TestWorld>, count: usize) {
    assert_modified(world, count);
}

#[then("the rewrite fails with {message}")]
fn then_rewrite_fails(world: &RefCell<TestWorld>, message: String) {
    let world = world.borrow();
    let error = world.error.as_deref().expect("rewrite should have failed");
    let expected = unquote(&message);
    assert!(
        error.contains(&expected),
        "error {error:?} did not contain {expected:?}"
    );
}

fn assert_modified(world: &RefCell<TestWorld>, count: usize) {
    let world = world.borrow();
    let report = world.report.as_ref().expect("rewrite should have succeeded");
    assert_eq!(report.modified(), count);
}

#[scenario(
    path = "tests/features/delimiter_rewriter.feature",
    name = "Escaping replaces old fences with new fences"
)]
fn escaping_replaces_fences(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/delimiter_rewriter.feature",
    name = "Unescaping restores the original archive"
)]
fn unescaping_restores_archive(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/delimiter_rewriter.feature",
    name = "Partial fences are left alone"
)]
fn partial_fences_untouched(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/delimiter_rewriter.feature",
    name = "Files outside the pattern are never rewritten"
)]
fn unmatched_files_untouched(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/delimiter_rewriter.feature",
    name = "Empty delimiters are rejected"
)]
fn empty_delimiters_rejected(world: RefCell<TestWorld>) {
    drop(world);
}
