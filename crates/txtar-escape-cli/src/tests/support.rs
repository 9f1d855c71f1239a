//! Harness shared by the unit and behavioural CLI tests.
//!
//! The runtime is driven through [`crate::run_with_loader`] with a fixed
//! configuration and an in-memory log sink, so no test depends on the
//! developer's environment or configuration files.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, ensure};
use tempfile::TempDir;
use txtar_escape_config::Config;

use crate::errors::AppError;
use crate::telemetry::LogSink;
use crate::{ConfigLoader, run_with_loader};

pub(super) const PROGRAM: &str = "txtar-escape";

/// Loader returning a fixed configuration.
pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _config_path: Option<&Path>) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Cloneable writer collecting log output for later inspection.
#[derive(Clone, Default)]
pub(super) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(super) fn text(&self) -> String {
        let bytes = self.0.lock().expect("lock log buffer").clone();
        String::from_utf8(bytes).expect("log output utf8")
    }

    fn clear(&self) {
        self.0.lock().expect("lock log buffer").clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// State for a single CLI test: a scratch tree, the configuration served by
/// the loader, and everything the last run produced.
#[derive(Default)]
pub(super) struct TestWorld {
    workspace: Option<TempDir>,
    pub(super) config: Config,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    logs: SharedBuffer,
    exit_code: Option<ExitCode>,
}

impl TestWorld {
    pub(super) fn root(&mut self) -> PathBuf {
        self.workspace
            .get_or_insert_with(|| TempDir::new().expect("temp dir"))
            .path()
            .to_path_buf()
    }

    pub(super) fn write_file(&mut self, name: &str, contents: impl AsRef<[u8]>) {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(path, contents).expect("write file");
    }

    pub(super) fn read_file(&mut self, name: &str) -> String {
        fs::read_to_string(self.root().join(name)).expect("read file")
    }

    /// Runs the CLI against the scratch tree.
    pub(super) fn run_in_workspace(&mut self, args: &[&str]) {
        let root = self.root();
        let mut arguments: Vec<OsString> = args.iter().map(OsString::from).collect();
        arguments.push(OsString::from("--dir"));
        arguments.push(root.into_os_string());
        self.run(arguments);
    }

    /// Runs the CLI with exactly the given arguments.
    pub(super) fn run<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.stdout.clear();
        self.stderr.clear();
        self.logs.clear();

        let arguments: Vec<OsString> = std::iter::once(OsString::from(PROGRAM))
            .chain(args.into_iter().map(Into::into))
            .collect();
        let loader = StaticConfigLoader::new(self.config.clone());
        let logs = self.logs.clone();
        let sink = LogSink::plain(move || logs.clone());
        let exit = run_with_loader(arguments, &mut self.stdout, &mut self.stderr, &loader, sink);
        self.exit_code = Some(exit);
    }

    pub(super) fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.clone()).expect("stdout utf8")
    }

    pub(super) fn stderr_text(&self) -> String {
        String::from_utf8(self.stderr.clone()).expect("stderr utf8")
    }

    pub(super) fn log_text(&self) -> String {
        self.logs.text()
    }

    /// Parses each captured log line as a JSON event.
    pub(super) fn json_events(&self) -> Result<Vec<serde_json::Value>> {
        let logs = self.log_text();
        ensure!(!logs.is_empty(), "no log events were captured");
        logs.lines()
            .map(|line| {
                serde_json::from_str(line).with_context(|| format!("log line {line:?} is not json"))
            })
            .collect()
    }

    pub(super) fn exit_code(&self) -> ExitCode {
        self.exit_code.expect("exit code recorded")
    }
}
