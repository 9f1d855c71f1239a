//! CLI entrypoint for `txtar-escape`.
//!
//! The binary delegates to [`txtar_escape_cli::run`], which parses arguments,
//! loads layered configuration, and rewrites delimiter fences beneath the
//! requested directory.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    txtar_escape_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
