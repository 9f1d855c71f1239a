//! Command-line runtime for `txtar-escape`.
//!
//! The module owns argument parsing, configuration bootstrapping, log
//! subscriber setup, and exit code mapping. IO streams, the configuration
//! loader, and the log sink are injected so tests can drive the runtime
//! in-process.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::fmt::MakeWriter;

mod cli;
mod command;
mod config;
mod errors;
mod telemetry;

use cli::Cli;
use command::RewriteInvocation;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use telemetry::{LogSink, level_for_verbosity};

struct CliRunner<'a, W: Write, E: Write, L: ConfigLoader> {
    stdout: &'a mut W,
    stderr: &'a mut E,
    loader: &'a L,
}

impl<'a, W, E, L> CliRunner<'a, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    fn new(stdout: &'a mut W, stderr: &'a mut E, loader: &'a L) -> Self {
        Self {
            stdout,
            stderr,
            loader,
        }
    }

    fn run<I, M>(&mut self, args: I, sink: LogSink<M>) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
        M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(error) => return self.report_usage(&error),
        };
        let verbosity = cli.verbose;
        let log_format_override = cli.log_format;

        let result = self
            .loader
            .load(cli.config_path.as_deref())
            .and_then(|config| {
                let log_format = log_format_override.unwrap_or_else(|| config.log_format());
                RewriteInvocation::resolve(cli, &config).map(|invocation| (invocation, log_format))
            })
            .and_then(|(invocation, log_format)| {
                let subscriber = sink.subscriber(level_for_verbosity(verbosity), log_format);
                tracing::subscriber::with_default(subscriber, || invocation.execute())
            });

        match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(error) => {
                let _ = writeln!(self.stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }

    /// Prints clap output (help, version, or a usage error) on the stream
    /// clap selects and maps its exit code.
    fn report_usage(&mut self, error: &clap::Error) -> ExitCode {
        let rendered = error.render();
        let written = if error.use_stderr() {
            write!(self.stderr, "{rendered}")
        } else {
            write!(self.stdout, "{rendered}")
        };
        if written.is_err() {
            return ExitCode::FAILURE;
        }
        u8::try_from(error.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Log events go to the process stderr.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader, LogSink::stderr())
}

/// Runs the CLI with a custom configuration loader and log sink.
pub(crate) fn run_with_loader<I, W, E, L, M>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
    sink: LogSink<M>,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    CliRunner::new(stdout, stderr, loader).run(args, sink)
}

#[cfg(test)]
mod tests;
