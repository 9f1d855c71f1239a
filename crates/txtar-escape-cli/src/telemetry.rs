//! Log subscriber construction for a single CLI run.
//!
//! The subscriber is returned rather than installed globally; the runner
//! scopes it around the rewrite with [`tracing::subscriber::with_default`],
//! so each run (and each test) carries its own verbosity threshold.

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use txtar_escape_config::LogFormat;

/// Maps the count of `-v` flags to a severity threshold.
///
/// No flag shows warnings only, `-v` adds per-file processing notices, and
/// `-vv` or more adds per-file modification notices.
pub(crate) const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Destination for log events.
pub(crate) struct LogSink<M> {
    make_writer: M,
    ansi: bool,
}

impl LogSink<fn() -> io::Stderr> {
    /// Writes to the process stderr, colouring output only on a terminal.
    pub(crate) fn stderr() -> Self {
        Self {
            make_writer: io::stderr,
            ansi: io::stderr().is_terminal(),
        }
    }
}

impl<M> LogSink<M>
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    /// Writes plain (uncoloured) events to a custom writer.
    #[cfg(test)]
    pub(crate) const fn plain(make_writer: M) -> Self {
        Self {
            make_writer,
            ansi: false,
        }
    }

    /// Builds a subscriber honouring the threshold and output format.
    pub(crate) fn subscriber(
        self,
        level: LevelFilter,
        format: LogFormat,
    ) -> Box<dyn Subscriber + Send + Sync> {
        let builder = fmt::Subscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_level(true)
            .with_writer(self.make_writer)
            .with_ansi(self.ansi);

        match format {
            LogFormat::Json => Box::new(
                builder
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .json()
                    .flatten_event(true)
                    .finish(),
            ),
            LogFormat::Compact => Box::new(builder.without_time().compact().finish()),
        }
    }
}
