//! Console and file logging.
//!
//! Two sinks: the console shows what the verbosity flags ask for,
//! while a daily-rolling file under the platform cache directory
//! records everything at trace level so a failed run can be inspected
//! after the console is gone.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_NAME: &str = "corrector.log";

/// Console verbosity selected on the command line.
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    fn console_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Install the global subscriber. The returned guard owns the file
/// writer's background thread; hold it until the program exits or the
/// tail of the log is lost.
pub fn init(verbosity: Verbosity, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let console = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_filter(EnvFilter::new(verbosity.console_directive()));

    // No writable log location is not fatal; the console still works.
    let (writer, guard) = match open_log_sink(log_file) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };
    let file = writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(EnvFilter::new("trace"))
    });

    tracing_subscriber::registry().with(console).with(file).init();

    guard
}

/// Open the non-blocking rolling appender, creating the log directory
/// first. `None` when no usable location exists.
fn open_log_sink(log_file: Option<&Path>) -> Option<(NonBlocking, WorkerGuard)> {
    let (dir, name) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| LOG_FILE_NAME.to_string());
            (dir, name)
        }
        None => (default_log_dir()?, LOG_FILE_NAME.to_string()),
    };

    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, name);
    Some(tracing_appender::non_blocking(appender))
}

/// `<cache>/bashkir-corrector/logs/`, e.g. `~/.cache/bashkir-corrector/logs/`
/// on Linux.
fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|c| c.join("bashkir-corrector").join("logs"))
}
