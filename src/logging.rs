//! Tracing setup for applications embedding the engine. The embedding
//! application builds `LoggingOptions` (directly or from the `XINGYU_*`
//! environment variables) and calls `init_tracing` once at startup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_DIRECTORY: &str = "./logs";
const DEFAULT_FILE_PREFIX: &str = "xingyu-engine";

/// How the engine's tracing output is emitted. Logs always go to stdout;
/// when `file_output` is set a daily-rolling file named
/// `<file_prefix>.log.<date>` is also written under `directory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// `EnvFilter` directive string, e.g. `info` or `xingyu_engine=debug`.
    pub level: String,
    pub file_output: bool,
    pub directory: String,
    pub file_prefix: String,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_output: false,
            directory: DEFAULT_DIRECTORY.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl LoggingOptions {
    /// Reads options from the engine's environment variables, falling back
    /// to the defaults for anything unset: `XINGYU_LOG` (filter directive),
    /// `XINGYU_LOG_TO_FILE` (`true`/`1` enables file output),
    /// `XINGYU_LOG_DIR`, `XINGYU_LOG_PREFIX`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var("XINGYU_LOG").unwrap_or(defaults.level),
            file_output: std::env::var("XINGYU_LOG_TO_FILE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.file_output),
            directory: std::env::var("XINGYU_LOG_DIR").unwrap_or(defaults.directory),
            file_prefix: std::env::var("XINGYU_LOG_PREFIX").unwrap_or(defaults.file_prefix),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_file_output(mut self, directory: impl Into<String>) -> Self {
        self.file_output = true;
        self.directory = directory.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }

    fn file_name(&self) -> String {
        format!("{}.log", self.file_prefix)
    }
}

/// Keeps the non-blocking file writer alive. Dropping it flushes and stops
/// file logging, so hold it for the lifetime of the application.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Initializes the global tracing subscriber from the given options.
/// Returns a guard when file output is active; invalid filter directives
/// fall back to `info`, and an unwritable log directory downgrades to
/// stdout-only rather than failing startup.
pub fn init_tracing(options: &LoggingOptions) -> Option<LogGuard> {
    let stdout_layer = fmt::layer().with_target(true);

    if options.file_output {
        if let Err(err) = std::fs::create_dir_all(&options.directory) {
            eprintln!(
                "failed to create log directory {}: {err}",
                options.directory
            );
        } else {
            let appender =
                RollingFileAppender::new(Rotation::DAILY, &options.directory, options.file_name());
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(options.env_filter())
                .with(stdout_layer)
                .with(file_layer)
                .init();

            return Some(LogGuard { _guard: guard });
        }
    }

    tracing_subscriber::registry()
        .with(options.env_filter())
        .with(stdout_layer)
        .init();

    None
}
