use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr with environment-based filtering.
///
/// `RUST_LOG` controls the filter and defaults to "warn", so decoded output on
/// stdout stays clean unless asked otherwise.
pub fn init_logging(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    match mode {
        LogMode::Pretty => builder.init(),
        LogMode::Json => builder.json().flatten_event(true).init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogMode {
    Pretty,
    Json,
}
