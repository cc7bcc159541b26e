//! Logging setup using `tracing-subscriber`.
//!
//! The library logs unknown variables and focus updates at `trace`,
//! collection transitions at `debug`, and rejected declarations at `warn`.
//! Logs go to stderr so command output on stdout stays machine-readable.

use std::io::stderr;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Maps the `-v` count to a level: warn, then debug, then trace.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8, ansi: bool) {
    let layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(level_for(verbosity)))
        .with(layer)
        .init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // Other crates stay at warn.
        EnvFilter::new(format!("warn,compositor={level},compositor_cli={level}"))
    })
}
