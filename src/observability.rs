//! Subscriber setup for the `signalbox` binary.
//!
//! The engine itself only emits `tracing` events: pair changes at `info`,
//! config fallback at `warn`, fail-safe entry at `error` and individual
//! step moves at `debug`. Nothing is printed unless a host installs a
//! subscriber, which is what [`init_logging`] does for the CLI.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive read from the environment, e.g.
/// `SIGNALBOX_LOG=signalbox::sequencing=debug`.
pub const LOG_ENV: &str = "SIGNALBOX_LOG";

/// Level enabled by `-v` repeated `verbosity` times. Quiet runs still see
/// warnings, so a broken config file is never silent.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Send engine events to stderr so stdout stays free for the light display.
///
/// A filter in [`LOG_ENV`] replaces the `-v` level entirely. Module targets
/// are shown from `-vv` up. A second call leaves the first subscriber in
/// place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let colored = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(colored)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
