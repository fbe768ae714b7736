//! Stderr logger for the `log` facade.
//!
//! The library only emits through `log::debug!`/`log::trace!`; nothing is
//! printed until a logger is installed. [`install`] registers a small
//! stderr logger producing lines such as:
//!
//! ```text
//! [+0012ms] [DEBUG] [canvas] saved out/line.png (1000x1000)
//! ```
//!
//! Enabled by the binary's `--debug` flag or `RASTER_KIT_DEBUG=1`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable that turns on debug output.
pub const ENV_DEBUG: &str = "RASTER_KIT_DEBUG";

/// Time the logger was first installed.
static START: OnceLock<Instant> = OnceLock::new();

static LOGGER: StderrLogger = StderrLogger;

/// Set once our logger owns the `log` facade.
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Returns true if `RASTER_KIT_DEBUG` is set to `1` or `true`.
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var(ENV_DEBUG).is_ok_and(|v| matches!(v.trim(), "1" | "true"))
}

/// Installs the stderr logger and sets the maximum level.
///
/// Calling it again only adjusts the level. Returns `false` if another
/// logger implementation was registered first.
pub fn install(level: LevelFilter) -> bool {
    START.get_or_init(Instant::now);
    if log::set_logger(&LOGGER).is_ok() {
        INSTALLED.store(true, Ordering::SeqCst);
    }
    log::set_max_level(level);
    INSTALLED.load(Ordering::SeqCst)
}

fn elapsed_ms() -> u128 {
    START.get().map_or(0, |start| start.elapsed().as_millis())
}

fn color_code(level: Level) -> &'static str {
    match level {
        Level::Trace => "\x1b[90m", // Gray
        Level::Debug => "\x1b[36m", // Cyan
        Level::Info => "\x1b[32m",  // Green
        Level::Warn => "\x1b[33m",  // Yellow
        Level::Error => "\x1b[31m", // Red
    }
}

/// Formats one log line without the trailing newline.
fn format_line(elapsed: u128, level: Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[+{:04}ms] {}[{:5}]\x1b[0m [{}] {}",
        elapsed,
        color_code(level),
        level.as_str(),
        target,
        message
    )
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(elapsed_ms(), record.level(), record.target(), record.args());
        let _ = writeln!(io::stderr(), "{line}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// RAII guard for timing a scope at trace level.
pub struct TimingGuard {
    target: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Creates a new timing guard.
    pub fn new(target: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        log::trace!(target: target, "-> {operation}");
        Self { target, operation, start: Instant::now() }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::trace!(
            target: self.target,
            "<- {} ({:.2}ms)",
            self.operation,
            elapsed.as_secs_f64() * 1000.0
        );
    }
}
