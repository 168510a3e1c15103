// HFC Alerts logging
// Structured logs go to stderr; stdout carries only the startup banner.

use tracing::Level;

/// Installs the global `fmt` subscriber at INFO.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .try_init();
}
