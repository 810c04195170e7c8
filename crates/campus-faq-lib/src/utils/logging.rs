//! Minimal diagnostic logging.
//!
//! Diagnostics go to stderr so they never mix with the reply text the shell
//! prints on stdout. Output is off by default and enabled by setting the
//! `CAMPUS_FAQ_DEBUG` environment variable to any non-empty value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static INIT: Once = Once::new();
static ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize logging once per process. Safe to call repeatedly; only the
/// first call reads the environment.
pub fn init() {
    INIT.call_once(|| {
        let on = std::env::var("CAMPUS_FAQ_DEBUG")
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        ENABLED.store(on, Ordering::Relaxed);
    });
}

/// Whether debug diagnostics are enabled.
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Emit a debug line to stderr when diagnostics are enabled.
pub fn debug(msg: &str) {
    if enabled() {
        eprintln!("[campus-faq] {}", msg);
    }
}
