#![deny(missing_docs)]
//! Shared logging utilities for the vitrine workspace.
//!
//! This crate provides the `vitrine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current render frame count.
    static FRAME_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the render frame count for the current thread.
/// This should be called by the platform run loop once per frame.
pub fn set_frame_tick(tick: u64) {
    FRAME_TICK.with(|v| v.set(tick));
}

/// Retrieves the render frame count for the current thread.
/// Returns 0 if the frame count has not been set.
pub fn get_frame_tick() -> u64 {
    FRAME_TICK.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! vitrine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! vitrine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! vitrine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! vitrine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! vitrine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
