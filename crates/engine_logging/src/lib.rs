#![deny(missing_docs)]
//! Shared logging utilities for the docmirror workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a per-thread "current item" marker that the macros prepend to every line,
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Position of the catalog item being processed: (number, total). Zero means none.
    static CURRENT_ITEM: Cell<(usize, usize)> = const { Cell::new((0, 0)) };
}

/// Marks `number` of `total` as the item being processed on this thread.
/// The orchestrator calls this once per catalog entry.
pub fn set_current_item(number: usize, total: usize) {
    CURRENT_ITEM.with(|v| v.set((number, total)));
}

/// Clears the current item marker, e.g. once traversal has finished.
pub fn clear_current_item() {
    CURRENT_ITEM.with(|v| v.set((0, 0)));
}

/// Returns the current item as `(number, total)`, or `None` outside traversal.
pub fn current_item() -> Option<(usize, usize)> {
    let (number, total) = CURRENT_ITEM.with(|v| v.get());
    (number != 0).then_some((number, total))
}

/// Prefix the logging macros put in front of each message.
#[doc(hidden)]
pub fn item_prefix() -> String {
    match current_item() {
        Some((number, total)) => format!("[{number}/{total}] "),
        None => String::new(),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::item_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::item_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::item_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::item_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::item_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
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
