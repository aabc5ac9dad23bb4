//! # Emporium Demo
//!
//! Driver for the Emporium pricing example: reads configuration, builds the
//! demonstration cart, and reports the amount due.
//!
//! ## Output Contract
//! - stdout: exactly one line, `Total amount after applying the discount: $<total>`
//!   (plus the JSON summary when `EMPORIUM_SUMMARY=true`)
//! - stderr: tracing events, filtered by `RUST_LOG`

pub mod config;
pub mod scenario;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every item added and each decoration
/// - `RUST_LOG=emporium_demo=info` - Scenario and total only
/// - Default: WARN level, so a plain run prints nothing but the total
///
/// Events go to stderr; stdout is reserved for the result.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
