//! Logging utilities for the AccurusBill services.
//!
//! Every crate logs through `tracing` macros; binaries call [`init`] once at
//! start-up to install the subscriber.

use tracing::{info, Level};
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt,
    prelude::*,
    EnvFilter,
};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use accurus_common::logging;
///
/// logging::init();
/// // A second call is a no-op.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured; the level given here applies to all
/// `accurus*` targets. Uses `try_init`, so calling it when a subscriber is
/// already installed (tests, embedding) is harmless.
pub fn init_with_level(level: Level) {
    let directive: Directive = format!("accurus={}", level)
        .parse()
        .unwrap_or_else(|_| LevelFilter::from_level(level).into());
    let filter = EnvFilter::from_default_env().add_directive(directive);

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
