//! Tracing setup: subscriber initialization, span definitions, and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use mfis_core::config::defaults::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `MFIS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "mfis=info";

/// Initialize the MFIS tracing subscriber.
///
/// Reads the `MFIS_LOG` environment variable for per-crate log levels.
/// Format: `MFIS_LOG=mfis_inference=debug,mfis_loader=warn`
///
/// Falls back to `mfis=info` if `MFIS_LOG` is not set or is invalid.
/// Only the first initialization in a process takes effect.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

/// Initialize tracing with an explicit filter string, ignoring `MFIS_LOG`.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize tracing with JSON output and an explicit filter string.
pub fn init_json_tracing(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Filter directive for a bare level such as `"debug"`, scoped to the MFIS crates.
pub fn level_filter(level: &str) -> String {
    format!("mfis={level}")
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber may already be global (e.g. set by a test harness).
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
