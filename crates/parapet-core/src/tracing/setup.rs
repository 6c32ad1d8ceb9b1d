//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Parapet tracing/logging system.
///
/// Reads the `PARAPET_LOG` environment variable for per-subsystem log
/// levels, e.g. `PARAPET_LOG=parapet_analysis=debug,parapet_core=info`.
/// Falls back to `parapet=info` if `PARAPET_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PARAPET_LOG")
            .unwrap_or_else(|_| EnvFilter::new("parapet=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
