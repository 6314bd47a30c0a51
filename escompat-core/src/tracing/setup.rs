//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the escompat tracing/logging system.
///
/// Reads the `ESCOMPAT_LOG` environment variable for per-subsystem log
/// levels, e.g. `ESCOMPAT_LOG=escompat_analysis::pipeline=debug`.
/// Falls back to `escompat=info` if `ESCOMPAT_LOG` is not set or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ESCOMPAT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("escompat=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
