//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "CALIBRATION_LOG";

/// Filter used when `CALIBRATION_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "calibration_core=info,calibration_intel=info";

/// Initialize the tracing/logging system for a host process.
///
/// Reads `CALIBRATION_LOG` for per-crate log levels.
/// Format: `CALIBRATION_LOG=calibration_intel=debug,calibration_core=warn`
///
/// The engine itself only emits events; hosts that already install a
/// subscriber should not call this. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
