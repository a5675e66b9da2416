//! Tracing setup — structured logging for the verification engine.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vouch_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `VOUCH_LOG` environment variable for per-subsystem filtering
/// (`VOUCH_LOG=vouch_engine=debug,vouch_signals=warn`); the configured log
/// level is the fallback when the variable is unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = config.log_level.clone();
    INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_env("VOUCH_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .init();
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Bypasses the environment variable and the `Once` guard; the caller owns
/// making sure no other subscriber is installed.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}
