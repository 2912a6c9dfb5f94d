//! Opt-in tracing setup for pages and tools embedding `chart-scroll-sync`.
//!
//! The crate only emits `tracing` events. Hosts either install their own
//! subscriber or call one of these helpers with the `telemetry` feature.

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVE`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVE)
}

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive` (e.g. `"chart_scroll_sync=debug"`).
///
/// Returns `false` without the `telemetry` feature or when a global subscriber
/// is already set.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
