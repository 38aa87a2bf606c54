//! Opt-in tracing setup for hosts embedding `statchart`.
//!
//! The library itself only emits `tracing` events; it never installs a
//! global subscriber unless the host asks for one here.

/// Installs a compact fmt subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` when set, otherwise `statchart=debug`.
/// Returns `false` when the feature is disabled or another subscriber is
/// already registered.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("statchart=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
