//! Telemetry helpers for applications embedding `plotgrid`.
//!
//! Layout passes emit `tracing` events at the data-mutation and
//! layout-boundary level. Setup stays explicit and opt-in: consumers either
//! call one of the helpers below or wire their own subscriber and filters.

/// Default directive applied when `RUST_LOG` is absent.
pub const DEFAULT_FILTER: &str = "plotgrid=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is
/// enabled, honoring `RUST_LOG` and falling back to [`DEFAULT_FILTER`].
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`], but with an explicit fallback filter
/// directive (e.g. `"plotgrid=trace"`).
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
