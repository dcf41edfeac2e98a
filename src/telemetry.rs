//! Tracing setup for the CLI and for hosts that want the same output.
//!
//! Events go to stderr so JSON on stdout stays machine-readable.

/// Installs a compact stderr subscriber filtered at `info`.
///
/// See [`init_tracing`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (for example
/// `"debug"` or `"materx_explorer=trace"`) is used. Returns `false` when the
/// `telemetry` feature is off or a global subscriber is already set.
#[must_use]
pub fn init_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
