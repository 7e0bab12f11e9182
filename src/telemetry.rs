//! Log output for the shopping-list binaries.
//!
//! The library itself only emits `tracing` events (mutations at `debug`,
//! ignored removes at `warn`, redraws at `trace`). Nothing is printed until a
//! host installs a subscriber, either its own or the one below.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stderr keeps log lines out of the rendered list on stdout. Yields `false`
/// when built without the `telemetry` feature or when the host already owns
/// the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
