//! Opt-in `tracing` setup for hosts embedding `linechart-rs`.
//!
//! The library only emits events. Hosts that already run a subscriber need
//! nothing from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "linechart_rs=info";

/// Installs a compact `fmt` subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    install()
}

#[cfg(feature = "telemetry")]
fn install() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
fn install() -> bool {
    false
}
