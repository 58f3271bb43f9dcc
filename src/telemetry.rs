//! Tracing initialization for host processes.
//!
//! The store itself only emits `tracing` events; subscribing to them is the
//! host's decision. This helper wires up the conventional fmt subscriber with
//! an `RUST_LOG`-style filter for binaries and tests that want one.

use tracing_subscriber::EnvFilter;

/// Initializes a fmt tracing subscriber with an environment filter.
///
/// Falls back to the `info` level when `RUST_LOG` is unset. Safe to call more
/// than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
