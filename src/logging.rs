//! Optional tracing setup for host binaries
//!
//! Library code only emits `tracing` events. Hosts that do not already
//! install a subscriber can call `init()` for a sensible default.

use tracing_subscriber::EnvFilter;

/// Install a default fmt subscriber honoring `RUST_LOG`
///
/// Falls back to `info` when `RUST_LOG` is unset. Safe to call more than
/// once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
