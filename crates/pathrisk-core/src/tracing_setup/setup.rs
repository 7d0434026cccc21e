//! Subscriber initialization driven by the `PATHRISK_LOG` filter.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `pathrisk_analysis=debug`.
pub const LOG_ENV_VAR: &str = "PATHRISK_LOG";

/// Install a global fmt subscriber.
///
/// `default_directive` applies when `PATHRISK_LOG` is unset or unparsable. Returns `false`
/// when a global subscriber was already installed, which makes repeated calls harmless.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
