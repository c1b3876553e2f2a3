// SPDX-License-Identifier: MPL-2.0
//! Diagnostic output through `tracing`.
//!
//! Verbosity is controlled with the `PEDIT_LOG` environment variable using
//! `EnvFilter` directives, e.g. `PEDIT_LOG=pedit=debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "PEDIT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        assert_eq!(DEFAULT_FILTER, "info");
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::info!("logging initialized twice");
    }
}
