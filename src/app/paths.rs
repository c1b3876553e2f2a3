// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a directory wins: an explicit override
//! (used by tests), `--config-dir`, `PEDIT_CONFIG_DIR`, then the platform
//! config directory from `dirs`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Subdirectory created under the platform config directory.
const APP_DIR_NAME: &str = "PEdit";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "PEDIT_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Which source supplied the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Override,
    CommandLine,
    Environment,
    Platform,
}

/// Records the `--config-dir` argument. Only the first recorded value is
/// kept.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let Some(dir) = config_dir else {
        return;
    };
    if CLI_CONFIG_DIR.set(PathBuf::from(dir)).is_err() {
        tracing::warn!("--config-dir was already recorded, ignoring");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolves the config directory and reports where it came from.
///
/// Platform defaults are `~/.config/PEdit` on Linux,
/// `~/Library/Application Support/PEdit` on macOS and
/// `%APPDATA%\PEdit` on Windows. `None` when no source applies.
pub fn resolve_config_dir(override_dir: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    override_dir
        .map(|dir| (dir, ConfigDirSource::Override))
        .or_else(|| {
            CLI_CONFIG_DIR
                .get()
                .cloned()
                .map(|dir| (dir, ConfigDirSource::CommandLine))
        })
        .or_else(|| env_config_dir().map(|dir| (dir, ConfigDirSource::Environment)))
        .or_else(|| {
            dirs::config_dir().map(|dir| (dir.join(APP_DIR_NAME), ConfigDirSource::Platform))
        })
}
