// SPDX-License-Identifier: MPL-2.0
//! Configuration: fixed locale identifiers and settings file location.
//!
//! The selected locale is persisted in a flat `settings.toml` inside the
//! application config directory (see [`paths`] for how that directory is
//! chosen).
//!
//! # Examples
//!
//! ```no_run
//! use locale_store::config;
//! use std::path::PathBuf;
//!
//! let path = config::settings_file_path_with_override(Some(PathBuf::from("/tmp/app")));
//! assert_eq!(path, Some(PathBuf::from("/tmp/app/settings.toml")));
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use std::path::PathBuf;

/// Returns the settings file path from the default config directory.
pub fn settings_file_path() -> Option<PathBuf> {
    settings_file_path_with_override(None)
}

/// Returns the settings file path with an optional config directory override.
pub fn settings_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(SETTINGS_FILE);
        path
    })
}
