// SPDX-License-Identifier: MPL-2.0
//! Backend persisting entries to a flat `settings.toml`.
//!
//! The file holds top-level string pairs only:
//!
//! ```toml
//! locale = "ar"
//! ```
//!
//! A missing, unreadable or malformed file reads as empty; the store never
//! refuses to open. Writes re-read the file first so entries written by
//! another instance are kept. When the file is malformed at write time it
//! still reads as empty, so the rewrite keeps only the entry being set and
//! every other key that was in the file is lost.

use super::KeyValueStore;
use crate::config;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the settings file at `path`, reading whatever it currently holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    /// Opens `settings.toml` in the resolved config directory.
    ///
    /// See [`config::paths`] for the resolution order. Fails only when no
    /// config directory can be determined at all.
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = config::settings_file_path_with_override(base_dir).ok_or_else(|| {
            Error::Config("unable to determine the config directory".to_string())
        })?;
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = read_entries(&self.path);
        entries.insert(key.to_string(), value.to_string());
        self.entries = entries;
        save_to_path(&self.entries, &self.path)
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Failed to read settings file: {err}");
            return BTreeMap::new();
        }
    };

    match toml::from_str::<toml::Table>(&content) {
        Ok(table) => table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect(),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Ignoring malformed settings file: {err}");
            BTreeMap::new()
        }
    }
}

fn save_to_path(entries: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(entries)?;
    fs::write(path, content)?;
    Ok(())
}
