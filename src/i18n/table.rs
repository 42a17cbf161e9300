// SPDX-License-Identifier: MPL-2.0
//! Nested translation table indexed by locale, then by dotted key path.
//!
//! ```
//! use locale_store::i18n::table::TranslationTable;
//!
//! let table = TranslationTable::from_json_str(
//!     r#"{ "en": { "greeting": { "hello": "Hi" } } }"#,
//! ).unwrap();
//! assert_eq!(table.lookup("en", "greeting.hello"), "Hi");
//! assert_eq!(table.lookup("en", "greeting.bye"), "greeting.bye");
//! ```

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// File name of the bundled table inside `assets/locales/`.
const BUNDLED_TABLE: &str = "index.json";

/// Separator between segments of a translation key.
pub const KEY_SEPARATOR: char = '.';

/// Read-only translation data. Top-level members are locale identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    root: Value,
}

impl TranslationTable {
    /// Wraps a parsed JSON value. The root must be an object.
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(Error::Table(
                "translation table root must be an object keyed by locale".to_string(),
            ));
        }
        Ok(Self { root })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        Self::from_value(root)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The table compiled into the binary from `assets/locales/index.json`.
    pub fn bundled() -> Result<Self> {
        let file = Asset::get(BUNDLED_TABLE)
            .ok_or_else(|| Error::Table(format!("bundled table {BUNDLED_TABLE} is missing")))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Table(err.to_string()))?;
        Self::from_json_str(content)
    }

    /// Locale identifiers present at the top level.
    pub fn locales(&self) -> Vec<&str> {
        self.root
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.root.get(locale).is_some()
    }

    /// Every dotted key that resolves to a leaf under `locale`, sorted.
    ///
    /// Array elements are addressed by index (`days.0`). Empty containers
    /// contribute nothing.
    pub fn keys(&self, locale: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(subtree) = self.root.get(locale) {
            collect_keys(subtree, None, &mut keys);
        }
        keys.sort_unstable();
        keys
    }

    /// Walks `key` segment by segment under `locale`.
    ///
    /// Objects are entered by member name and arrays by decimal index. Any
    /// other value (including `null`) ends the walk with `None`.
    pub fn resolve(&self, locale: &str, key: &str) -> Option<&Value> {
        let mut current = self.root.get(locale)?;
        for segment in key.split(KEY_SEPARATOR) {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(array_index(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolves `key` under `locale`, falling back to the key itself.
    ///
    /// String leaves are returned verbatim; any other resolved value is
    /// rendered as JSON text.
    pub fn lookup(&self, locale: &str, key: &str) -> String {
        match self.resolve(locale, key) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => key.to_string(),
        }
    }
}

fn collect_keys(value: &Value, prefix: Option<&str>, keys: &mut Vec<String>) {
    let join = |segment: &str| {
        prefix.map_or_else(
            || segment.to_string(),
            |p| format!("{p}{KEY_SEPARATOR}{segment}"),
        )
    };

    match value {
        Value::Object(map) => {
            for (segment, child) in map {
                collect_keys(child, Some(&join(segment.as_str())), keys);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_keys(child, Some(&join(index.to_string().as_str())), keys);
            }
        }
        _ => {
            if let Some(key) = prefix {
                keys.push(key.to_string());
            }
        }
    }
}

/// Parses a canonical decimal index ("0", "12"; not "+1" or "01").
fn array_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
