// SPDX-License-Identifier: MPL-2.0
//! Error types for translation table loading and persistence backends.
//!
//! The [`LocaleStore`](crate::i18n::LocaleStore) surface never returns these:
//! every anomaly there degrades to a fallback value. They surface only from
//! constructors that read external data and from [`KeyValueStore::set`].
//!
//! [`KeyValueStore::set`]: crate::storage::KeyValueStore::set

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The translation table could not be parsed or has the wrong shape.
    #[error("Table Error: {0}")]
    Table(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Table(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
