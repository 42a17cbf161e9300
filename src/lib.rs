// SPDX-License-Identifier: MPL-2.0
//! `locale_store` keeps track of the UI language of a client application.
//!
//! It restores the persisted locale preference, resolves dotted translation
//! keys against a nested table, and switches between English and Arabic,
//! writing every change back to an injected key/value backend.

pub mod config;
pub mod error;
pub mod i18n;
pub mod storage;

pub use error::{Error, Result};
pub use i18n::{LocaleChange, LocaleStore, SubscriptionId, TranslationTable};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
