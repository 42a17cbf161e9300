// SPDX-License-Identifier: MPL-2.0
//! Locale selection and dotted-key translation lookup.
//!
//! # Features
//!
//! - Persisted locale preference, restored at construction
//! - Nested translation tables addressed with `section.sub.key` paths
//! - Two-locale toggle between `en` and `ar`
//! - Synchronous change notification for UI layers
//! - Missing translations fall back to the key itself

pub mod store;
pub mod table;

pub use store::{LocaleChange, LocaleStore, SubscriptionId};
pub use table::TranslationTable;
