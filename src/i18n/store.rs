// SPDX-License-Identifier: MPL-2.0
//! The current locale, its persistence, and key lookup against it.
//!
//! # Examples
//!
//! ```
//! use locale_store::i18n::{LocaleStore, TranslationTable};
//! use locale_store::storage::{KeyValueStore, MemoryStore};
//! use std::sync::Arc;
//!
//! let table = TranslationTable::from_json_str(
//!     r#"{ "en": { "greeting": { "hello": "Hi" } },
//!          "ar": { "greeting": { "hello": "مرحبا" } } }"#,
//! ).unwrap();
//! let mut store = LocaleStore::new(Arc::new(table), MemoryStore::new());
//!
//! assert_eq!(store.locale(), "en");
//! assert_eq!(store.lookup("greeting.hello"), "Hi");
//!
//! store.toggle_locale();
//! assert_eq!(store.lookup("greeting.hello"), "مرحبا");
//! assert_eq!(store.storage().get("locale"), Some("ar".to_string()));
//! ```

use super::table::TranslationTable;
use crate::config::{ALTERNATE_LOCALE, DEFAULT_LOCALE, LOCALE_KEY};
use crate::storage::KeyValueStore;
use std::fmt;
use std::sync::Arc;

/// Payload passed to subscribers when the locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChange {
    pub previous: String,
    pub current: String,
}

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&LocaleChange)>;

/// Holds the selected locale and mirrors every change to `S`.
pub struct LocaleStore<S: KeyValueStore> {
    table: Arc<TranslationTable>,
    storage: S,
    locale: String,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> LocaleStore<S> {
    /// Creates the store, reading the persisted locale from `storage`.
    ///
    /// An absent or empty value falls back to `"en"`.
    pub fn new(table: Arc<TranslationTable>, storage: S) -> Self {
        let locale = match storage.get(LOCALE_KEY) {
            Some(saved) if !saved.is_empty() => {
                tracing::debug!(locale = %saved, "Restored persisted locale");
                saved
            }
            _ => {
                tracing::debug!(locale = DEFAULT_LOCALE, "No persisted locale, using default");
                DEFAULT_LOCALE.to_string()
            }
        };

        Self {
            table,
            storage,
            locale,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolves a dotted key under the current locale.
    ///
    /// Unresolvable keys come back unchanged so they stay visible in the UI.
    pub fn lookup(&self, key: &str) -> String {
        self.table.lookup(&self.locale, key)
    }

    /// Switches to `locale` and persists it.
    ///
    /// Any string is accepted. The value is written to the backend on every
    /// call; subscribers run synchronously only when the locale actually
    /// changes. A failed write is logged and otherwise ignored.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();

        if let Err(error) = self.storage.set(LOCALE_KEY, &locale) {
            tracing::warn!(locale = %locale, "Failed to persist locale: {error}");
        }

        if locale == self.locale {
            return;
        }

        let previous = std::mem::replace(&mut self.locale, locale);
        tracing::debug!(from = %previous, to = %self.locale, "Locale changed");

        let change = LocaleChange {
            previous,
            current: self.locale.clone(),
        };
        for (_, callback) in &mut self.subscribers {
            callback(&change);
        }
    }

    /// Flips between `"en"` and `"ar"`.
    ///
    /// Only `"en"` moves to `"ar"`; every other locale, including ones the
    /// table does not know, moves to `"en"`.
    pub fn toggle_locale(&mut self) {
        let next = if self.locale == DEFAULT_LOCALE {
            ALTERNATE_LOCALE
        } else {
            DEFAULT_LOCALE
        };
        self.set_locale(next);
    }

    /// Registers `callback` to run after each locale change.
    ///
    /// Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LocaleChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for LocaleStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("locale", &self.locale)
            .field("storage", &self.storage)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryStore;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn greeting_table() -> Arc<TranslationTable> {
        Arc::new(
            TranslationTable::from_value(json!({
                "en": { "greeting": { "hello": "Hi" } },
                "ar": { "greeting": { "hello": "مرحبا" } }
            }))
            .unwrap(),
        )
    }

    fn new_store() -> LocaleStore<MemoryStore> {
        LocaleStore::new(greeting_table(), MemoryStore::new())
    }

    /// Backend whose writes always fail.
    #[derive(Debug, Default)]
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io("read-only".to_string()))
        }
    }

    #[test]
    fn initializes_to_default_when_nothing_persisted() {
        assert_eq!(new_store().locale(), "en");
    }

    #[test]
    fn restores_default_for_empty_persisted_value() {
        let store = LocaleStore::new(greeting_table(), MemoryStore::with_entry("locale", ""));
        assert_eq!(store.locale(), "en");
        assert_eq!(store.lookup("greeting.hello"), "Hi");
    }

    #[test]
    fn initializes_from_persisted_value() {
        let store = LocaleStore::new(greeting_table(), MemoryStore::with_entry("locale", "ar"));
        assert_eq!(store.locale(), "ar");
        assert_eq!(store.lookup("greeting.hello"), "مرحبا");
    }

    #[test]
    fn initialization_does_not_write_backend() {
        let store = new_store();
        assert!(store.storage().is_empty());
    }

    #[test]
    fn greeting_scenario() {
        let mut store = new_store();
        assert_eq!(store.lookup("greeting.hello"), "Hi");

        store.set_locale("ar");
        assert_eq!(store.lookup("greeting.hello"), "مرحبا");
        assert_eq!(store.lookup("greeting.bye"), "greeting.bye");
    }

    #[test]
    fn set_locale_accepts_any_string() {
        let mut store = new_store();
        store.set_locale("xx-unknown");
        assert_eq!(store.locale(), "xx-unknown");
        assert_eq!(store.lookup("greeting.hello"), "greeting.hello");
    }

    #[test]
    fn set_locale_persists_value() {
        let mut store = new_store();
        store.set_locale("fr");
        assert_eq!(store.storage().get("locale"), Some("fr".to_string()));
    }

    #[test]
    fn set_same_locale_still_persists() {
        let mut store = new_store();
        store.set_locale("en");
        assert_eq!(store.storage().get("locale"), Some("en".to_string()));
    }

    #[test]
    fn toggle_from_en_goes_to_ar() {
        let mut store = new_store();
        store.toggle_locale();
        assert_eq!(store.locale(), "ar");
    }

    #[test]
    fn toggle_from_ar_goes_to_en() {
        let mut store = new_store();
        store.set_locale("ar");
        store.toggle_locale();
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn toggle_from_other_locale_goes_to_en() {
        for start in ["fr", "", "EN", "en-US"] {
            let mut store = new_store();
            store.set_locale(start);
            store.toggle_locale();
            assert_eq!(store.locale(), "en", "toggling from {start:?}");
        }
    }

    #[test]
    fn toggle_never_leaves_the_pair() {
        let mut store = new_store();
        store.set_locale("fr");
        let mut visited = Vec::new();
        for _ in 0..4 {
            store.toggle_locale();
            visited.push(store.locale().to_string());
        }
        assert_eq!(visited, vec!["en", "ar", "en", "ar"]);
    }

    #[test]
    fn subscribers_see_changes_in_order() {
        let mut store = new_store();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |change| first.borrow_mut().push(format!("1:{}", change.current)));
        let second = Rc::clone(&seen);
        store.subscribe(move |change| second.borrow_mut().push(format!("2:{}", change.current)));

        store.set_locale("ar");
        assert_eq!(*seen.borrow(), vec!["1:ar".to_string(), "2:ar".to_string()]);
    }

    #[test]
    fn subscriber_receives_previous_and_current() {
        let mut store = new_store();
        let last = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        store.subscribe(move |change| *sink.borrow_mut() = Some(change.clone()));

        store.toggle_locale();
        assert_eq!(
            *last.borrow(),
            Some(LocaleChange {
                previous: "en".to_string(),
                current: "ar".to_string(),
            })
        );
    }

    #[test]
    fn setting_same_locale_does_not_notify() {
        let mut store = new_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_locale("en");
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = new_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.toggle_locale();
        assert!(store.unsubscribe(id));
        store.toggle_locale();

        assert_eq!(*count.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn failed_persistence_still_changes_locale() {
        let mut store = LocaleStore::new(greeting_table(), FailingStore);
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_locale("ar");
        assert_eq!(store.locale(), "ar");
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn boxed_backend_is_accepted() {
        let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::with_entry("locale", "ar"));
        let mut store = LocaleStore::new(greeting_table(), backend);
        assert_eq!(store.locale(), "ar");
        store.toggle_locale();
        assert_eq!(store.storage().get("locale"), Some("en".to_string()));
    }

    #[test]
    fn debug_output_names_locale() {
        let store = new_store();
        assert!(format!("{store:?}").contains("\"en\""));
    }
}
