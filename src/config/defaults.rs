// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for locale selection and persistence.
//!
//! This module is the single source of truth for the fixed identifiers the
//! store relies on. Constants are organized by category.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when the persistence backend holds no value.
pub const DEFAULT_LOCALE: &str = "en";

/// The other side of the two-locale toggle.
pub const ALTERNATE_LOCALE: &str = "ar";

// ==========================================================================
// Persistence Defaults
// ==========================================================================

/// Key under which the selected locale is stored in the backend.
pub const LOCALE_KEY: &str = "locale";

/// Settings file name within the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Application name used for directory naming.
pub const APP_NAME: &str = "LocaleStore";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(!ALTERNATE_LOCALE.is_empty());
    assert!(!LOCALE_KEY.is_empty());
    assert!(!SETTINGS_FILE.is_empty());
};
