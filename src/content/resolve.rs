//! Initial language resolution and preference persistence.
//!
//! Resolution order: a valid stored preference, then the first browser locale
//! whose primary subtag is supported, then [`LanguageCode::DEFAULT`]. Storage
//! failures never surface; they degrade to the next source.

use crate::domain::LanguageCode;
use crate::storage::PreferenceStore;

/// Key the language preference is stored under.
pub const LANGUAGE_STORAGE_KEY: &str = "av-site-language";

/// Membership test against the supported language codes.
///
/// ```
/// use avsite::content::is_language_code;
///
/// assert!(is_language_code("nl"));
/// assert!(!is_language_code("nl-NL"));
/// ```
#[must_use]
pub fn is_language_code(value: &str) -> bool {
    LanguageCode::parse(value).is_some()
}

/// Resolves the language a page starts in.
///
/// Reads the store but never writes to it.
///
/// ```
/// use avsite::content::{resolve_initial_language, LANGUAGE_STORAGE_KEY};
/// use avsite::domain::LanguageCode;
/// use avsite::storage::MemoryPreferenceStore;
///
/// let store = MemoryPreferenceStore::with_value(LANGUAGE_STORAGE_KEY, "en");
/// assert_eq!(resolve_initial_language(&store, &["nl-NL"]), LanguageCode::En);
/// ```
pub fn resolve_initial_language<L: AsRef<str>>(
    store: &dyn PreferenceStore,
    browser_locales: &[L],
) -> LanguageCode {
    match store.read(LANGUAGE_STORAGE_KEY) {
        Ok(Some(stored)) => {
            if let Some(code) = LanguageCode::parse(&stored) {
                tracing::debug!(language = %code, "using stored language preference");
                return code;
            }
            tracing::debug!(stored = %stored, "ignoring unrecognized stored language");
        }
        Ok(None) => {}
        Err(e) => tracing::debug!(error = %e, "language preference unreadable"),
    }

    if let Some(code) = browser_locales
        .iter()
        .find_map(|locale| LanguageCode::from_locale(locale.as_ref()))
    {
        tracing::debug!(language = %code, "matched browser locale");
        return code;
    }

    tracing::debug!(language = %LanguageCode::DEFAULT, "falling back to default language");
    LanguageCode::DEFAULT
}

/// Persists the language choice. Failures are logged and otherwise ignored.
pub fn store_language_preference(store: &mut dyn PreferenceStore, code: LanguageCode) {
    if let Err(e) = store.write(LANGUAGE_STORAGE_KEY, code.code()) {
        tracing::warn!(error = %e, language = %code, "could not persist language preference");
    }
}
