//! Preference storage abstraction.
//!
//! The trait is deliberately tiny: one key, one string value. Callers in the
//! content store swallow its errors, so implementations are free to fail.

use crate::domain::error::Result;

/// Key/value storage for user preferences.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): process memory
/// - [`UnavailableStore`](crate::storage::UnavailableStore): every call fails
/// - `LocalStorageStore` (`web` feature): the browser's `localStorage`
///
/// # Examples
///
/// ```
/// use avsite::storage::{MemoryPreferenceStore, PreferenceStore};
///
/// let mut store = MemoryPreferenceStore::default();
/// store.write("av-site-language", "nl")?;
/// assert_eq!(store.read("av-site-language")?.as_deref(), Some("nl"));
/// # Ok::<(), avsite::SiteError>(())
/// ```
pub trait PreferenceStore {
    /// Reads a stored value. `Ok(None)` when nothing was stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
