//! `localStorage` preference store.

use crate::domain::error::{Result, SiteError};
use crate::storage::PreferenceStore;
use wasm_bindgen::JsValue;

/// Stores preferences as raw strings in the browser's `localStorage`.
///
/// Private browsing modes and disabled storage surface as
/// [`SiteError::Storage`] on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| SiteError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SiteError::Storage("localStorage is unavailable".to_string()))
    }
}

fn js_error(value: JsValue) -> SiteError {
    SiteError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}
