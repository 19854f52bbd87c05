//! In-process preference stores.

use crate::domain::error::{Result, SiteError};
use crate::storage::backend::PreferenceStore;
use std::collections::HashMap;

/// Preference store kept in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates a store holding one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store for contexts without persistence; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(SiteError::Storage("preference storage is unavailable".to_string()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(SiteError::Storage("preference storage is unavailable".to_string()))
    }
}
