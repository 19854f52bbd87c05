//! JSON file-based preference store.
//!
//! Used by the command-line tooling where no browser storage exists. Writes go
//! to a temporary file first and are renamed into place, so the file is never
//! left half-written.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "preferences": {
//!     "av-site-language": {
//!       "value": "nl",
//!       "updated_at": "2026-10-19T09:30:00Z"
//!     }
//!   }
//! }
//! ```

use crate::domain::error::{Result, SiteError};
use crate::storage::backend::PreferenceStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One stored preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the file format for future migrations.
    version: u32,

    #[serde(default)]
    preferences: BTreeMap<String, PreferenceRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The whole file is loaded on creation and rewritten on every change.
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonPreferenceStore {
    /// Opens a store, creating parent directories. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - The file cannot be read
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avsite::storage::JsonPreferenceStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::open(PathBuf::from("/tmp/avsite/preferences.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            StoreData::default()
        };

        Ok(Self { file_path, data })
    }

    /// Returns the full record for `key`, including when it was last written.
    #[must_use]
    pub fn record(&self, key: &str) -> Option<&PreferenceRecord> {
        self.data.preferences.get(key)
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| SiteError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            preferences = data.preferences.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SiteError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.preferences.get(key).map(|record| record.value.clone()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write_preference", key = %key, value = %value).entered();

        self.data.preferences.insert(
            key.to_string(),
            PreferenceRecord {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.save_to_file()
    }
}
