//! Site configuration.
//!
//! Configuration comes from an optional TOML file and a flat key/value map
//! (process environment or build-time variables). Every field has a default, so
//! an empty file and an empty map are both valid.
//!
//! # TOML Format
//!
//! ```toml
//! base_path = "/"
//! desktop_breakpoint = 900.0
//! trace_level = "debug"
//!
//! [relay]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//! endpoint = "https://api.emailjs.com"
//!
//! [gesture]
//! noise_floor = 6.0
//! open_threshold = 90.0
//! max_horizontal = 150.0
//! max_vertical = 45.0
//!
//! [timing]
//! click_suppression_ms = 300
//! header_transition_ms = 320
//! redirect_delay_ms = 600
//! confirmation_countdown_secs = 5
//! ```

use crate::app::gesture::GestureConfig;
use crate::domain::error::{Result, SiteError};
use crate::infrastructure::BasePath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default EmailJS API origin.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com";

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path prefix the documents are served under. Normalized to end in `/`.
    pub base_path: String,

    /// Mail relay credentials.
    pub relay: RelayConfig,

    /// Drawer drag thresholds, in logical pixels.
    pub gesture: GestureConfig,

    /// Timer durations.
    pub timing: TimingConfig,

    /// Minimum viewport width for the header transition effect.
    pub desktop_breakpoint: f64,

    /// Preference file used by the command-line tooling.
    pub storage_path: Option<PathBuf>,

    /// Tracing filter directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            relay: RelayConfig::default(),
            gesture: GestureConfig::default(),
            timing: TimingConfig::default(),
            desktop_breakpoint: 900.0,
            storage_path: None,
            trace_level: None,
        }
    }
}

/// EmailJS credentials and endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

impl RelayConfig {
    /// True only when service id, template id and public key are all set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// Timer durations used by the layout and the contact pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub click_suppression_ms: u64,
    pub header_transition_ms: u64,
    pub redirect_delay_ms: u64,
    pub confirmation_countdown_secs: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_suppression_ms: 300,
            header_transition_ms: 320,
            redirect_delay_ms: 600,
            confirmation_countdown_secs: 5,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub const fn click_suppression(&self) -> Duration {
        Duration::from_millis(self.click_suppression_ms)
    }

    #[must_use]
    pub const fn header_transition(&self) -> Duration {
        Duration::from_millis(self.header_transition_ms)
    }

    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Config {
    /// Parses a TOML document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the document is not valid TOML or a
    /// field has the wrong type.
    ///
    /// ```
    /// use avsite::Config;
    ///
    /// let config = Config::from_toml_str("base_path = \"/site\"\n[timing]\nredirect_delay_ms = 900")?;
    /// assert_eq!(config.base_path().as_str(), "/site/");
    /// assert_eq!(config.timing.redirect_delay_ms, 900);
    /// assert_eq!(config.timing.click_suppression_ms, 300);
    /// # Ok::<(), avsite::SiteError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| SiteError::Config(format!("invalid configuration: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading configuration file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Builds a configuration from flat key/value pairs on top of the defaults.
    ///
    /// See [`apply_overrides`](Self::apply_overrides) for the recognized keys.
    #[must_use]
    pub fn from_map(values: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.apply_overrides(values);
        config
    }

    /// Overlays flat key/value pairs onto this configuration.
    ///
    /// # Recognized Keys
    ///
    /// - `BASE_URL`: base path
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`: relay credentials
    /// - `EMAILJS_ENDPOINT`: relay origin
    /// - `AVSITE_STORAGE_PATH`: preference file
    /// - `TRACE_LEVEL`: tracing filter
    /// - `DESKTOP_BREAKPOINT`: number, ignored when it does not parse
    pub fn apply_overrides(&mut self, values: &BTreeMap<String, String>) {
        let get = |key: &str| {
            values
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        if let Some(base) = get("BASE_URL") {
            self.base_path = base;
        }
        if let Some(service_id) = get("EMAILJS_SERVICE_ID") {
            self.relay.service_id = service_id;
        }
        if let Some(template_id) = get("EMAILJS_TEMPLATE_ID") {
            self.relay.template_id = template_id;
        }
        if let Some(public_key) = get("EMAILJS_PUBLIC_KEY") {
            self.relay.public_key = public_key;
        }
        if let Some(endpoint) = get("EMAILJS_ENDPOINT") {
            self.relay.endpoint = endpoint;
        }
        if let Some(path) = get("AVSITE_STORAGE_PATH") {
            self.storage_path = Some(PathBuf::from(path));
        }
        if let Some(level) = get("TRACE_LEVEL") {
            self.trace_level = Some(level);
        }
        if let Some(breakpoint) = get("DESKTOP_BREAKPOINT").and_then(|v| v.parse::<f64>().ok()) {
            self.desktop_breakpoint = breakpoint;
        }
    }

    /// Collects the recognized keys from the process environment.
    #[must_use]
    pub fn env_overrides() -> BTreeMap<String, String> {
        const KEYS: [&str; 8] = [
            "BASE_URL",
            "EMAILJS_SERVICE_ID",
            "EMAILJS_TEMPLATE_ID",
            "EMAILJS_PUBLIC_KEY",
            "EMAILJS_ENDPOINT",
            "AVSITE_STORAGE_PATH",
            "TRACE_LEVEL",
            "DESKTOP_BREAKPOINT",
        ];
        KEYS.iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| ((*key).to_string(), value)))
            .collect()
    }

    /// Keys that are safe to publish in the rendered documents, with their
    /// current values. Empty values are left out.
    ///
    /// ```
    /// use avsite::Config;
    ///
    /// let mut config = Config::default();
    /// config.relay.public_key = "pk_123".into();
    /// let published = config.published_values();
    /// assert_eq!(published.get("EMAILJS_PUBLIC_KEY").map(String::as_str), Some("pk_123"));
    /// assert!(!published.contains_key("EMAILJS_SERVICE_ID"));
    /// assert!(!published.contains_key("AVSITE_STORAGE_PATH"));
    /// ```
    #[must_use]
    pub fn published_values(&self) -> BTreeMap<String, String> {
        let breakpoint = self.desktop_breakpoint.to_string();
        [
            ("BASE_URL", self.base_path.as_str()),
            ("EMAILJS_SERVICE_ID", self.relay.service_id.as_str()),
            ("EMAILJS_TEMPLATE_ID", self.relay.template_id.as_str()),
            ("EMAILJS_PUBLIC_KEY", self.relay.public_key.as_str()),
            ("EMAILJS_ENDPOINT", self.relay.endpoint.as_str()),
            ("DESKTOP_BREAKPOINT", breakpoint.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
    }

    /// Normalized base path.
    #[must_use]
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.base_path)
    }
}
