//! Supported site languages.
//!
//! Exactly one [`LanguageCode`] is active per page instance. Parsing is strict
//! (`"en"`, `"nl"`), while browser locales are matched on their primary subtag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag for one of the two supported content variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English.
    En,
    /// Dutch.
    Nl,
}

impl LanguageCode {
    /// Every supported language, in picker order.
    pub const ALL: [Self; 2] = [Self::En, Self::Nl];

    /// Language used when neither a stored preference nor a browser locale matches.
    pub const DEFAULT: Self = Self::En;

    /// Returns the two-letter code stored in preferences and picker values.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    /// Returns the flag shown as the picker option label.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Nl => "🇳🇱",
        }
    }

    /// Parses an exact language code.
    ///
    /// ```
    /// use avsite::domain::LanguageCode;
    ///
    /// assert_eq!(LanguageCode::parse("en"), Some(LanguageCode::En));
    /// assert_eq!(LanguageCode::parse("EN"), None);
    /// assert_eq!(LanguageCode::parse("de"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.code() == value)
    }

    /// Matches a browser-reported locale such as `nl-BE` or `en_GB` by its
    /// primary subtag, ignoring case.
    ///
    /// ```
    /// use avsite::domain::LanguageCode;
    ///
    /// assert_eq!(LanguageCode::from_locale("nl-BE"), Some(LanguageCode::Nl));
    /// assert_eq!(LanguageCode::from_locale("EN_gb"), Some(LanguageCode::En));
    /// assert_eq!(LanguageCode::from_locale("fr-FR"), None);
    /// ```
    #[must_use]
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&primary)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
