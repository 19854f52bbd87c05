//! Base path handling and page URLs.

use crate::domain::{Page, Route};
use std::path::PathBuf;

/// Path prefix every document and asset is served under. Always ends in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Normalizes a raw base such as `""`, `"/site"` or `"/site/"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avsite::infrastructure::BasePath;
    ///
    /// assert_eq!(BasePath::new("").as_str(), "/");
    /// assert_eq!(BasePath::new("/site").as_str(), "/site/");
    /// assert_eq!(BasePath::new("/site/").as_str(), "/site/");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.ends_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("{trimmed}/"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of a static document. The landing document is the base itself.
    ///
    /// ```
    /// use avsite::domain::Page;
    /// use avsite::infrastructure::BasePath;
    ///
    /// let base = BasePath::new("/site");
    /// assert_eq!(base.page_url(Page::Home), "/site/");
    /// assert_eq!(base.page_url(Page::Confirmation), "/site/contact-success.html");
    /// ```
    #[must_use]
    pub fn page_url(&self, page: Page) -> String {
        match page {
            Page::Home => self.0.clone(),
            other => format!("{}{}", self.0, other.file_name()),
        }
    }

    /// `href` of a drawer link. Home points at the in-page anchor.
    #[must_use]
    pub fn nav_href(&self, route: Route) -> String {
        match route {
            Route::Home => format!("{}#home", self.0),
            Route::Contact => self.page_url(Page::Contact),
        }
    }

    /// URL pushed onto the history stack when routing in place.
    #[must_use]
    pub fn history_url(&self, route: Route) -> String {
        match route {
            Route::Home => self.page_url(Page::Home),
            Route::Contact => self.page_url(Page::Contact),
        }
    }

    /// URL of a static asset, given relative to the site root.
    #[must_use]
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

/// Default location of the command-line preference file.
///
/// Uses `$XDG_DATA_HOME/avsite`, then `$HOME/.local/share/avsite`, then a
/// relative `.avsite` directory.
#[must_use]
pub fn default_storage_path() -> PathBuf {
    let data_dir = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share")))
        .map_or_else(|| PathBuf::from(".avsite"), |dir| dir.join("avsite"));
    data_dir.join("preferences.json")
}
