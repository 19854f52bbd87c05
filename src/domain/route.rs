//! Navigation routes and static pages.
//!
//! A [`Route`] is what the drawer navigation can point at; a [`Page`] is one of
//! the three static documents the site ships. The confirmation page has no
//! navigation of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation target shown in the drawer. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Landing page with the hero content.
    Home,
    /// Contact page with the enquiry form.
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 2] = [Self::Home, Self::Contact];

    /// Value of the link's `data-route` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Contact => "contact",
        }
    }

    /// Parses a `data-route` attribute value.
    #[must_use]
    pub fn from_data_route(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.as_str() == value)
    }

    /// Derives the initial route from a location pathname.
    ///
    /// ```
    /// use avsite::domain::Route;
    ///
    /// assert_eq!(Route::from_path("/site/contact.html"), Route::Contact);
    /// assert_eq!(Route::from_path("/site/"), Route::Home);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.ends_with("contact.html") {
            Self::Contact
        } else {
            Self::Home
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the static documents the site is served as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// `index.html`: landing document with in-page routing to the contact view.
    Home,
    /// `contact.html`: contact document, links navigate between documents.
    Contact,
    /// `contact-success.html`: confirmation with a redirect countdown.
    Confirmation,
}

impl Page {
    /// Every page, in build order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Contact, Self::Confirmation];

    /// File name of the document relative to the base path.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Contact => "contact.html",
            Self::Confirmation => "contact-success.html",
        }
    }

    /// Route whose content the document mounts first.
    #[must_use]
    pub const fn initial_route(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Contact | Self::Confirmation => Route::Contact,
        }
    }

    /// Whether nav-link clicks are handled in place instead of loading another document.
    #[must_use]
    pub const fn routes_in_place(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Whether the document has the shell and a page outlet.
    #[must_use]
    pub const fn has_shell(self) -> bool {
        !matches!(self, Self::Confirmation)
    }
}
