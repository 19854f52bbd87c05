//! avsite: the bilingual site of a one-person audio-visual installation business.
//!
//! The crate provides:
//! - A navigation drawer with a drag-to-open gesture on the header toggle
//! - English and Dutch content with a persisted language preference
//! - In-place routing between the landing and contact views
//! - A contact form relayed to the site owner through EmailJS
//! - A confirmation page that counts down back to the form
//! - Static HTML rendering of every document in every language

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (site.rs, web/, main.rs)                   │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Drawer, drag gesture, submission, countdown      │
//! │  - Event handling and action dispatching            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Relay Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (relay/)      │
//! │ - Rendering   │   │ - JSON file   │   │ - EmailJS     │
//! │ - Markup      │   │ - Memory      │   │ - Recording   │
//! │ - Document    │   │ - Backend API │   │   double      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Content, Domain, Scheduler & Infrastructure        │
//! │  - Localized content and language resolution        │
//! │  - Language, route and contact form types, errors   │
//! │  - Cancellable timer slots                          │
//! │  - Base path and page URLs                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: page state machines with an event/action model
//! - [`content`]: localized strings and initial language resolution
//! - [`domain`]: language, route and contact types, errors
//! - [`infrastructure`]: base path handling and data directory
//! - [`relay`]: mail relay boundary
//! - [`scheduler`]: cancellable delayed tasks
//! - [`site`]: runtime executing actions against a document
//! - [`storage`]: preference stores
//! - [`ui`]: view models, markup and rendering
//! - [`observability`]: tracing subscriber setup
//! - `web` (feature `web`): browser bindings
//!
//! # Configuration
//!
//! ```toml
//! base_path = "/"
//!
//! [relay]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//! ```
//!
//! Flat keys (`BASE_URL`, `EMAILJS_SERVICE_ID`, ...) from the environment
//! override the file. See [`Config`].
//!
//! # Example
//!
//! ```
//! use avsite::{handle_event, initialize, Config, Event};
//! use avsite::domain::{LanguageCode, Page};
//! use avsite::storage::MemoryPreferenceStore;
//!
//! let store = MemoryPreferenceStore::default();
//! let mut state = initialize(&Config::default(), Page::Home, &store, &["nl-BE"]);
//! assert_eq!(state.language, LanguageCode::Nl);
//!
//! for event in [Event::ToggleClick, Event::Key("Escape".into())] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(!state.drawer.is_open());
//! # Ok::<(), avsite::SiteError>(())
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod relay;
pub mod scheduler;
pub mod site;
pub mod storage;
pub mod ui;

#[cfg(feature = "web")]
pub mod web;

pub use app::{handle_event, Action, Event, SiteState};
pub use config::Config;
pub use domain::{LanguageCode, Page, Result, Route, SiteError};
pub use site::{Site, SiteServices};

use content::resolve_initial_language;
use storage::PreferenceStore;

/// Creates the state of a freshly loaded document.
///
/// Resolves the language from `store` and `browser_locales` (see
/// [`resolve_initial_language`]) and starts on the page's initial route.
///
/// # Parameters
///
/// * `config` - Site configuration
/// * `page` - Document being loaded
/// * `store` - Language preference storage, read only
/// * `browser_locales` - Browser locale list, most preferred first
#[must_use]
pub fn initialize<L: AsRef<str>>(
    config: &Config,
    page: Page,
    store: &dyn PreferenceStore,
    browser_locales: &[L],
) -> SiteState {
    let language = resolve_initial_language(store, browser_locales);
    tracing::debug!(?page, %language, "initializing page state");
    SiteState::new(config.clone(), page, language)
}
