//! View model types representing renderable page state.
//!
//! View models are computed from [`SiteState`](crate::app::SiteState) by
//! `compute_viewmodel` and consumed by the renderer. They carry no logic,
//! only display-ready values, so rendering the same view model twice yields
//! the same document.
//!
//! # Example
//!
//! ```
//! use avsite::app::SiteState;
//! use avsite::domain::{LanguageCode, Page, Route};
//! use avsite::Config;
//!
//! let state = SiteState::new(Config::default(), Page::Contact, LanguageCode::Nl);
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.shell.active_route, Route::Contact);
//! assert_eq!(vm.form.submit_label, "Verstuur bericht");
//! ```

use crate::app::submission::StatusMessage;
use crate::content::LocalizedContent;
use crate::domain::{LanguageCode, Route};
use crate::ui::glow::GlowOffset;

/// Complete view model for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteViewModel {
    /// Persistent navigation shell.
    pub shell: ShellViewModel,

    /// Contact form controls. Ignored by documents without a form.
    pub form: FormViewModel,

    /// Glow offset of the mounted panel.
    pub glow: GlowOffset,

    /// Text of the confirmation countdown, on the confirmation page only.
    pub countdown: Option<String>,
}

/// Drawer, header and language picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellViewModel {
    pub drawer_open: bool,

    /// Drag marker on the handle.
    pub dragging: bool,

    /// Handle translation as `(x, y)` in pixels.
    pub drag_offset: (f64, f64),

    /// Transient header transition marker.
    pub transitioning: bool,

    /// Link marked as the current page.
    pub active_route: Route,

    /// Value selected in the language picker.
    pub picker_language: LanguageCode,

    /// Strings applied to the shell in place.
    pub content: &'static LocalizedContent,
}

/// Submit control and status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub status: StatusMessage,
}
