//! Applies view models to the document.
//!
//! Rendering is idempotent: the same view model always produces the same
//! element state, and nothing is created or removed. Page variants are
//! mounted separately through the outlet (see [`markup`](super::markup)).
//!
//! # Architecture
//!
//! ```text
//! SiteState → compute_viewmodel → SiteViewModel → render_viewmodel → Document
//! ```
//!
//! The shell operations [`set_active_route`], [`update_content`] and
//! [`set_language`] are also usable on their own.
//!
//! # Example
//!
//! ```
//! use avsite::app::SiteState;
//! use avsite::domain::{LanguageCode, Page};
//! use avsite::ui::dom::{ElementId, MemoryDocument};
//! use avsite::ui::render;
//! use avsite::Config;
//!
//! let mut state = SiteState::new(Config::default(), Page::Home, LanguageCode::En);
//! state.drawer = state.drawer.apply(avsite::app::DrawerEvent::ToggleClick);
//!
//! let mut document = MemoryDocument::with_shell();
//! render(&state, &mut document);
//! assert_eq!(document.attribute(ElementId::Toggle, "aria-expanded"), Some("true"));
//! assert!(document.has_class(ElementId::Body, "no-scroll"));
//! ```

use crate::app::SiteState;
use crate::content::LocalizedContent;
use crate::domain::{LanguageCode, Route};
use crate::ui::dom::{Document, ElementId};
use crate::ui::glow::GlowOffset;
use crate::ui::viewmodel::{FormViewModel, ShellViewModel, SiteViewModel};

pub const SIDEBAR_OPEN_CLASS: &str = "site--sidebar-open";
pub const NO_SCROLL_CLASS: &str = "no-scroll";
pub const DRAGGING_CLASS: &str = "header-scroll--dragging";
pub const TRANSITION_CLASS: &str = "site--transitioning";
pub const ACTIVE_LINK_CLASS: &str = "sidebar__nav-link--active";

/// Renders `state` into `document`.
pub fn render(state: &SiteState, document: &mut dyn Document) {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, document);
}

/// Renders a pre-computed view model.
pub fn render_viewmodel(vm: &SiteViewModel, document: &mut dyn Document) {
    let _span = tracing::debug_span!("render").entered();

    render_shell(&vm.shell, document);
    render_form(&vm.form, document);
    render_glow(vm.glow, document);
    if let Some(countdown) = &vm.countdown {
        document.set_text(ElementId::Countdown, countdown);
    }
}

fn render_shell(shell: &ShellViewModel, document: &mut dyn Document) {
    render_drawer(shell.drawer_open, document);

    document.toggle_class(ElementId::Toggle, DRAGGING_CLASS, shell.dragging);
    let (x, y) = shell.drag_offset;
    document.set_style(ElementId::Toggle, "--drag-offset-x", &format!("{x}px"));
    document.set_style(ElementId::Toggle, "--drag-offset-y", &format!("{y}px"));

    document.toggle_class(ElementId::Site, TRANSITION_CLASS, shell.transitioning);

    set_active_route(shell.active_route, document);
    update_content(shell.content, document);
    set_language(shell.picker_language, document);
}

/// Applies the drawer state. Requires the site root, the drawer and the
/// toggle; with any of them missing nothing is changed.
pub fn render_drawer(open: bool, document: &mut dyn Document) {
    if ![ElementId::Site, ElementId::Sidebar, ElementId::Toggle]
        .into_iter()
        .all(|id| document.contains(id))
    {
        return;
    }

    document.toggle_class(ElementId::Site, SIDEBAR_OPEN_CLASS, open);
    document.set_attribute(ElementId::Sidebar, "aria-hidden", if open { "false" } else { "true" });
    document.set_attribute(ElementId::Toggle, "aria-expanded", if open { "true" } else { "false" });
    document.toggle_class(ElementId::Body, NO_SCROLL_CLASS, open);
}

/// Marks the link for `route` as current and clears every other link.
pub fn set_active_route(route: Route, document: &mut dyn Document) {
    for candidate in Route::ALL {
        let link = ElementId::NavLink(candidate);
        let active = candidate == route;
        document.toggle_class(link, ACTIVE_LINK_CLASS, active);
        if active {
            document.set_attribute(link, "aria-current", "page");
        } else {
            document.remove_attribute(link, "aria-current");
        }
    }
}

/// Re-applies localized strings and accessible names to the shell in place.
pub fn update_content(content: &LocalizedContent, document: &mut dyn Document) {
    document.set_attribute(ElementId::Nav, "aria-label", content.aria.nav);
    document.set_attribute(ElementId::Overlay, "aria-label", content.aria.close_navigation);
    document.set_attribute(ElementId::Toggle, "aria-label", content.aria.header_button);
    document.set_text(ElementId::NavLink(Route::Home), content.navigation.home);
    document.set_text(ElementId::NavLink(Route::Contact), content.navigation.contact);
    document.set_text(ElementId::LanguageLabel, content.language.label);
    document.set_attribute(ElementId::LanguagePicker, "aria-label", content.language.label);
    for code in LanguageCode::ALL {
        document.set_text(ElementId::LanguageOption(code), code.flag());
    }
}

/// Selects `code` in the language picker.
pub fn set_language(code: LanguageCode, document: &mut dyn Document) {
    document.set_value(ElementId::LanguagePicker, code.code());
}

fn render_form(form: &FormViewModel, document: &mut dyn Document) {
    document.set_disabled(ElementId::SubmitButton, form.submit_disabled);
    document.set_text(ElementId::SubmitButton, form.submit_label);
    document.set_text(ElementId::Status, &form.status.text);
    document.set_attribute(ElementId::Status, "data-state", form.status.state.as_str());
}

fn render_glow(glow: GlowOffset, document: &mut dyn Document) {
    document.set_style(ElementId::GlowPanel, "--glow-x", &format!("{}px", glow.x));
    document.set_style(ElementId::GlowPanel, "--glow-y", &format!("{}px", glow.y));
}
