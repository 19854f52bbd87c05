//! Site state and view model computation.
//!
//! [`SiteState`] is the single source of truth for one page instance: the
//! mounted route, the active language and its content record, the drawer and
//! drag recognizer, the submission lifecycle and the confirmation countdown.
//! Nothing in it is global; a fresh state is built per document load.
//!
//! # State Components
//!
//! - **Route**: page variant mounted in the outlet, and the route marked active in the drawer
//! - **Language**: active language, its content record and the picker's selected value
//! - **Layout**: drawer, drag gesture, click suppression flag, header transition marker
//! - **Contact**: submission lifecycle and status line
//! - **Confirmation**: countdown before returning to the contact form
//!
//! Operations that need timers or page effects return the [`Action`]s to run
//! instead of performing them.
//!
//! # Example
//!
//! ```
//! use avsite::app::SiteState;
//! use avsite::domain::{LanguageCode, Page, Route};
//! use avsite::Config;
//!
//! let mut state = SiteState::new(Config::default(), Page::Home, LanguageCode::En);
//! state.viewport_width = 1280.0;
//! let actions = state.navigate_to_route(Route::Contact, true, false);
//! assert!(state.header_transitioning);
//! assert_eq!(state.route, Route::Contact);
//! assert_eq!(actions.len(), 3);
//! ```

use super::countdown::Countdown;
use super::drawer::{DrawerEvent, DrawerState};
use super::gesture::DragState;
use super::submission::{StatusMessage, SubmissionState};
use super::Action;
use crate::config::Config;
use crate::content::{localized_content, LocalizedContent};
use crate::domain::{LanguageCode, Page, Route};
use crate::infrastructure::BasePath;
use crate::scheduler::TimerSlot;
use crate::ui::glow::GlowOffset;
use crate::ui::viewmodel::{FormViewModel, ShellViewModel, SiteViewModel};
use std::time::Duration;

/// Interval of the confirmation countdown.
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// State of one page instance.
#[derive(Debug, Clone)]
pub struct SiteState {
    /// Configuration the page was started with.
    pub config: Config,

    /// Normalized base path, derived from `config`.
    pub base: BasePath,

    /// Document this state belongs to.
    pub page: Page,

    /// Page variant currently mounted in the outlet.
    pub route: Route,

    /// Route the document was loaded at. History entries without a route
    /// (the entry the document was loaded into) return here.
    pub boot_route: Route,

    /// Route marked current in the drawer.
    ///
    /// Usually equal to `route`, but can be set independently through
    /// `set_active_route`.
    pub active_route: Route,

    /// Active language.
    pub language: LanguageCode,

    /// Value shown in the language picker.
    pub picker_language: LanguageCode,

    /// Content record of the active language.
    pub content: &'static LocalizedContent,

    pub drawer: DrawerState,

    pub drag: DragState,

    /// Set after a drag that moved; swallows the next toggle click.
    pub suppress_next_click: bool,

    /// Whether the header transition marker is present.
    pub header_transitioning: bool,

    /// Viewport width in logical pixels. Updated on resize.
    pub viewport_width: f64,

    pub submission: SubmissionState,

    /// Status line below the contact form.
    pub status: StatusMessage,

    /// Countdown, on the confirmation page only.
    pub countdown: Option<Countdown>,

    /// Glow offset of the mounted panel.
    pub glow: GlowOffset,
}

impl SiteState {
    /// Creates the state for a freshly loaded document.
    ///
    /// The viewport starts at zero width (narrow) until the first resize.
    #[must_use]
    pub fn new(config: Config, page: Page, language: LanguageCode) -> Self {
        let route = page.initial_route();
        let countdown = matches!(page, Page::Confirmation)
            .then(|| Countdown::new(config.timing.confirmation_countdown_secs));
        Self {
            base: config.base_path(),
            config,
            page,
            route,
            boot_route: route,
            active_route: route,
            language,
            picker_language: language,
            content: localized_content(language),
            drawer: DrawerState::Closed,
            drag: DragState::Idle,
            suppress_next_click: false,
            header_transitioning: false,
            viewport_width: 0.0,
            submission: SubmissionState::Idle,
            status: StatusMessage::default(),
            countdown,
            glow: GlowOffset::default(),
        }
    }

    /// Overrides the initially mounted route, e.g. when the landing document
    /// was loaded under the contact URL.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self.boot_route = route;
        self.active_route = route;
        self
    }

    /// Starts the landing document on the route named by the location
    /// `pathname`. Other documents always start on their own route.
    ///
    /// ```
    /// use avsite::app::SiteState;
    /// use avsite::domain::{LanguageCode, Page, Route};
    /// use avsite::Config;
    ///
    /// let state = SiteState::new(Config::default(), Page::Home, LanguageCode::En).at_path("/contact.html");
    /// assert_eq!(state.route, Route::Contact);
    ///
    /// let state = SiteState::new(Config::default(), Page::Contact, LanguageCode::En).at_path("/");
    /// assert_eq!(state.route, Route::Contact);
    /// ```
    #[must_use]
    pub fn at_path(self, pathname: &str) -> Self {
        if !self.page.routes_in_place() {
            return self;
        }
        let route = Route::from_path(pathname);
        self.with_route(route)
    }

    /// Actions that bring a freshly loaded document up: mount the first page
    /// variant, or start the confirmation countdown.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        if self.page.has_shell() {
            vec![Action::MountPage(self.route)]
        } else if self.countdown.is_some_and(|countdown| !countdown.is_finished()) {
            vec![Action::ArmTimer {
                slot: TimerSlot::CountdownTick,
                delay: COUNTDOWN_INTERVAL,
            }]
        } else {
            vec![Action::Navigate(self.base.page_url(Page::Contact))]
        }
    }

    /// Applies a drawer transition.
    pub fn apply_drawer(&mut self, event: DrawerEvent) {
        let next = self.drawer.apply(event);
        if next != self.drawer {
            tracing::debug!(?event, open = next.is_open(), "drawer transition");
        }
        self.drawer = next;
    }

    /// Whether the viewport is at least as wide as the desktop breakpoint.
    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.viewport_width >= self.config.desktop_breakpoint
    }

    /// Adds the header transition marker on wide viewports.
    ///
    /// Re-triggering before the window elapses re-arms the removal timer
    /// instead of stacking a second one. Below the breakpoint this is a no-op.
    #[must_use]
    pub fn trigger_header_transition(&mut self) -> Vec<Action> {
        if !self.is_desktop() {
            return vec![];
        }
        self.header_transitioning = true;
        vec![Action::ArmTimer {
            slot: TimerSlot::HeaderTransition,
            delay: self.config.timing.header_transition(),
        }]
    }

    /// Routes the landing document to `route` without loading another document.
    ///
    /// When `route` is already mounted and `force` is false, only the active
    /// link is updated. Otherwise the header transition is triggered, the page
    /// is re-mounted and, if `push` is set, a history entry is added.
    #[must_use]
    pub fn navigate_to_route(&mut self, route: Route, push: bool, force: bool) -> Vec<Action> {
        if !force && route == self.route {
            self.active_route = route;
            return vec![];
        }

        tracing::debug!(from = %self.route, to = %route, push, "routing in place");
        self.route = route;
        let mut actions = self.trigger_header_transition();
        actions.extend(self.mount_current());
        self.active_route = route;

        if push {
            actions.push(Action::PushHistory {
                route,
                url: self.base.history_url(route),
            });
        }
        actions
    }

    /// Switches to `code`: persists it, swaps the content record, syncs the
    /// picker and re-mounts the current page variant in the new language.
    #[must_use]
    pub fn change_language(&mut self, code: LanguageCode) -> Vec<Action> {
        tracing::info!(from = %self.language, to = %code, "language changed");
        self.language = code;
        self.picker_language = code;
        self.content = localized_content(code);

        let mut actions = vec![Action::StorePreference(code)];
        if self.page.has_shell() {
            actions.extend(self.mount_current());
        }
        actions
    }

    /// Re-mounts the current route. A fresh mount starts with no glow and an
    /// empty status line.
    fn mount_current(&mut self) -> Vec<Action> {
        self.glow = GlowOffset::default();
        self.status = StatusMessage::default();
        vec![Action::MountPage(self.route)]
    }

    /// Computes the view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SiteViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", route = %self.route).entered();

        let form_text = &self.content.contact.form;
        SiteViewModel {
            shell: ShellViewModel {
                drawer_open: self.drawer.is_open(),
                dragging: self.drag.is_dragging(),
                drag_offset: self.drag.offsets(),
                transitioning: self.header_transitioning,
                active_route: self.active_route,
                picker_language: self.picker_language,
                content: self.content,
            },
            form: FormViewModel {
                submit_label: if self.submission.shows_sending_label() {
                    form_text.sending
                } else {
                    form_text.submit
                },
                submit_disabled: !self.submission.submit_enabled(),
                status: self.status.clone(),
            },
            glow: self.glow,
            countdown: self.countdown.map(|countdown| countdown.remaining().to_string()),
        }
    }
}
