//! Site runtime: executes actions against the page and its collaborators.
//!
//! A [`Site`] owns one page instance: its [`SiteState`], the [`Document`] it
//! renders into, the [`Scheduler`] holding its timers, the preference store
//! and the mail relay. Page events go through [`Site::dispatch`], which runs
//! the event handler, executes the returned actions in order and re-renders.
//!
//! The relay call is the only asynchronous step. A dispatched submission
//! leaves a pending [`ContactRequest`]; [`Site::flush_relay`] sends it and
//! feeds the outcome back as an event. Browser glue that cannot hold the site
//! across an `.await` takes the request with [`Site::take_pending_request`]
//! and dispatches [`Event::RelayCompleted`] itself.
//!
//! # Example
//!
//! ```
//! use avsite::app::Event;
//! use avsite::domain::{LanguageCode, Page};
//! use avsite::relay::RecordingRelay;
//! use avsite::scheduler::ManualScheduler;
//! use avsite::site::{Site, SiteServices};
//! use avsite::storage::MemoryPreferenceStore;
//! use avsite::ui::dom::{ElementId, MemoryDocument};
//! use avsite::Config;
//! use std::sync::Arc;
//!
//! let services = SiteServices {
//!     store: Box::new(MemoryPreferenceStore::default()),
//!     relay: Arc::new(RecordingRelay::succeeding()),
//! };
//! let mut site = Site::boot(
//!     Config::default(),
//!     Page::Home,
//!     MemoryDocument::with_shell(),
//!     ManualScheduler::default(),
//!     services,
//!     &["nl-NL"],
//! );
//! assert_eq!(site.state().language, LanguageCode::Nl);
//!
//! site.dispatch(Event::ToggleClick);
//! assert!(site.document().has_class(ElementId::Site, "site--sidebar-open"));
//! ```

use crate::app::{handle_event, Action, DrawerState, Event, SiteState};
use crate::config::Config;
use crate::content::{store_language_preference, LocalizedContent};
use crate::domain::{ContactForm, LanguageCode, Page, Route};
use crate::relay::{ContactRelay, ContactRequest};
use crate::scheduler::{ManualScheduler, Scheduler, TimerSlot};
use crate::storage::PreferenceStore;
use crate::ui::dom::{Document, ElementId, FormControl};
use crate::ui::{markup, renderer};
use std::sync::Arc;
use std::time::Duration;

/// Collaborators a page instance talks to.
pub struct SiteServices {
    /// Language preference storage.
    pub store: Box<dyn PreferenceStore>,
    /// Mail relay for the contact form.
    pub relay: Arc<dyn ContactRelay>,
}

/// What the browser glue must do with the event that was dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Call `preventDefault()` on the DOM event.
    pub default_prevented: bool,
    /// Call `stopPropagation()` on the DOM event.
    pub propagation_stopped: bool,
    /// History entries pushed, as `(route, url)`.
    pub history: Vec<(Route, String)>,
    /// Document to navigate to.
    pub navigate_to: Option<String>,
}

/// One running page instance.
pub struct Site<D: Document, S: Scheduler> {
    state: SiteState,
    document: D,
    scheduler: S,
    store: Box<dyn PreferenceStore>,
    relay: Arc<dyn ContactRelay>,
    pending: Option<ContactRequest>,
    navigated_to: Option<String>,
}

impl<D: Document, S: Scheduler> Site<D, S> {
    /// Resolves the initial language, then starts the page.
    ///
    /// `browser_locales` is the browser's preferred locale list, most
    /// preferred first.
    pub fn boot<L: AsRef<str>>(
        config: Config,
        page: Page,
        document: D,
        scheduler: S,
        services: SiteServices,
        browser_locales: &[L],
    ) -> Self {
        let state = crate::initialize(&config, page, services.store.as_ref(), browser_locales);
        Self::new(state, document, scheduler, services)
    }

    /// Starts a page from prepared state: mounts the first page variant (or
    /// starts the countdown) and renders the shell.
    pub fn new(state: SiteState, document: D, scheduler: S, services: SiteServices) -> Self {
        let _span = tracing::info_span!("site_start", page = ?state.page, language = %state.language).entered();

        let mut site = Self {
            state,
            document,
            scheduler,
            store: services.store,
            relay: services.relay,
            pending: None,
            navigated_to: None,
        };
        let mut outcome = DispatchOutcome::default();
        for action in site.state.initial_actions() {
            site.execute_action(&action, &mut outcome);
        }
        renderer::render(&site.state, &mut site.document);
        tracing::info!(route = %site.state.route, "page started");
        site
    }

    #[must_use]
    pub const fn state(&self) -> &SiteState {
        &self.state
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The relay requests are sent through.
    #[must_use]
    pub fn relay(&self) -> Arc<dyn ContactRelay> {
        Arc::clone(&self.relay)
    }

    /// Last navigation requested, if the page is being left.
    #[must_use]
    pub fn navigated_to(&self) -> Option<&str> {
        self.navigated_to.as_deref()
    }

    /// Handles one page event.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        match handle_event(&mut self.state, &event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action, &mut outcome);
                }
                if should_render {
                    renderer::render(&self.state, &mut self.document);
                }
            }
            Err(e) => tracing::warn!(error = %e, "error handling event"),
        }
        outcome
    }

    /// Reacts to an elapsed timer slot.
    pub fn fire(&mut self, slot: TimerSlot) -> DispatchOutcome {
        self.dispatch(Event::TimerElapsed(slot))
    }

    /// Reads the contact form from the document and submits it.
    pub fn submit(&mut self) -> DispatchOutcome {
        let read = |control| self.document.value(ElementId::Field(control)).unwrap_or_default();
        let form = ContactForm {
            full_name: read(FormControl::FullName),
            email: read(FormControl::Email),
            category: read(FormControl::Category),
            message: read(FormControl::Message),
        };
        self.dispatch(Event::SubmitContact(form))
    }

    /// Takes the request waiting for the relay, if any.
    pub fn take_pending_request(&mut self) -> Option<ContactRequest> {
        self.pending.take()
    }

    /// Sends the pending request and dispatches its outcome.
    ///
    /// Returns `None` when no request was pending.
    pub async fn flush_relay(&mut self) -> Option<DispatchOutcome> {
        let request = self.pending.take()?;
        let relay = Arc::clone(&self.relay);
        let result = relay.send(&request).await;
        Some(self.dispatch(Event::RelayCompleted(result)))
    }

    /// Marks the link for `route` as current.
    pub fn set_active_route(&mut self, route: Route) {
        self.state.active_route = route;
        renderer::set_active_route(route, &mut self.document);
    }

    /// Re-applies localized strings to the shell without rebuilding it.
    pub fn update_content(&mut self, content: &'static LocalizedContent) {
        self.state.content = content;
        renderer::update_content(content, &mut self.document);
    }

    /// Sets the language picker's value to match a change made elsewhere.
    pub fn set_language(&mut self, code: LanguageCode) {
        self.state.picker_language = code;
        renderer::set_language(code, &mut self.document);
    }

    /// Closes the drawer.
    pub fn close_drawer(&mut self) {
        self.state.drawer = DrawerState::Closed;
        renderer::render_drawer(false, &mut self.document);
    }

    /// Shows the header transition marker on wide viewports.
    pub fn trigger_header_transition(&mut self) {
        let actions = self.state.trigger_header_transition();
        let mut outcome = DispatchOutcome::default();
        for action in &actions {
            self.execute_action(action, &mut outcome);
        }
        renderer::render(&self.state, &mut self.document);
    }

    #[tracing::instrument(level = "debug", skip(self, outcome))]
    fn execute_action(&mut self, action: &Action, outcome: &mut DispatchOutcome) {
        match action {
            Action::ArmTimer { slot, delay } => self.scheduler.arm(*slot, *delay),
            Action::CancelTimer(slot) => self.scheduler.cancel(*slot),
            Action::CapturePointer(pointer_id) => {
                self.document.set_pointer_capture(*pointer_id, true);
            }
            Action::ReleasePointer(pointer_id) => {
                self.document.set_pointer_capture(*pointer_id, false);
            }
            Action::PreventDefault => outcome.default_prevented = true,
            Action::StopPropagation => outcome.propagation_stopped = true,
            Action::StorePreference(code) => store_language_preference(self.store.as_mut(), *code),
            Action::MountPage(route) => {
                let html = markup::page_markup(*route, &self.state.base, self.state.content);
                if !self.document.replace_outlet(*route, &html) {
                    tracing::debug!(%route, "no outlet to mount into");
                }
            }
            Action::PushHistory { route, url } => outcome.history.push((*route, url.clone())),
            Action::ReportValidity => {
                self.document.report_validity();
            }
            Action::ResetForm => {
                self.document.reset_form();
            }
            Action::SendEnquiry(request) => {
                if self.pending.replace(request.clone()).is_some() {
                    tracing::warn!("replacing an unsent contact request");
                }
            }
            Action::Navigate(url) => {
                tracing::info!(url = %url, "navigating away");
                self.navigated_to = Some(url.clone());
                outcome.navigate_to = Some(url.clone());
            }
        }
    }
}

impl<D: Document> Site<D, ManualScheduler> {
    /// Moves the virtual clock forward, firing every slot that falls due,
    /// including slots re-armed while reacting to earlier ones.
    pub fn advance(&mut self, by: Duration) -> Vec<DispatchOutcome> {
        let until = self.scheduler.now() + by;
        let mut outcomes = Vec::new();
        while let Some(slot) = self.scheduler.pop_due(until) {
            outcomes.push(self.fire(slot));
        }
        self.scheduler.settle(until);
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RecordingRelay;
    use crate::storage::{MemoryPreferenceStore, UnavailableStore};
    use crate::ui::dom::MemoryDocument;

    fn services(store: Box<dyn PreferenceStore>) -> SiteServices {
        SiteServices {
            store,
            relay: Arc::new(RecordingRelay::succeeding()),
        }
    }

    #[test]
    fn boot_mounts_initial_route() {
        let site = Site::boot(
            Config::default(),
            Page::Contact,
            MemoryDocument::with_shell(),
            ManualScheduler::default(),
            services(Box::new(MemoryPreferenceStore::default())),
            &["en-GB"],
        );
        assert_eq!(site.document().mounted(), Some(Route::Contact));
        assert_eq!(
            site.document().attribute(ElementId::NavLink(Route::Contact), "aria-current"),
            Some("page")
        );
        assert_eq!(site.document().text(ElementId::SubmitButton), Some("Send message"));
    }

    #[test]
    fn unavailable_store_degrades_to_default() {
        let mut site = Site::boot(
            Config::default(),
            Page::Home,
            MemoryDocument::with_shell(),
            ManualScheduler::default(),
            services(Box::new(UnavailableStore)),
            &["de-DE"],
        );
        assert_eq!(site.state().language, LanguageCode::En);
        site.dispatch(Event::LanguageSelected("nl".to_string()));
        assert_eq!(site.state().language, LanguageCode::Nl);
        assert_eq!(site.document().value(ElementId::LanguagePicker).as_deref(), Some("nl"));
    }

    #[test]
    fn countdown_ticks_through_to_contact() {
        let mut site = Site::boot(
            Config::default(),
            Page::Confirmation,
            MemoryDocument::confirmation(),
            ManualScheduler::default(),
            services(Box::new(MemoryPreferenceStore::default())),
            &["en"],
        );
        assert_eq!(site.document().text(ElementId::Countdown), Some("5"));

        site.advance(Duration::from_secs(1));
        assert_eq!(site.document().text(ElementId::Countdown), Some("4"));
        assert_eq!(site.navigated_to(), None);

        site.advance(Duration::from_secs(4));
        assert_eq!(site.document().text(ElementId::Countdown), Some("0"));
        assert_eq!(site.navigated_to(), Some("/contact.html"));
    }

    #[test]
    fn external_language_sync_does_not_persist() {
        let mut site = Site::boot(
            Config::default(),
            Page::Home,
            MemoryDocument::with_shell(),
            ManualScheduler::default(),
            services(Box::new(MemoryPreferenceStore::default())),
            &["en"],
        );
        site.update_content(crate::content::localized_content(LanguageCode::Nl));
        site.set_language(LanguageCode::Nl);
        assert_eq!(site.document().text(ElementId::LanguageLabel), Some("Taal:"));
        assert_eq!(site.document().value(ElementId::LanguagePicker).as_deref(), Some("nl"));
    }
}
