//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place page events change [`SiteState`]. It
//! pattern-matches the event, mutates state through the pure state machines
//! (drawer, drag gesture, submission, countdown) and returns the actions the
//! runtime must execute.
//!
//! # Event Types
//!
//! - **Drawer**: `ToggleClick`, `OverlayClick`, `Key`, `Pointer`
//! - **Navigation**: `NavLinkClick`, `HistoryPop`
//! - **Language**: `LanguageSelected`
//! - **Page**: `GlowMove`, `GlowLeave`, `ViewportResized`
//! - **Contact**: `SubmitContact`, `RelayCompleted`
//! - **Timers**: `TimerElapsed`
//!
//! # Example
//!
//! ```
//! use avsite::app::{handle_event, Event, SiteState};
//! use avsite::domain::{LanguageCode, Page};
//! use avsite::Config;
//!
//! let mut state = SiteState::new(Config::default(), Page::Home, LanguageCode::En);
//! let (render, actions) = handle_event(&mut state, &Event::ToggleClick)?;
//! assert!(render && actions.is_empty());
//! assert!(state.drawer.is_open());
//! # Ok::<(), avsite::SiteError>(())
//! ```

use super::drawer::DrawerEvent;
use super::gesture::{GestureOutcome, PointerInput};
use super::state::COUNTDOWN_INTERVAL;
use super::submission::{relay_error_text, StatusMessage, SubmissionState};
use super::{Action, SiteState};
use crate::domain::error::Result;
use crate::domain::{ContactForm, LanguageCode, Page, RelayError, Route};
use crate::relay::ContactRequest;
use crate::scheduler::TimerSlot;
use crate::ui::glow::{glow_factor, glow_offset, GlowOffset, PanelRect};

/// Page events delivered to the handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Click on the header toggle.
    ToggleClick,
    /// Click on the overlay behind the open drawer.
    OverlayClick,
    /// Key pressed anywhere in the document, by DOM `key` name.
    Key(String),
    /// Click on a drawer link.
    NavLinkClick(Route),
    /// History navigation. `None` when the entry carries no route.
    HistoryPop(Option<Route>),
    /// Pointer event on the drawer handle.
    Pointer(PointerInput),
    /// Raw value chosen in the language picker.
    LanguageSelected(String),
    /// Viewport width changed.
    ViewportResized { width: f64 },
    /// Pointer moved over the glow panel.
    GlowMove { x: f64, y: f64, rect: PanelRect },
    /// Pointer left the glow panel.
    GlowLeave,
    /// Contact form submitted with the given raw values.
    SubmitContact(ContactForm),
    /// The mail relay finished the pending request.
    RelayCompleted(std::result::Result<(), RelayError>),
    /// A scheduler slot elapsed.
    TimerElapsed(TimerSlot),
}

/// Processes an event, mutates state and returns the actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the shell must be re-rendered from state, and
/// the side effects to run in order. Events that do not apply to the current
/// page or state return `(false, vec![])`.
///
/// # Errors
///
/// Currently infallible. The `Result` is the seam the runtime propagates
/// through.
///
/// # Tracing
///
/// Each call enters a debug-level span with the event.
pub fn handle_event(state: &mut SiteState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ToggleClick => {
            if state.suppress_next_click {
                tracing::debug!("toggle click suppressed after drag");
                state.suppress_next_click = false;
                return Ok((
                    false,
                    vec![
                        Action::PreventDefault,
                        Action::StopPropagation,
                        Action::CancelTimer(TimerSlot::ClickSuppression),
                    ],
                ));
            }
            state.apply_drawer(DrawerEvent::ToggleClick);
            Ok((true, vec![]))
        }
        Event::OverlayClick => {
            state.apply_drawer(DrawerEvent::OverlayClick);
            Ok((true, vec![]))
        }
        Event::Key(key) => {
            if key != "Escape" {
                return Ok((false, vec![]));
            }
            state.apply_drawer(DrawerEvent::Escape);
            Ok((true, vec![]))
        }
        Event::NavLinkClick(route) => {
            state.apply_drawer(DrawerEvent::NavLinkClick);
            if !state.page.routes_in_place() {
                return Ok((true, vec![]));
            }
            let mut actions = vec![Action::PreventDefault];
            actions.extend(state.navigate_to_route(*route, true, false));
            Ok((true, actions))
        }
        Event::HistoryPop(route) => {
            if !state.page.routes_in_place() {
                return Ok((false, vec![]));
            }
            let route = route.unwrap_or(state.boot_route);
            let actions = state.navigate_to_route(route, false, true);
            Ok((true, actions))
        }
        Event::Pointer(input) => Ok(handle_pointer(state, *input)),
        Event::LanguageSelected(value) => {
            let Some(code) = LanguageCode::parse(value) else {
                tracing::debug!(value = %value, "ignoring unsupported language value");
                return Ok((false, vec![]));
            };
            let actions = state.change_language(code);
            Ok((true, actions))
        }
        Event::ViewportResized { width } => {
            state.viewport_width = *width;
            Ok((false, vec![]))
        }
        Event::GlowMove { x, y, rect } => {
            state.glow = glow_offset(*x, *y, *rect, glow_factor(state.route));
            Ok((true, vec![]))
        }
        Event::GlowLeave => {
            state.glow = GlowOffset::default();
            Ok((true, vec![]))
        }
        Event::SubmitContact(form) => Ok(handle_submit(state, form)),
        Event::RelayCompleted(outcome) => Ok(handle_relay_outcome(state, outcome)),
        Event::TimerElapsed(slot) => Ok(handle_timer(state, *slot)),
    }
}

fn handle_pointer(state: &mut SiteState, input: PointerInput) -> (bool, Vec<Action>) {
    let (next, outcome) = state.drag.step(input, state.drawer.is_open(), &state.config.gesture);
    state.drag = next;

    match outcome {
        GestureOutcome::Ignored => (false, vec![]),
        GestureOutcome::Started {
            pointer_id,
            prevent_default,
        } => {
            tracing::debug!(pointer_id, "drag started");
            let mut actions = vec![Action::CapturePointer(pointer_id)];
            if prevent_default {
                actions.push(Action::PreventDefault);
            }
            (true, actions)
        }
        GestureOutcome::Moved { .. } => (true, vec![]),
        GestureOutcome::Released {
            pointer_id,
            did_move,
            should_open,
        } => {
            tracing::debug!(pointer_id, did_move, should_open, "drag released");
            let mut actions = vec![Action::ReleasePointer(pointer_id)];
            if did_move {
                actions.push(arm_click_suppression(state));
            }
            if should_open {
                state.apply_drawer(DrawerEvent::DragOpen);
            } else if did_move {
                state.apply_drawer(DrawerEvent::DragClose);
            }
            (true, actions)
        }
        GestureOutcome::Aborted { pointer_id } => {
            tracing::debug!(pointer_id, "drag aborted");
            let actions = vec![Action::ReleasePointer(pointer_id), arm_click_suppression(state)];
            (true, actions)
        }
    }
}

fn arm_click_suppression(state: &mut SiteState) -> Action {
    state.suppress_next_click = true;
    Action::ArmTimer {
        slot: TimerSlot::ClickSuppression,
        delay: state.config.timing.click_suppression(),
    }
}

fn handle_submit(state: &mut SiteState, form: &ContactForm) -> (bool, Vec<Action>) {
    if state.route != Route::Contact || !state.page.has_shell() {
        return (false, vec![]);
    }
    if !state.submission.submit_enabled() {
        tracing::debug!(submission = ?state.submission, "submit ignored while busy");
        return (false, vec![Action::PreventDefault]);
    }

    let mut actions = vec![Action::PreventDefault];
    let enquiry = match form.to_enquiry() {
        Ok(enquiry) => enquiry,
        Err(missing) => {
            tracing::debug!(?missing, "contact form incomplete");
            actions.push(Action::ReportValidity);
            return (false, actions);
        }
    };

    state.status = StatusMessage::default();
    if !state.config.relay.is_configured() {
        tracing::warn!("mail relay credentials missing");
        state.status = StatusMessage::error(state.content.contact.form.error_request);
        return (true, actions);
    }

    tracing::info!(category = %enquiry.category, "sending enquiry");
    state.submission = SubmissionState::Sending;
    actions.push(Action::SendEnquiry(ContactRequest::new(&state.config.relay, &enquiry)));
    (true, actions)
}

fn handle_relay_outcome(state: &mut SiteState, outcome: &std::result::Result<(), RelayError>) -> (bool, Vec<Action>) {
    if state.submission != SubmissionState::Sending {
        tracing::debug!(submission = ?state.submission, "relay outcome without pending request");
        return (false, vec![]);
    }

    let form_text = &state.content.contact.form;
    match outcome {
        Ok(()) => {
            tracing::info!("enquiry delivered");
            state.status = StatusMessage::success(form_text.success);
            state.submission = SubmissionState::Redirecting;
            (
                true,
                vec![
                    Action::ResetForm,
                    Action::ArmTimer {
                        slot: TimerSlot::Redirect,
                        delay: state.config.timing.redirect_delay(),
                    },
                ],
            )
        }
        Err(error) => {
            tracing::warn!(error = %error, "enquiry failed");
            state.status = StatusMessage::error(&relay_error_text(error, form_text));
            state.submission = SubmissionState::Idle;
            (true, vec![])
        }
    }
}

fn handle_timer(state: &mut SiteState, slot: TimerSlot) -> (bool, Vec<Action>) {
    match slot {
        TimerSlot::ClickSuppression => {
            state.suppress_next_click = false;
            (false, vec![])
        }
        TimerSlot::HeaderTransition => {
            state.header_transitioning = false;
            (true, vec![])
        }
        TimerSlot::Redirect => {
            if state.submission != SubmissionState::Redirecting {
                return (false, vec![]);
            }
            (false, vec![Action::Navigate(state.base.page_url(Page::Confirmation))])
        }
        TimerSlot::CountdownTick => {
            let Some(countdown) = state.countdown.as_mut() else {
                return (false, vec![]);
            };
            if countdown.tick() {
                tracing::debug!("countdown finished");
                return (true, vec![Action::Navigate(state.base.page_url(Page::Contact))]);
            }
            (
                true,
                vec![Action::ArmTimer {
                    slot: TimerSlot::CountdownTick,
                    delay: COUNTDOWN_INTERVAL,
                }],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gesture::PointerKind;
    use crate::config::{Config, RelayConfig};
    use std::time::Duration;

    fn state(page: Page) -> SiteState {
        SiteState::new(Config::default(), page, LanguageCode::En)
    }

    fn configured(page: Page) -> SiteState {
        let config = Config {
            relay: RelayConfig {
                service_id: "service".to_string(),
                template_id: "template".to_string(),
                public_key: "key".to_string(),
                ..RelayConfig::default()
            },
            ..Config::default()
        };
        SiteState::new(config, page, LanguageCode::En)
    }

    fn drag(state: &mut SiteState, dx: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        for input in [
            PointerInput::Down { pointer_id: 1, kind: PointerKind::Touch, button: 0, x: 0.0, y: 0.0 },
            PointerInput::Move { pointer_id: 1, x: dx, y: 0.0 },
            PointerInput::Up { pointer_id: 1 },
        ] {
            let (_, produced) = handle_event(state, &Event::Pointer(input)).unwrap();
            actions.extend(produced);
        }
        actions
    }

    fn jane() -> ContactForm {
        ContactForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            category: "General enquiry".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn drag_below_noise_floor_is_a_tap() {
        let mut state = state(Page::Home);
        let actions = drag(&mut state, 4.0);
        assert!(!state.drawer.is_open());
        assert!(!state.suppress_next_click);
        assert_eq!(actions, vec![Action::CapturePointer(1), Action::PreventDefault, Action::ReleasePointer(1)]);
    }

    #[test]
    fn long_drag_opens_and_suppresses_click() {
        let mut state = state(Page::Home);
        let actions = drag(&mut state, 100.0);
        assert!(state.drawer.is_open());
        assert!(state.suppress_next_click);
        assert!(actions.contains(&Action::ArmTimer {
            slot: TimerSlot::ClickSuppression,
            delay: Duration::from_millis(300)
        }));

        let (_, actions) = handle_event(&mut state, &Event::ToggleClick).unwrap();
        assert!(actions.contains(&Action::StopPropagation));
        assert!(state.drawer.is_open());
        assert!(!state.suppress_next_click);
    }

    #[test]
    fn short_drag_leaves_closed_drawer_closed() {
        let mut state = state(Page::Home);
        let _ = drag(&mut state, 50.0);
        assert!(!state.drawer.is_open());
        assert!(state.suppress_next_click);
    }

    #[test]
    fn short_drag_closes_drawer_opened_mid_gesture() {
        let mut state = state(Page::Home);
        handle_event(
            &mut state,
            &Event::Pointer(PointerInput::Down { pointer_id: 2, kind: PointerKind::Mouse, button: 0, x: 0.0, y: 0.0 }),
        )
        .unwrap();
        handle_event(&mut state, &Event::Pointer(PointerInput::Move { pointer_id: 2, x: 50.0, y: 0.0 })).unwrap();
        state.apply_drawer(DrawerEvent::Escape);
        state.apply_drawer(DrawerEvent::ToggleClick);
        assert!(state.drawer.is_open());

        handle_event(&mut state, &Event::Pointer(PointerInput::Up { pointer_id: 2 })).unwrap();
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn lost_capture_keeps_drawer_and_suppresses() {
        let mut state = state(Page::Home);
        handle_event(
            &mut state,
            &Event::Pointer(PointerInput::Down { pointer_id: 5, kind: PointerKind::Pen, button: 0, x: 0.0, y: 0.0 }),
        )
        .unwrap();
        handle_event(&mut state, &Event::Pointer(PointerInput::Move { pointer_id: 5, x: 120.0, y: 0.0 })).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Pointer(PointerInput::LostCapture)).unwrap();
        assert_eq!(actions[0], Action::ReleasePointer(5));
        assert!(!state.drawer.is_open());
        assert!(state.suppress_next_click);
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn only_escape_closes() {
        let mut state = state(Page::Contact);
        state.apply_drawer(DrawerEvent::ToggleClick);
        assert_eq!(handle_event(&mut state, &Event::Key("Enter".to_string())).unwrap(), (false, vec![]));
        assert!(state.drawer.is_open());
        handle_event(&mut state, &Event::Key("Escape".to_string())).unwrap();
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn nav_click_on_contact_document_only_closes() {
        let mut state = state(Page::Contact);
        state.apply_drawer(DrawerEvent::ToggleClick);
        let (_, actions) = handle_event(&mut state, &Event::NavLinkClick(Route::Home)).unwrap();
        assert!(actions.is_empty());
        assert!(!state.drawer.is_open());
        assert_eq!(state.route, Route::Contact);
    }

    #[test]
    fn nav_click_on_landing_routes_in_place() {
        let mut state = state(Page::Home);
        let (_, actions) = handle_event(&mut state, &Event::NavLinkClick(Route::Contact)).unwrap();
        assert_eq!(actions[0], Action::PreventDefault);
        assert!(actions.contains(&Action::MountPage(Route::Contact)));
        assert_eq!(state.active_route, Route::Contact);
    }

    #[test]
    fn back_to_stateless_entry_returns_to_boot_route() {
        let mut state = state(Page::Home);
        handle_event(&mut state, &Event::NavLinkClick(Route::Contact)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::HistoryPop(None)).unwrap();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.active_route, Route::Home);
        assert!(actions.contains(&Action::MountPage(Route::Home)));
        assert!(!actions.iter().any(|a| matches!(a, Action::PushHistory { .. })));
    }

    #[test]
    fn stateless_pop_on_document_loaded_at_contact_stays_on_contact() {
        let mut state = state(Page::Home).with_route(Route::from_path("/contact.html"));
        handle_event(&mut state, &Event::NavLinkClick(Route::Home)).unwrap();
        handle_event(&mut state, &Event::HistoryPop(None)).unwrap();
        assert_eq!(state.route, Route::Contact);
    }

    #[test]
    fn pop_on_contact_document_is_ignored() {
        let mut state = state(Page::Contact);
        let outcome = handle_event(&mut state, &Event::HistoryPop(Some(Route::Home))).unwrap();
        assert_eq!(outcome, (false, vec![]));
        assert_eq!(state.route, Route::Contact);
    }

    #[test]
    fn invalid_language_is_ignored() {
        let mut state = state(Page::Home);
        assert_eq!(handle_event(&mut state, &Event::LanguageSelected("de".to_string())).unwrap(), (false, vec![]));
        assert_eq!(state.language, LanguageCode::En);
    }

    #[test]
    fn incomplete_form_reports_validity() {
        let mut state = configured(Page::Contact);
        let form = ContactForm {
            message: "   ".to_string(),
            ..jane()
        };
        let (_, actions) = handle_event(&mut state, &Event::SubmitContact(form)).unwrap();
        assert_eq!(actions, vec![Action::PreventDefault, Action::ReportValidity]);
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn missing_configuration_shows_request_error() {
        let mut state = state(Page::Contact);
        let (_, actions) = handle_event(&mut state, &Event::SubmitContact(jane())).unwrap();
        assert_eq!(actions, vec![Action::PreventDefault]);
        assert_eq!(state.status, StatusMessage::error("Failed to send message. Please try again."));
        assert!(state.submission.submit_enabled());
    }

    #[test]
    fn valid_form_sends_with_subject() {
        let mut state = configured(Page::Contact);
        let (_, actions) = handle_event(&mut state, &Event::SubmitContact(jane())).unwrap();
        let Some(Action::SendEnquiry(request)) = actions.last() else {
            panic!("expected a send action, got {actions:?}");
        };
        assert_eq!(request.fields.subject, "AV enquiry (General enquiry) from Jane Doe");
        assert_eq!(state.submission, SubmissionState::Sending);

        let (_, again) = handle_event(&mut state, &Event::SubmitContact(jane())).unwrap();
        assert_eq!(again, vec![Action::PreventDefault]);
    }

    #[test]
    fn relay_success_arms_redirect() {
        let mut state = configured(Page::Contact);
        handle_event(&mut state, &Event::SubmitContact(jane())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::RelayCompleted(Ok(()))).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::ResetForm,
                Action::ArmTimer {
                    slot: TimerSlot::Redirect,
                    delay: Duration::from_millis(600)
                }
            ]
        );
        let (_, actions) = handle_event(&mut state, &Event::TimerElapsed(TimerSlot::Redirect)).unwrap();
        assert_eq!(actions, vec![Action::Navigate("/contact-success.html".to_string())]);
    }

    #[test]
    fn relay_failure_shows_message_and_reenables() {
        let mut state = configured(Page::Contact);
        handle_event(&mut state, &Event::SubmitContact(jane())).unwrap();
        let failure = Err(RelayError::Rejected {
            status: 412,
            message: "Invalid grant".to_string(),
        });
        handle_event(&mut state, &Event::RelayCompleted(failure)).unwrap();
        assert_eq!(state.status, StatusMessage::error("Invalid grant"));
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn countdown_rearms_then_redirects() {
        let mut state = state(Page::Confirmation);
        for expected in (1..5).rev() {
            let (_, actions) = handle_event(&mut state, &Event::TimerElapsed(TimerSlot::CountdownTick)).unwrap();
            assert_eq!(actions.len(), 1);
            assert!(matches!(actions[0], Action::ArmTimer { slot: TimerSlot::CountdownTick, .. }));
            assert_eq!(state.countdown.map(|c| c.remaining()), Some(expected));
        }
        let (_, actions) = handle_event(&mut state, &Event::TimerElapsed(TimerSlot::CountdownTick)).unwrap();
        assert_eq!(actions, vec![Action::Navigate("/contact.html".to_string())]);
    }

    #[test]
    fn glow_follows_mounted_route() {
        let mut state = state(Page::Home);
        let rect = PanelRect { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };
        handle_event(&mut state, &Event::GlowMove { x: 100.0, y: 50.0, rect }).unwrap();
        assert_eq!(state.glow, GlowOffset { x: 30.0, y: 0.0 });
        handle_event(&mut state, &Event::GlowLeave).unwrap();
        assert_eq!(state.glow, GlowOffset::default());
    }
}
