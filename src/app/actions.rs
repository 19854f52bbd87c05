//! Side effects requested by the event handler.
//!
//! The handler never touches the page, the scheduler, storage or the network.
//! It returns a `Vec<Action>` and the site runtime executes each action in
//! order, then re-renders the shell from state.
//!
//! # Example
//!
//! ```
//! use avsite::app::Action;
//! use avsite::scheduler::TimerSlot;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::PreventDefault,
//!     Action::ArmTimer { slot: TimerSlot::Redirect, delay: Duration::from_millis(600) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::{LanguageCode, Route};
use crate::relay::ContactRequest;
use crate::scheduler::TimerSlot;
use std::time::Duration;

/// Commands executed by the site runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms a timer slot, replacing any task already pending in it.
    ArmTimer {
        slot: TimerSlot,
        delay: Duration,
    },

    /// Cancels a pending timer.
    CancelTimer(TimerSlot),

    /// Captures the pointer on the drawer handle.
    CapturePointer(i32),

    /// Releases a captured pointer. A no-op if the handle no longer holds it.
    ReleasePointer(i32),

    /// Cancels the browser's default handling of the current event.
    PreventDefault,

    /// Stops the current event from reaching other listeners.
    StopPropagation,

    /// Persists the language preference. Failures are logged and ignored.
    StorePreference(LanguageCode),

    /// Replaces the outlet with the markup of a page variant.
    MountPage(Route),

    /// Pushes a history entry for in-page routing.
    PushHistory {
        route: Route,
        url: String,
    },

    /// Shows native validation feedback on the contact form.
    ReportValidity,

    /// Clears the contact form fields.
    ResetForm,

    /// Hands a request to the mail relay.
    SendEnquiry(ContactRequest),

    /// Leaves the current document.
    Navigate(String),
}
