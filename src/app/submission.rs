//! Contact form submission lifecycle.
//!
//! ```text
//!   Idle ── valid submit ──▶ Sending ── relay ok ──▶ Redirecting
//!    ▲                          │
//!    └──── relay error ─────────┘
//! ```
//!
//! Invalid submissions and missing relay configuration never leave `Idle`.
//! `Redirecting` is terminal for the page instance: the submit control stays
//! disabled because navigation away is already in progress.

use crate::content::FormText;
use crate::domain::RelayError;

/// Where the form is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Redirecting,
}

impl SubmissionState {
    /// Whether the submit control accepts clicks.
    #[must_use]
    pub const fn submit_enabled(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the submit control shows the "sending" label.
    #[must_use]
    pub const fn shows_sending_label(self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Styling marker of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    Empty,
    Success,
    Error,
}

impl StatusState {
    /// Value of the `data-state` attribute. Empty means the attribute is removed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text and marker of the status line below the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub state: StatusState,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            state: StatusState::Success,
        }
    }

    #[must_use]
    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            state: StatusState::Error,
        }
    }
}

/// User-facing text for a failed request.
///
/// Missing configuration maps to the localized "request" error, a rejection
/// carrying a message shows that message, and anything else falls back to the
/// generic error.
#[must_use]
pub fn relay_error_text(error: &RelayError, text: &FormText) -> String {
    match error {
        RelayError::NotConfigured => text.error_request.to_string(),
        RelayError::Rejected { message, .. } if !message.trim().is_empty() => message.trim().to_string(),
        RelayError::Rejected { .. } | RelayError::Transport(_) => text.error_unknown.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::localized_content;
    use crate::domain::LanguageCode;

    #[test]
    fn submit_control_follows_state() {
        assert!(SubmissionState::Idle.submit_enabled());
        assert!(!SubmissionState::Sending.submit_enabled());
        assert!(!SubmissionState::Redirecting.submit_enabled());
        assert!(SubmissionState::Sending.shows_sending_label());
        assert!(!SubmissionState::Redirecting.shows_sending_label());
    }

    #[test]
    fn error_text_mapping() {
        let form = &localized_content(LanguageCode::En).contact.form;

        assert_eq!(relay_error_text(&RelayError::NotConfigured, form), form.error_request);
        assert_eq!(
            relay_error_text(
                &RelayError::Rejected {
                    status: 400,
                    message: " The template ID is invalid ".to_string()
                },
                form
            ),
            "The template ID is invalid"
        );
        assert_eq!(
            relay_error_text(&RelayError::Rejected { status: 500, message: String::new() }, form),
            form.error_unknown
        );
        assert_eq!(
            relay_error_text(&RelayError::Transport("connection reset".to_string()), form),
            form.error_unknown
        );
    }
}
