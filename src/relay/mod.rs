//! Mail relay boundary.
//!
//! The contact form never talks to a mail provider directly. It hands a
//! [`ContactRequest`] to a [`ContactRelay`], which resolves or rejects. The
//! transport behind it is swappable.
//!
//! # Implementations
//!
//! - [`EmailJsRelay`]: EmailJS REST API over `reqwest`
//! - [`RecordingRelay`]: in-memory double that records requests and replays a fixed outcome

mod emailjs;
mod recording;

pub use emailjs::EmailJsRelay;
pub use recording::RecordingRelay;

use crate::config::RelayConfig;
use crate::domain::{Enquiry, RelayError};
use async_trait::async_trait;
use serde::Serialize;

/// Template parameters the relay fills into the outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFields {
    pub full_name: String,
    pub reply_to: String,
    pub category: String,
    pub message: String,
    pub subject: String,
}

/// Everything the relay needs to deliver one enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub fields: TemplateFields,
}

impl ContactRequest {
    /// Combines relay credentials with a validated enquiry.
    #[must_use]
    pub fn new(config: &RelayConfig, enquiry: &Enquiry) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            fields: TemplateFields {
                full_name: enquiry.full_name.clone(),
                reply_to: enquiry.reply_to.clone(),
                category: enquiry.category.clone(),
                message: enquiry.message.clone(),
                subject: enquiry.subject(),
            },
        }
    }

    /// Whether every credential is present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !(self.service_id.is_empty() || self.template_id.is_empty() || self.public_key.is_empty())
    }
}

/// Delivers contact requests. Resolves once per call; never retries.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContactRelay: Send + Sync {
    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NotConfigured`] when credentials are missing,
    /// [`RelayError::Rejected`] when the relay refuses the request and
    /// [`RelayError::Transport`] when it cannot be reached.
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError>;
}
