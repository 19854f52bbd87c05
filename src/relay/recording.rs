//! Relay double used by tests and headless runs.

use super::{ContactRelay, ContactRequest};
use crate::domain::RelayError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Records every request and answers with a fixed outcome.
///
/// Clones share the same record, so a test can keep one handle while the site
/// owns another.
#[derive(Debug, Clone)]
pub struct RecordingRelay {
    outcome: Result<(), RelayError>,
    requests: Arc<Mutex<Vec<ContactRequest>>>,
}

impl RecordingRelay {
    /// A relay that accepts every request.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(()))
    }

    /// A relay that rejects every request with `error`.
    #[must_use]
    pub fn failing(error: RelayError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<(), RelayError>) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContactRelay for RecordingRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.outcome.clone()
    }
}
