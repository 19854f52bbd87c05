//! Error types for the site.
//!
//! This module defines the centralized error type [`SiteError`], the mail relay
//! failure type [`RelayError`] and a [`Result`] alias used throughout the crate.
//! Both are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for site operations.
///
/// Consolidates configuration, storage and relay failures. Missing DOM elements
/// are deliberately not represented here: every render path treats them as
/// a silent no-op.
///
/// # Examples
///
/// ```
/// use avsite::domain::SiteError;
///
/// fn read_preference() -> Result<(), SiteError> {
///     Err(SiteError::Storage("storage is unavailable".to_string()))
/// }
/// assert!(read_preference().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SiteError {
    /// Preference storage failed or is unavailable.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The mail relay could not deliver an enquiry.
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),
}

/// Failure reported by the mail relay boundary.
///
/// The submission state machine turns each variant into a user-visible status
/// line; none of them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Service id, template id or public key is empty.
    #[error("mail relay credentials are not configured")]
    NotConfigured,

    /// The relay answered with a non-success status.
    #[error("mail relay rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the relay.
        status: u16,
        /// Response body, used verbatim as the status line when non-empty.
        message: String,
    },

    /// The request never reached the relay.
    #[error("mail relay transport failed: {0}")]
    Transport(String),
}

/// A specialized `Result` type for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;
