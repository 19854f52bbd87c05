//! Domain layer for the site.
//!
//! This module contains the core domain types shared by every other layer,
//! independent of the browser, the mail relay or the storage backend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`language`]: Supported language codes
//! - [`route`]: Navigation routes and static pages
//! - [`contact`]: Contact form fields, validation and enquiry subject
//!
//! # Examples
//!
//! ```
//! use avsite::domain::{ContactForm, LanguageCode, Route};
//!
//! let form = ContactForm {
//!     full_name: "Jane Doe".to_string(),
//!     email: "jane@x.com".to_string(),
//!     category: "General enquiry".to_string(),
//!     message: "Hello".to_string(),
//! };
//! let enquiry = form.to_enquiry().unwrap();
//! assert_eq!(enquiry.subject(), "AV enquiry (General enquiry) from Jane Doe");
//! assert_eq!(LanguageCode::parse("nl"), Some(LanguageCode::Nl));
//! assert_eq!(Route::from_data_route("contact"), Some(Route::Contact));
//! ```

pub mod contact;
pub mod error;
pub mod language;
pub mod route;

pub use contact::{obfuscate_email, ContactField, ContactForm, Enquiry, CONTACT_CATEGORIES, CONTACT_EMAIL};
pub use error::{RelayError, Result, SiteError};
pub use language::LanguageCode;
pub use route::{Page, Route};
