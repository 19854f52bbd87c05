//! Content store: per-language strings and language resolution.
//!
//! Every [`LanguageCode`] maps to one immutable [`LocalizedContent`] record.
//! All records share the same field set; only the values differ.
//!
//! # Modules
//!
//! - `en`, `nl`: the two content records
//! - [`resolve`]: initial language resolution and preference persistence
//!
//! # Example
//!
//! ```
//! use avsite::content::localized_content;
//! use avsite::domain::LanguageCode;
//!
//! let content = localized_content(LanguageCode::Nl);
//! assert_eq!(content.language.label, "Taal:");
//! ```

mod en;
mod nl;
pub mod resolve;

pub use resolve::{
    is_language_code, resolve_initial_language, store_language_preference, LANGUAGE_STORAGE_KEY,
};

use crate::domain::LanguageCode;
use serde::Serialize;

/// All text shown by the shell and the pages for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedContent {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub navigation: NavigationText,
    pub aria: AriaText,
    pub language: LanguageText,
    pub contact: ContactText,
    pub confirmation: ConfirmationText,
}

/// Drawer link labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationText {
    pub home: &'static str,
    pub contact: &'static str,
}

/// Accessible names for controls without visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaText {
    pub header_button: &'static str,
    pub nav: &'static str,
    pub close_navigation: &'static str,
    pub return_home: &'static str,
}

/// Language picker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageText {
    pub label: &'static str,
}

/// Contact page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactText {
    pub heading: &'static str,
    pub intro: &'static str,
    pub footnote: &'static str,
    pub form: FormText,
}

/// Contact form labels, placeholders and status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormText {
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub category_label: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error_request: &'static str,
    pub error_unknown: &'static str,
}

/// Confirmation page text. The countdown reads `prefix N suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationText {
    pub heading: &'static str,
    pub body: &'static str,
    pub countdown_prefix: &'static str,
    pub countdown_suffix: &'static str,
    pub back_link: &'static str,
}

/// Looks up the content record for a language. Total over [`LanguageCode`].
#[must_use]
pub fn localized_content(code: LanguageCode) -> &'static LocalizedContent {
    match code {
        LanguageCode::En => &en::CONTENT,
        LanguageCode::Nl => &nl::CONTENT,
    }
}
