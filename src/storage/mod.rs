//! Storage layer for the persisted language preference.
//!
//! The site persists a single string value across sessions. This module
//! abstracts where it lives so language resolution never depends on a browser
//! being present.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait
//! - `json`: JSON file store with atomic writes
//! - `memory`: in-memory store and an always-unavailable store

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use memory::{MemoryPreferenceStore, UnavailableStore};
