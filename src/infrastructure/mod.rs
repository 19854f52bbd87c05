//! Infrastructure helpers for URLs and local file locations.
//!
//! Documents are linked by relative paths under a configurable base path; the
//! command-line tooling keeps its preference file in the user's data directory.

pub mod paths;

pub use paths::{default_storage_path, BasePath};
