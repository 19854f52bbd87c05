//! Presentation layer: view models, markup and document rendering.
//!
//! # Architecture
//!
//! ```text
//! SiteState → compute_viewmodel → SiteViewModel → render → Document
//!                                                  markup → outlet / static documents
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready state
//! - [`renderer`]: applies view models to a [`Document`]
//! - [`dom`]: the document seam and its in-memory implementation
//! - [`markup`]: HTML for the shell, the page variants and whole documents
//! - [`glow`]: pointer-tracked glow offsets

pub mod dom;
pub mod glow;
pub mod markup;
pub mod renderer;
pub mod viewmodel;

pub use dom::{Document, ElementId, FormControl, MemoryDocument};
pub use renderer::render;
pub use viewmodel::{FormViewModel, ShellViewModel, SiteViewModel};
