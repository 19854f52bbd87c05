//! Application layer: page state machines, events and actions.
//!
//! This layer sits between the site runtime ([`crate::site`]) and the domain,
//! content and relay layers. It never touches the page directly.
//!
//! # Architecture
//!
//! ```text
//! Page Events → handle_event → State Mutations → Actions → Site runtime
//!                    ↑                               ↓
//!                    └──── Timers / Relay outcome ───┘
//! ```
//!
//! # Modules
//!
//! - [`drawer`]: drawer open/close state machine
//! - [`gesture`]: drag-to-open recognizer for the drawer handle
//! - [`submission`]: contact form request lifecycle
//! - [`countdown`]: confirmation page countdown
//! - [`state`]: per-page state container and view model computation
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: event processing
//!
//! # Example
//!
//! ```
//! use avsite::app::{handle_event, Event, SiteState};
//! use avsite::domain::{LanguageCode, Page};
//! use avsite::Config;
//!
//! let mut state = SiteState::new(Config::default(), Page::Home, LanguageCode::En);
//! let (_, actions) = handle_event(&mut state, &Event::LanguageSelected("nl".into()))?;
//! assert_eq!(state.language, LanguageCode::Nl);
//! assert!(!actions.is_empty());
//! # Ok::<(), avsite::SiteError>(())
//! ```

pub mod actions;
pub mod countdown;
pub mod drawer;
pub mod gesture;
pub mod handler;
pub mod state;
pub mod submission;

pub use actions::Action;
pub use countdown::Countdown;
pub use drawer::{DrawerEvent, DrawerState};
pub use gesture::{DragGesture, DragState, GestureConfig, GestureOutcome, PointerInput, PointerKind};
pub use handler::{handle_event, Event};
pub use state::SiteState;
pub use submission::{StatusMessage, StatusState, SubmissionState};
