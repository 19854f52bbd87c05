//! Cancellable delayed tasks.
//!
//! Every timer the site uses lives in a named [`TimerSlot`]. Arming a slot
//! cancels whatever was pending in it, so a re-triggered window is reset rather
//! than stacked and a superseded task can never fire late.
//!
//! # Implementations
//!
//! - [`ManualScheduler`]: virtual clock advanced explicitly (tests, headless runs)
//! - `BrowserScheduler` (`web` feature): `setTimeout` via `gloo`
//!
//! # Example
//!
//! ```
//! use avsite::scheduler::{ManualScheduler, Scheduler, TimerSlot};
//! use std::time::Duration;
//!
//! let mut scheduler = ManualScheduler::default();
//! scheduler.arm(TimerSlot::HeaderTransition, Duration::from_millis(320));
//! scheduler.arm(TimerSlot::HeaderTransition, Duration::from_millis(320));
//! assert_eq!(scheduler.advance(Duration::from_millis(320)), vec![TimerSlot::HeaderTransition]);
//! ```

mod manual;

pub use manual::ManualScheduler;

use std::time::Duration;

/// Named timer owned by the site. At most one task is pending per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerSlot {
    /// Window after a drag during which the next toggle click is swallowed.
    ClickSuppression,
    /// Removes the header transition marker.
    HeaderTransition,
    /// Navigates to the confirmation page after a successful submission.
    Redirect,
    /// One-second tick of the confirmation countdown.
    CountdownTick,
}

/// Schedules delayed tasks identified by [`TimerSlot`].
///
/// Implementations do not run any code themselves; the owner of the scheduler
/// is told which slot elapsed and reacts to it.
pub trait Scheduler {
    /// Arms `slot` to elapse after `delay`, cancelling any task already pending in it.
    fn arm(&mut self, slot: TimerSlot, delay: Duration);

    /// Cancels the pending task in `slot`, if any.
    fn cancel(&mut self, slot: TimerSlot);

    /// Whether a task is pending in `slot`.
    fn is_armed(&self, slot: TimerSlot) -> bool;
}
