//! `setTimeout` scheduler.

use crate::scheduler::{Scheduler, TimerSlot};
use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

struct Pending {
    // Dropping the handle clears the browser timeout.
    _timeout: Timeout,
    elapsed: Rc<Cell<bool>>,
}

/// Schedules slots with [`gloo::timers`] and reports each elapsed slot to a
/// callback.
///
/// The callback runs inside the browser's timer task. It must not re-enter
/// the site synchronously; defer with `spawn_local` instead.
pub struct BrowserScheduler {
    pending: HashMap<TimerSlot, Pending>,
    on_elapsed: Rc<dyn Fn(TimerSlot)>,
}

impl BrowserScheduler {
    pub fn new(on_elapsed: impl Fn(TimerSlot) + 'static) -> Self {
        Self {
            pending: HashMap::new(),
            on_elapsed: Rc::new(on_elapsed),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn arm(&mut self, slot: TimerSlot, delay: Duration) {
        let elapsed = Rc::new(Cell::new(false));
        let callback = Rc::clone(&self.on_elapsed);
        let flag = Rc::clone(&elapsed);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            flag.set(true);
            callback(slot);
        });
        self.pending.insert(slot, Pending { _timeout: timeout, elapsed });
    }

    fn cancel(&mut self, slot: TimerSlot) {
        self.pending.remove(&slot);
    }

    fn is_armed(&self, slot: TimerSlot) -> bool {
        self.pending.get(&slot).is_some_and(|pending| !pending.elapsed.get())
    }
}
