//! Virtual-clock scheduler.

use super::{Scheduler, TimerSlot};
use std::collections::BTreeMap;
use std::time::Duration;

/// Scheduler driven by an explicit clock.
///
/// Time only moves through [`advance`](Self::advance) or
/// [`pop_due`](Self::pop_due). Slots elapse in due order; ties are broken by
/// the order they were armed in.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    sequence: u64,
    pending: BTreeMap<TimerSlot, (Duration, u64)>,
}

impl ManualScheduler {
    /// Current virtual time since the scheduler was created.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Time left until `slot` elapses, if it is armed.
    #[must_use]
    pub fn remaining(&self, slot: TimerSlot) -> Option<Duration> {
        self.pending.get(&slot).map(|(due, _)| due.saturating_sub(self.now))
    }

    /// Removes and returns the earliest slot due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerSlot> {
        let (slot, due) = self
            .pending
            .iter()
            .min_by_key(|(_, (due, seq))| (*due, *seq))
            .map(|(slot, (due, _))| (*slot, *due))?;

        if due > until {
            return None;
        }

        self.pending.remove(&slot);
        self.now = self.now.max(due);
        Some(slot)
    }

    /// Moves the clock forward and returns every slot that elapsed, in order.
    ///
    /// Slots re-armed by the caller in reaction to an elapsed slot are not seen
    /// here; use [`pop_due`](Self::pop_due) in a loop for that.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerSlot> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(slot) = self.pop_due(until) {
            fired.push(slot);
        }
        self.now = until;
        fired
    }

    /// Sets the clock without firing anything. Used after a `pop_due` loop.
    pub fn settle(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, slot: TimerSlot, delay: Duration) {
        self.sequence += 1;
        let replaced = self.pending.insert(slot, (self.now + delay, self.sequence));
        tracing::trace!(?slot, ?delay, replaced = replaced.is_some(), "timer armed");
    }

    fn cancel(&mut self, slot: TimerSlot) {
        if self.pending.remove(&slot).is_some() {
            tracing::trace!(?slot, "timer cancelled");
        }
    }

    fn is_armed(&self, slot: TimerSlot) -> bool {
        self.pending.contains_key(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn rearming_replaces_the_pending_task() {
        let mut scheduler = ManualScheduler::default();
        scheduler.arm(TimerSlot::ClickSuppression, ms(300));
        assert!(scheduler.advance(ms(200)).is_empty());

        scheduler.arm(TimerSlot::ClickSuppression, ms(300));
        assert!(scheduler.advance(ms(200)).is_empty(), "first arm must not fire");
        assert_eq!(scheduler.advance(ms(100)), vec![TimerSlot::ClickSuppression]);
        assert!(scheduler.advance(ms(1000)).is_empty(), "fires only once");
    }

    #[test]
    fn cancelled_slot_never_fires() {
        let mut scheduler = ManualScheduler::default();
        scheduler.arm(TimerSlot::Redirect, ms(600));
        scheduler.cancel(TimerSlot::Redirect);
        assert!(!scheduler.is_armed(TimerSlot::Redirect));
        assert!(scheduler.advance(ms(600)).is_empty());
    }

    #[test]
    fn slots_fire_in_due_order() {
        let mut scheduler = ManualScheduler::default();
        scheduler.arm(TimerSlot::Redirect, ms(600));
        scheduler.arm(TimerSlot::HeaderTransition, ms(320));
        scheduler.arm(TimerSlot::ClickSuppression, ms(300));
        assert_eq!(scheduler.remaining(TimerSlot::Redirect), Some(ms(600)));
        assert_eq!(
            scheduler.advance(ms(600)),
            vec![TimerSlot::ClickSuppression, TimerSlot::HeaderTransition, TimerSlot::Redirect]
        );
        assert_eq!(scheduler.now(), ms(600));
    }

    #[test]
    fn nothing_fires_early() {
        let mut scheduler = ManualScheduler::default();
        scheduler.arm(TimerSlot::Redirect, ms(600));
        assert!(scheduler.advance(ms(599)).is_empty());
        assert_eq!(scheduler.remaining(TimerSlot::Redirect), Some(ms(1)));
        assert_eq!(scheduler.advance(ms(1)), vec![TimerSlot::Redirect]);
    }
}
