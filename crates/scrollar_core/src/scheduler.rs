//! Update scheduler
//!
//! Tracks the timers that trigger geometry recomputation: the one-shot
//! settle delay after construction and the optional polling interval.
//! Time is supplied by the host through [`UpdateScheduler::tick`], so the
//! scheduler itself never reads a clock.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

/// Delay before the first recompute, giving layout a chance to settle
pub const SETTLE_DELAY_MS: u64 = 20;

/// Polling intervals below this are treated as "polling disabled"
pub const MIN_POLL_INTERVAL_MS: u64 = 30;

new_key_type! {
    /// Unique identifier for a scheduled timer
    pub struct TimerId;
}

/// Why a recompute was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateReason {
    /// Initial settle delay elapsed
    Settle,
    /// Polling interval elapsed
    Poll,
    /// Environment resized
    Resize,
    /// Content replaced through the content interface
    Content,
    /// Explicit `update()` call
    Manual,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    reason: UpdateReason,
    deadline_ms: u64,
    period_ms: Option<u64>,
}

/// Timers that fire recomputes
#[derive(Debug)]
pub struct UpdateScheduler {
    timers: SlotMap<TimerId, Timer>,
    now_ms: u64,
}

impl UpdateScheduler {
    pub fn new(now_ms: u64) -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms,
        }
    }

    /// Last time seen by the scheduler
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire once, `delay_ms` from now
    pub fn schedule_once(&mut self, reason: UpdateReason, delay_ms: u64) -> TimerId {
        self.timers.insert(Timer {
            reason,
            deadline_ms: self.now_ms.saturating_add(delay_ms),
            period_ms: None,
        })
    }

    /// Fire every `period_ms`, first time one period from now
    pub fn schedule_every(&mut self, reason: UpdateReason, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.timers.insert(Timer {
            reason,
            deadline_ms: self.now_ms.saturating_add(period_ms),
            period_ms: Some(period_ms),
        })
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Release every timer
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Repeat period of a timer, if it is a live interval
    pub fn period(&self, id: TimerId) -> Option<u64> {
        self.timers.get(id).and_then(|t| t.period_ms)
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|t| t.deadline_ms).min()
    }

    /// Advance to `now_ms` and return the reasons of every timer that fired.
    ///
    /// An interval that missed several periods fires once and is rescheduled
    /// past `now_ms`. Time never moves backwards.
    pub fn tick(&mut self, now_ms: u64) -> SmallVec<[UpdateReason; 2]> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due: SmallVec<[(u64, TimerId); 2]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline_ms <= now)
            .map(|(id, t)| (t.deadline_ms, id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        let mut fired = SmallVec::new();
        for (_, id) in due {
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            fired.push(timer.reason);
            match timer.period_ms {
                Some(period) => {
                    let behind = (now - timer.deadline_ms) / period + 1;
                    timer.deadline_ms += behind * period;
                }
                None => {
                    self.timers.remove(id);
                }
            }
        }

        if !fired.is_empty() {
            trace!(now, ?fired, "scheduler fired");
        }
        fired
    }
}
