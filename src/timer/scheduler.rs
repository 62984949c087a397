//! Periodic tick scheduling
//!
//! The engine never owns a timer primitive. It arms and cancels a
//! `TickScheduler`, and whoever hosts the engine asks the scheduler when the
//! next tick is due.

use std::time::{Duration, Instant};

/// Scheduling port injected into `TimerEngine`
pub trait TickScheduler {
    /// Begin firing every `interval`. Re-arming restarts the schedule.
    fn arm(&mut self, interval: Duration);

    /// Stop firing. Must be idempotent.
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}

/// Wall-clock scheduler for the terminal host loop
///
/// Fires at most once per poll and re-arms from the firing instant, so a slow
/// host loop makes the stopwatch lag rather than catch up.
#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the next tick, or `None` when not armed
    pub fn time_until_due(&self) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(Instant::now()))
    }

    /// Consume a due tick. Returns true when the caller should tick the engine.
    pub fn fire_if_due(&mut self) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };

        let now = Instant::now();
        if now < due {
            return false;
        }

        self.next_due = Some(now + self.interval);
        true
    }
}

impl TickScheduler for IntervalScheduler {
    fn arm(&mut self, interval: Duration) {
        self.interval = interval;
        self.next_due = Some(Instant::now() + interval);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Scheduler that never fires on its own
///
/// For hosts (and tests) that call `TimerEngine::tick` themselves. It counts
/// arm/cancel calls so the cancellation contract can be checked.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    armed: bool,
    interval: Option<Duration>,
    arm_count: usize,
    cancel_count: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval passed to the most recent `arm`
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) {
        self.armed = true;
        self.interval = Some(interval);
        self.arm_count += 1;
    }

    fn cancel(&mut self) {
        self.armed = false;
        self.cancel_count += 1;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
