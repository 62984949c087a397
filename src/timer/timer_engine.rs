use std::time::Duration;

use super::format::format_time;
use super::scheduler::TickScheduler;
use super::types::{Lap, PauseKind, TimerStatus};

/// Fixed amount of time added per tick, and the nominal tick period
pub const TICK_INTERVAL_MS: u64 = 10;

/// Stopwatch state machine
///
/// Every operation is defined in every state. Calls that make no sense in the
/// current state (lap while paused, stop while idle, ...) are ignored.
#[derive(Debug)]
pub struct TimerEngine<S: TickScheduler> {
    elapsed_ms: u64,
    status: TimerStatus,
    pause_kind: PauseKind,
    laps: Vec<Lap>,
    scheduler: S,
}

impl<S: TickScheduler> TimerEngine<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            elapsed_ms: 0,
            status: TimerStatus::Idle,
            pause_kind: PauseKind::Stopped,
            laps: Vec::new(),
            scheduler,
        }
    }

    pub fn start(&mut self) {
        if self.status == TimerStatus::Running {
            log::trace!("start ignored: already running");
            return;
        }

        self.status = TimerStatus::Running;
        self.scheduler.arm(Duration::from_millis(TICK_INTERVAL_MS));
        log::debug!("started at {}", format_time(self.elapsed_ms));
    }

    pub fn stop(&mut self) {
        self.halt(PauseKind::Stopped);
    }

    /// Same transition as `stop`, remembered as a pause for labelling
    pub fn pause(&mut self) {
        self.halt(PauseKind::Paused);
    }

    pub fn toggle_start_stop(&mut self) {
        if self.status == TimerStatus::Running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        if self.status == TimerStatus::Running {
            self.scheduler.cancel();
        }

        self.status = TimerStatus::Idle;
        self.pause_kind = PauseKind::Stopped;
        self.elapsed_ms = 0;
        self.laps.clear();
        log::debug!("reset");
    }

    /// Record a lap at the current elapsed time. Returns the new lap, or
    /// `None` when not running.
    pub fn record_lap(&mut self) -> Option<Lap> {
        if self.status != TimerStatus::Running {
            log::trace!("lap ignored: not running");
            return None;
        }

        let lap = Lap::new(next_lap_number(self.laps.len()), self.elapsed_ms);
        self.laps.push(lap);
        log::debug!("lap {} at {}", lap.number(), lap.formatted_time());
        Some(lap)
    }

    /// Advance by `TICK_INTERVAL_MS`. Ignored unless running, so a tick that
    /// fires after stop or reset cannot move the clock.
    pub fn tick(&mut self) {
        if self.status != TimerStatus::Running {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(TICK_INTERVAL_MS);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_ms)
    }

    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// How the engine left Running, if it is currently paused
    pub fn pause_kind(&self) -> Option<PauseKind> {
        match self.status {
            TimerStatus::Paused => Some(self.pause_kind),
            _ => None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn halt(&mut self, kind: PauseKind) {
        if self.status != TimerStatus::Running {
            log::trace!("{:?} ignored: not running", kind);
            return;
        }

        self.scheduler.cancel();
        self.status = TimerStatus::Paused;
        self.pause_kind = kind;
        log::debug!("{:?} at {}", kind, format_time(self.elapsed_ms));
    }
}

/// Number for the lap after `recorded` laps, pinned at `u32::MAX`
fn next_lap_number(recorded: usize) -> u32 {
    u32::try_from(recorded).map_or(u32::MAX, |n| n.saturating_add(1))
}

impl<S: TickScheduler + Default> Default for TimerEngine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
#[path = "timer_engine_tests.rs"]
mod timer_engine_tests;
