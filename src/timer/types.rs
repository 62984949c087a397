//! Type definitions for timer state

use std::fmt;

use super::format::format_time;

/// Lifecycle state of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    /// Never started, or just reset
    #[default]
    Idle,
    Running,
    /// Halted with elapsed time and laps retained
    Paused,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerStatus::Idle => write!(f, "Idle"),
            TimerStatus::Running => write!(f, "Running"),
            TimerStatus::Paused => write!(f, "Paused"),
        }
    }
}

/// Which operation moved the engine out of Running
///
/// Both behave the same; only the start button label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    Stopped,
    Paused,
}

/// A recorded lap split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    number: u32,
    cumulative_ms: u64,
}

impl Lap {
    pub fn new(number: u32, cumulative_ms: u64) -> Self {
        Self {
            number,
            cumulative_ms,
        }
    }

    /// 1-based position in the lap list
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Elapsed time when the lap was recorded
    pub fn cumulative_ms(&self) -> u64 {
        self.cumulative_ms
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.cumulative_ms)
    }
}
