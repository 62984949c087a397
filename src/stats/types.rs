//! Type definitions for lap statistics

use std::fmt;

use super::lap_stats::{average_lap_time, fastest_lap, slowest_lap};
use crate::timer::{Lap, format_time};

/// A lap picked out by fastest/slowest, with the interval it was judged on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRecord {
    pub lap: Lap,
    pub interval_ms: u64,
    pub formatted_interval: String,
}

impl LapRecord {
    pub fn new(lap: Lap, interval_ms: u64) -> Self {
        Self {
            lap,
            interval_ms,
            formatted_interval: format_time(interval_ms),
        }
    }
}

impl fmt::Display for LapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lap {} ({})", self.lap.number(), self.formatted_interval)
    }
}

/// Average lap time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapAverage {
    /// Floored to whole milliseconds
    pub average_ms: u64,
    pub formatted_average: String,
}

impl LapAverage {
    pub fn new(average_ms: u64) -> Self {
        Self {
            average_ms,
            formatted_average: format_time(average_ms),
        }
    }
}

impl fmt::Display for LapAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted_average)
    }
}

/// All lap statistics at once, for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LapStats {
    pub fastest: Option<LapRecord>,
    pub slowest: Option<LapRecord>,
    pub average: Option<LapAverage>,
}

impl LapStats {
    pub fn compute(laps: &[Lap]) -> Self {
        Self {
            fastest: fastest_lap(laps),
            slowest: slowest_lap(laps),
            average: average_lap_time(laps),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
