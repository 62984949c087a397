//! lapwatch: a stopwatch with lap splits and lap statistics
//!
//! The core (`timer`, `stats`) has no terminal or platform dependencies.
//! `app` is the terminal front end that drives it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod logging;
pub mod stats;
pub mod timer;
pub mod widgets;


pub use error::LapwatchError;
pub use stats::{LapAverage, LapRecord, LapStats, average_lap_time, fastest_lap, slowest_lap};
pub use timer::{
    IntervalScheduler, Lap, ManualScheduler, PauseKind, TICK_INTERVAL_MS, TickScheduler,
    TimerEngine, TimerStatus, format_time,
};
