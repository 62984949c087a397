//! Timer module for the stopwatch core
//!
//! `TimerEngine` owns the elapsed time, the running/paused state and the lap
//! list. Time only advances through `tick()`, which the host calls whenever the
//! injected `TickScheduler` reports a due tick.

mod format;
mod scheduler;
mod timer_engine;
mod types;

// Re-export public types
pub use format::format_time;
pub use scheduler::{IntervalScheduler, ManualScheduler, TickScheduler};
pub use timer_engine::{TICK_INTERVAL_MS, TimerEngine};
pub use types::{Lap, PauseKind, TimerStatus};
