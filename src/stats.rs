//! Stats module for lap statistics
//!
//! Pure functions over a recorded lap list: fastest split, slowest split and
//! the average lap time. None of them mutate the laps.

mod lap_stats;
mod types;

// Re-export public types
pub use lap_stats::{average_lap_time, fastest_lap, slowest_lap};
pub use types::{LapAverage, LapRecord, LapStats};
