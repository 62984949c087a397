use super::types::{LapAverage, LapRecord};
use crate::timer::Lap;

/// Lap with the shortest split
///
/// A single lap is reported with its own cumulative time. From two laps on,
/// only the gaps between consecutive laps are compared, so lap 1 can no
/// longer win. Ties go to the earlier lap.
pub fn fastest_lap(laps: &[Lap]) -> Option<LapRecord> {
    extreme_lap(laps, |candidate, best| candidate < best)
}

/// Lap with the longest split. Same rules as `fastest_lap`.
pub fn slowest_lap(laps: &[Lap]) -> Option<LapRecord> {
    extreme_lap(laps, |candidate, best| candidate > best)
}

/// Time at the last lap divided by the number of laps
///
/// Needs at least two laps.
pub fn average_lap_time(laps: &[Lap]) -> Option<LapAverage> {
    if laps.len() < 2 {
        return None;
    }

    let last = laps.last()?;
    Some(LapAverage::new(last.cumulative_ms() / laps.len() as u64))
}

fn extreme_lap(laps: &[Lap], beats: impl Fn(u64, u64) -> bool) -> Option<LapRecord> {
    let (first, rest) = laps.split_first()?;
    if rest.is_empty() {
        return Some(LapRecord::new(*first, first.cumulative_ms()));
    }

    let mut best: Option<(Lap, u64)> = None;
    for pair in laps.windows(2) {
        let interval = pair[1]
            .cumulative_ms()
            .saturating_sub(pair[0].cumulative_ms());

        match best {
            Some((_, best_interval)) if !beats(interval, best_interval) => {}
            _ => best = Some((pair[1], interval)),
        }
    }

    best.map(|(lap, interval)| LapRecord::new(lap, interval))
}

#[cfg(test)]
#[path = "lap_stats_tests.rs"]
mod lap_stats_tests;
