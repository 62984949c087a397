const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;
const MS_PER_CENTISECOND: u64 = 10;

/// Format milliseconds as "MM:SS:CC" (minutes, seconds, hundredths)
///
/// Minutes are not wrapped into hours, so anything past 99 minutes simply
/// grows the first field (`100:00:00`).
pub fn format_time(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let seconds = (ms / MS_PER_SECOND) % 60;
    let centis = (ms % MS_PER_SECOND) / MS_PER_CENTISECOND;
    format!("{:02}:{:02}:{:02}", minutes, seconds, centis)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
