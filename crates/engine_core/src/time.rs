//! Wall-clock time in milliseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub type TimePoint = i64;

/// Current wall-clock time. A clock set before 1970 reads as 0.
pub fn now() -> TimePoint {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| TimePoint::try_from(d.as_millis()).unwrap_or(TimePoint::MAX))
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
