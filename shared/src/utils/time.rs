//! Time-related utilities

use std::time::{Duration, Instant};

/// Convert a [`Duration`] to whole nanoseconds, saturating at `u64::MAX`
pub fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Nanoseconds elapsed on the monotonic clock since `epoch`
pub fn monotonic_nanos_since(epoch: Instant) -> u64 {
    duration_nanos(epoch.elapsed())
}

/// Truncating nanosecond to microsecond conversion
pub fn nanos_to_micros(ns: u64) -> u64 {
    ns / 1_000
}

/// Truncating nanosecond to millisecond conversion
pub fn nanos_to_millis(ns: u64) -> u64 {
    ns / 1_000_000
}
