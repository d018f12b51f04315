use chrono::{DateTime, Utc};
use std::time::SystemTime;

pub fn now_iso() -> String {
    let now: DateTime<Utc> = SystemTime::now().into();
    now.to_rfc3339()
}

/// Microseconds since the Unix epoch. A clock set before the epoch reads as 0.
pub fn now_micros() -> u64 {
    micros_since_epoch(Utc::now())
}

/// Seconds since the Unix epoch, at microsecond resolution.
pub fn time_in_seconds() -> f64 {
    seconds_since_epoch(Utc::now())
}

fn micros_since_epoch(t: DateTime<Utc>) -> u64 {
    u64::try_from(t.timestamp_micros()).unwrap_or(0)
}

fn seconds_since_epoch(t: DateTime<Utc>) -> f64 {
    t.timestamp_micros() as f64 / 1e6
}
