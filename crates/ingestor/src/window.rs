//! Splitting `[from, now]` into consecutive, bounded-length windows.

use chrono::{DateTime, Utc};

/// Half-open upper bound on a single ingestion window, matching the
/// specification's 30-day (2,592,000 second) cap.
pub const WINDOW_SECS: i64 = 2_592_000;

/// Split `[from, now]` into consecutive windows of at most [`WINDOW_SECS`],
/// with the final window ending exactly at `now`. Returns an empty vec if
/// `from >= now`.
pub fn split_windows(from: DateTime<Utc>, now: DateTime<Utc>) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if from >= now {
        return Vec::new();
    }
    let mut windows = Vec::new();
    let mut cursor = from;
    while cursor < now {
        let window_end = (cursor + chrono::Duration::seconds(WINDOW_SECS)).min(now);
        windows.push((cursor, window_end));
        cursor = window_end;
    }
    windows
}
