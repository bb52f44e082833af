use chrono::{DateTime, SecondsFormat, Utc};
use std::cell::Cell;

thread_local! {
    static FIXED_NOW: Cell<Option<DateTime<Utc>>> = const { Cell::new(None) };
}

/// Pins "now" for the current thread while `f` runs.
///
/// Timestamps (`completedAt`, `capturedAt`) otherwise come from the system clock, which makes
/// stored records impossible to compare in tests. `None` uses the system clock.
pub fn with_fixed_now<R>(now: Option<DateTime<Utc>>, f: impl FnOnce() -> R) -> R {
    FIXED_NOW.with(|cell| {
        let prev = cell.replace(now);
        let out = f();
        cell.set(prev);
        out
    })
}

pub fn now() -> DateTime<Utc> {
    FIXED_NOW.with(|cell| cell.get()).unwrap_or_else(Utc::now)
}

/// ISO-8601 UTC timestamp with millisecond precision (`2025-01-31T09:30:00.000Z`).
pub fn now_rfc3339() -> String {
    now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
