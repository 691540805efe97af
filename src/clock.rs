use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// `[start of today, start of today + 24h)` for the calendar day of `now`.
///
/// An ambiguous midnight resolves to its earlier instant. A midnight skipped
/// by a DST jump falls back to `now` minus the wall-clock time elapsed today.
pub fn day_window<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
    let local = now.naive_local();
    let midnight = local.date().and_time(NaiveTime::MIN);
    let start = now
        .timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| now.clone() - (local - midnight));
    let end = start.clone() + Duration::hours(24);
    (start, end)
}
