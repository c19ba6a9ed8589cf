// Lenient parsing of wire timestamps into instants on a local calendar.
//
// Accepted shapes
// - RFC 3339 with an offset, converted into the target zone.
// - Naive "YYYY-MM-DDTHH:MM[:SS[.f]]" or with a space separator, read as local time.
// - Date only "YYYY-MM-DD", read as UTC midnight.
//
// Everything else is rejected with None; callers decide whether that drops a record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(tz));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        // Folds resolve to the earlier instant; gaps have no instant at all.
        return tz.from_local_datetime(&naive).earliest();
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
        .map(|utc| utc.with_timezone(tz))
}

/// 24-hour, zero padded, so lexicographic order matches chronological order within a day.
pub fn time_label<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format("%H:%M").to_string()
}
