//! Relative timestamps for share listings.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, Utc};

const UNITS: [(&str, i64); 7] = [
    ("year", 365 * 24 * 3600),
    ("month", 30 * 24 * 3600),
    ("week", 7 * 24 * 3600),
    ("day", 24 * 3600),
    ("hour", 3600),
    ("minute", 60),
    ("second", 1),
];

/// Describe an RFC 3339 timestamp relative to `now`, e.g. `"5 minutes ago"`
/// or `"in 2 days"`. Unparseable input is returned unchanged.
pub fn iso_to_relative(iso: &str, now: DateTime<Utc>) -> String {
    let Ok(at) = DateTime::parse_from_rfc3339(iso) else {
        return iso.to_owned();
    };
    let delta = at.with_timezone(&Utc).signed_duration_since(now).num_seconds();
    let magnitude = delta.abs();
    if magnitude < 10 {
        return "just now".to_owned();
    }
    let (unit, size) = UNITS.iter().copied().find(|(_, size)| magnitude >= *size).unwrap_or(("second", 1));
    let count = magnitude / size;
    let plural = if count == 1 { "" } else { "s" };
    if delta < 0 { format!("{count} {unit}{plural} ago") } else { format!("in {count} {unit}{plural}") }
}

/// [`iso_to_relative`] against the current clock.
pub fn iso_to_relative_now(iso: &str) -> String {
    iso_to_relative(iso, Utc::now())
}
