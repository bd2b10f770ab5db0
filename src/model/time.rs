use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a dataset timestamp as a UTC instant.
///
/// Accepts RFC 3339 with an offset, a bare date-time (taken as UTC) and a bare
/// date (midnight UTC). Anything else is unparsable and yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD` in UTC, as used on chart axes.
pub fn utc_date_label(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Short month and year, e.g. `Aug 2025`.
pub fn month_year_label(instant: &DateTime<Utc>) -> String {
    instant.format("%b %Y").to_string()
}
