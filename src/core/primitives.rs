use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parses an upstream timestamp label into UTC.
///
/// Accepts RFC 3339, naive ISO date-times (`T` or space separated, optional
/// fractional seconds) and plain dates with `-`, `/` or `.` separators. Plain
/// dates resolve to midnight UTC. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

/// Converts epoch milliseconds into UTC, rejecting non-finite or out-of-range input.
#[must_use]
pub fn timestamp_from_unix_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}

/// Returns a finite `f64` or `None`; NaN and infinities count as missing.
#[must_use]
pub fn finite_or_missing(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[must_use]
pub fn decimal_to_f64(value: Decimal) -> Option<f64> {
    value.to_f64().and_then(finite_or_missing)
}
