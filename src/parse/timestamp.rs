//! Reconstruction of UTC instants from the `{date, time}` pairs used throughout PI_JSON.

use crate::parse::error::ParseError;
use crate::types::raw::RawDateTime;
use chrono::{DateTime, NaiveDate, Utc};

/// Splits `s` on `separator` into exactly three integer components.
fn split_triple(s: &str, separator: char) -> Option<[u32; 3]> {
    let mut parts = s.split(separator).map(|p| p.trim().parse::<u32>());
    let triple = [parts.next()?.ok()?, parts.next()?.ok()?, parts.next()?.ok()?];
    if parts.next().is_some() {
        return None;
    }
    Some(triple)
}

/// Decodes a `"YYYY-MM-DD"` date and a `"HH:MM:SS"` time into a UTC instant.
///
/// The wall clock is taken as UTC as-is; no time zone shift is applied.
///
/// # Errors
///
/// Returns [`ParseError::MalformedTimestamp`] if either string does not split into
/// three numeric components, or if they do not form a valid calendar instant.
pub fn decode_timestamp(date: &str, time: &str) -> Result<DateTime<Utc>, ParseError> {
    let malformed = || ParseError::MalformedTimestamp {
        date: date.to_string(),
        time: time.to_string(),
    };
    let [year, month, day] = split_triple(date, '-').ok_or_else(malformed)?;
    let [hour, minute, second] = split_triple(time, ':').ok_or_else(malformed)?;
    let year = i32::try_from(year).map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .map(|naive| naive.and_utc())
        .ok_or_else(malformed)
}

/// Decodes a wire `{date, time}` object.
pub fn decode_pi_datetime(raw: &RawDateTime) -> Result<DateTime<Utc>, ParseError> {
    let date = raw.date.as_deref().ok_or(ParseError::MissingField("date"))?;
    let time = raw.time.as_deref().ok_or(ParseError::MissingField("time"))?;
    decode_timestamp(date, time)
}
