//! Timestamp coercion for leaf values.

use chrono::NaiveDateTime;

use crate::hl7::types::error::{Hl7Error, Result};

/// Parses a timestamp, choosing the layout purely by the byte length of `raw`.
///
/// | Length | Layout                 |
/// |--------|------------------------|
/// | 8      | `YYYYMMDD`             |
/// | 10     | `YYYYMMDDHH`           |
/// | 12     | `YYYYMMDDHHMM`         |
/// | 14     | `YYYYMMDDHHMMSS`       |
/// | 16–19  | `YYYYMMDDHHMMSS.F` with one to four fraction digits |
///
/// Values carry no offset and are returned as naive date-times.
///
/// # Errors
/// [`Hl7Error::UnknownTimeFormat`] for any other length, or when the digits
/// do not form a valid date and time.
pub fn parse_timestamp(raw: &[u8]) -> Result<NaiveDateTime> {
    let unknown = || Hl7Error::UnknownTimeFormat {
        value: String::from_utf8_lossy(raw).into_owned(),
    };
    let text = std::str::from_utf8(raw).map_err(|_| unknown())?;

    let parsed = match raw.len() {
        // chrono needs at least the minute to build a time.
        8 => NaiveDateTime::parse_from_str(&format!("{text}0000"), "%Y%m%d%H%M"),
        10 => NaiveDateTime::parse_from_str(&format!("{text}00"), "%Y%m%d%H%M"),
        12 => NaiveDateTime::parse_from_str(text, "%Y%m%d%H%M"),
        14 => NaiveDateTime::parse_from_str(text, "%Y%m%d%H%M%S"),
        16..=19 if raw[14] == b'.' => NaiveDateTime::parse_from_str(text, "%Y%m%d%H%M%S%.f"),
        _ => return Err(unknown()),
    };
    parsed.map_err(|_| unknown())
}
