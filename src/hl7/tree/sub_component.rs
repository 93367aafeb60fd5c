use std::fmt;

use bytes::Bytes;
use chrono::NaiveDateTime;

use super::{FromSpan, Marshal};
use crate::hl7::format::{escape, time};
use crate::hl7::types::error::{Hl7Error, Result};
use crate::hl7::types::models::Delimiters;

/// The smallest addressable value of a message.
///
/// The raw bytes are kept verbatim. Escape sequences are only interpreted
/// when the value is displayed, and typed coercions only fail for the leaf
/// that was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubComponent {
    raw: Bytes,
    delimiters: Delimiters,
}

impl SubComponent {
    pub fn new(raw: impl Into<Bytes>, delimiters: Delimiters) -> Self {
        Self {
            raw: raw.into(),
            delimiters,
        }
    }

    /// The raw bytes, exactly as they appear in the message.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The value without any escape processing.
    pub fn dirty_string(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// Parses the raw value as a signed decimal integer.
    pub fn int(&self) -> Result<i64> {
        let value = self.dirty_string();
        value
            .parse::<i64>()
            .map_err(|source| Hl7Error::InvalidInteger { value, source })
    }

    /// Parses the raw value as a timestamp, picking the layout by length.
    ///
    /// See [`time::parse_timestamp`] for the accepted layouts.
    pub fn time(&self) -> Result<NaiveDateTime> {
        time::parse_timestamp(&self.raw)
    }
}

/// Renders the value with escape sequences and formatting directives applied.
impl fmt::Display for SubComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape::unescape(&self.raw, &self.delimiters))
    }
}

impl Marshal for SubComponent {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.raw);
    }
}

impl FromSpan for SubComponent {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self {
        Self::new(span, delimiters)
    }
}
