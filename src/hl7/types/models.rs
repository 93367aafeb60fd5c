//! Core data structures shared by every layer of the parser.
//!
//! - Byte constants for the header literal and message/segment boundaries
//! - The per-message delimiter set

use super::error::{Hl7Error, Result};

/// Segment type literal that opens every message.
pub const HEADER_SEGMENT: &[u8; 3] = b"MSH";

/// A header is only usable once all five delimiter declarations are present.
pub const MIN_HEADER_LEN: usize = 8;

/// Carriage return.
pub const CR: u8 = b'\r';
/// Line feed.
pub const LF: u8 = b'\n';
/// Form feed.
pub const FF: u8 = 0x0c;
/// Null byte.
pub const NUL: u8 = 0x00;

/// Byte written between segments when a whole message is marshaled.
pub const SEGMENT_TERMINATOR: u8 = CR;

/// The five delimiter bytes declared by a message header.
///
/// Header layout (byte offsets from the start of the message):
/// - 0..3: `MSH`
/// - 3: field separator
/// - 4: component separator
/// - 5: repetition separator
/// - 6: escape character
/// - 7: sub-component separator
///
/// A `Delimiters` value is fixed for the lifetime of one message, but two
/// messages read from the same stream are free to disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
    pub field: u8,
    pub component: u8,
    pub repetition: u8,
    pub escape: u8,
    pub sub_component: u8,
}

impl Delimiters {
    /// Reads the delimiter declarations from the fixed header offsets.
    ///
    /// # Errors
    /// Returns [`Hl7Error::MessageTooShort`] when `header` has fewer than
    /// [`MIN_HEADER_LEN`] bytes. The declared bytes themselves are not
    /// validated; a header of eight identical bytes is accepted.
    pub fn from_header(header: &[u8]) -> Result<Self> {
        if header.len() < MIN_HEADER_LEN {
            return Err(Hl7Error::MessageTooShort { len: header.len() });
        }
        Ok(Self {
            field: header[3],
            component: header[4],
            repetition: header[5],
            escape: header[6],
            sub_component: header[7],
        })
    }
}

impl Default for Delimiters {
    /// The conventional `|^~\&` set.
    fn default() -> Self {
        Self {
            field: b'|',
            component: b'^',
            repetition: b'~',
            escape: b'\\',
            sub_component: b'&',
        }
    }
}
