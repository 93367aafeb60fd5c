//! # hl7-reader
//!
//! A streaming reader for pipe-delimited HL7 v2 messages.
//!
//! Messages are detected inside any byte stream, even when files mix CR, LF,
//! CRLF and form-feed separators. Each message decodes lazily into a tree of
//! segments, fields, repetitions, components and sub-components, and every
//! level can be re-encoded byte for byte.
//!
//! # Example
//! ```
//! use hl7_reader::{Hl7Reader, Marshal};
//!
//! let data: &[u8] = b"MSH|^~\\&|LAB|HOSP\rPID|1||12345^^^MRN~67890^^^SSN||DOE^JOHN";
//! let reader = Hl7Reader::new(data);
//! let mut message = reader.read_message().unwrap().expect("one message");
//! message.parse().unwrap();
//!
//! let pid = message.first_segment("PID").unwrap();
//! assert_eq!(pid.sub_component(3, 1, 0, 0).unwrap().to_string(), "67890");
//! assert_eq!(pid.to_hl7(), b"PID|1||12345^^^MRN~67890^^^SSN||DOE^JOHN");
//! ```
pub mod hl7;

// Re-export the main types for convenience
pub use hl7::{
    format_text,
    parse_repetition,
    Component,
    Delimiters,
    Field,
    Fields,
    Hl7Error,
    Hl7Reader,
    Marshal,
    Message,
    Result,
    Segment,
    SegmentMap,
    SubComponent,
    MAX_REPETITION,
};
