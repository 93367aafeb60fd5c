//! Core HL7 v2 reader module.
//!
//! # Module Organization
//!
//! - [`reader`]: message boundary detection over a byte stream
//! - [`message`]: header delimiters and segment streaming
//! - [`tree`]: segment → fields → field → component → sub-component
//! - [`format`]: escape substitution and typed leaf values
//! - [`iter`]: iterator adapters
//! - [`types`]: delimiters, constants and errors
//!
//! # Data Flow
//!
//! ```text
//! byte stream ──► Hl7Reader ──► Message ──► Segment ──► Fields ──► Field ──► Component ──► SubComponent
//!                 (boundaries)  (header)    (field sep) (repeat)   (comp)    (sub-comp)    (leaf)
//! ```

pub mod format;
pub mod iter;
pub mod message;
pub mod reader;
mod source;
pub mod tree;
pub mod types;

pub use format::escape::{format_text, parse_repetition, MAX_REPETITION};
pub use message::{Message, SegmentMap};
pub use reader::Hl7Reader;
pub use tree::{Component, Field, Fields, Marshal, Segment, SubComponent};
pub use types::error::{Hl7Error, Result};
pub use types::models::Delimiters;
