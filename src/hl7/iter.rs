//! Iterator adapters over the reader and over a message.
//!
//! 1. [`MessageIter`] - messages of an [`Hl7Reader`]
//! 2. [`SegmentIter`] - segments of a [`Message`]
//!
//! Both yield `Result`s and end after the first error, so a persistent
//! source failure cannot turn into an endless stream of errors.
//!
//! # Example
//! ```
//! use hl7_reader::Hl7Reader;
//!
//! let data: &[u8] = b"MSH|^~\\&|LAB\rPID|1||12345\rMSH|^~\\&|LAB\rPID|2||67890";
//! let reader = Hl7Reader::new(data);
//! for message in reader.messages() {
//!     let message = message.unwrap();
//!     for segment in message.segments() {
//!         println!("{}", segment.unwrap().segment_type());
//!     }
//! }
//! ```

use std::io::Read;

use super::message::Message;
use super::reader::Hl7Reader;
use super::tree::Segment;
use super::types::error::Result;

/// Iterator over the messages of a stream.
///
/// Created by [`Hl7Reader::messages()`].
pub struct MessageIter<'a, R> {
    reader: &'a Hl7Reader<R>,
    done: bool,
}

impl<'a, R: Read> MessageIter<'a, R> {
    pub(super) fn new(reader: &'a Hl7Reader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<'a, R: Read> Iterator for MessageIter<'a, R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_message() {
            Ok(Some(message)) => Some(Ok(message)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterator over the remaining segments of a message.
///
/// Created by [`Message::segments()`].
pub struct SegmentIter<'a> {
    message: &'a Message,
    done: bool,
}

impl<'a> SegmentIter<'a> {
    pub(super) fn new(message: &'a Message) -> Self {
        Self {
            message,
            done: false,
        }
    }
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.message.read_segment() {
            Ok(Some(segment)) => Some(Ok(segment)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
