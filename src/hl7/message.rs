use std::sync::Mutex;

use bytes::Bytes;
use log::debug;
use memchr::memchr2;

use super::iter::SegmentIter;
use super::tree::{Marshal, Segment};
use super::types::error::{Hl7Error, Result};
use super::types::models::{Delimiters, CR, LF, SEGMENT_TERMINATOR};

/// A single HL7 message.
///
/// Segments can be consumed one at a time with [`read_segment`](Self::read_segment),
/// or all at once with [`parse`](Self::parse), which groups them by type.
/// Both share one cursor: segments handed out by `read_segment` are not seen
/// again by a later `parse`.
#[derive(Debug)]
pub struct Message {
    data: Bytes,
    delimiters: Delimiters,
    cursor: Mutex<usize>,
    segments: SegmentMap,
}

impl Message {
    /// Wraps the bytes of exactly one message and reads its delimiters.
    ///
    /// No segment is parsed here.
    ///
    /// # Errors
    /// [`Hl7Error::MessageTooShort`] when `data` is shorter than the 8 bytes
    /// needed to declare the delimiters.
    pub fn new(data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        let delimiters = Delimiters::from_header(&data)?;
        Ok(Self {
            data,
            delimiters,
            cursor: Mutex::new(0),
            segments: SegmentMap::default(),
        })
    }

    /// Reads the next segment, or `Ok(None)` when none are left.
    ///
    /// Whitespace between segments is skipped. A segment ends at the first
    /// CR or LF.
    pub fn read_segment(&self) -> Result<Option<Segment>> {
        let mut cursor = self.cursor.lock().map_err(|_| Hl7Error::LockPoisoned)?;
        Ok(next_segment_span(&self.data, &mut *cursor)
            .map(|span| Segment::new(span, self.delimiters)))
    }

    /// Returns an iterator over the remaining segments.
    pub fn segments(&self) -> SegmentIter<'_> {
        SegmentIter::new(self)
    }

    /// Reads every remaining segment and groups them by segment type.
    ///
    /// Replaces the result of any earlier call. The groups are available
    /// through [`segment_map`](Self::segment_map) and the lookup helpers.
    pub fn parse(&mut self) -> Result<()> {
        let mut segments = SegmentMap::default();
        while let Some(segment) = self.read_segment()? {
            segments.push(segment);
        }
        debug!(
            "parsed {} segment(s) of {} type(s)",
            segments.iter().map(|(_, group)| group.len()).sum::<usize>(),
            segments.len()
        );
        self.segments = segments;
        Ok(())
    }

    /// The segments grouped by [`parse`](Self::parse). Empty before it runs.
    pub fn segment_map(&self) -> &SegmentMap {
        &self.segments
    }

    /// All parsed segments of the given type, in message order.
    pub fn segments_of(&self, segment_type: &str) -> &[Segment] {
        self.segments.get(segment_type)
    }

    /// The first parsed segment of the given type.
    pub fn first_segment(&self, segment_type: &str) -> Option<&Segment> {
        self.segments_of(segment_type).first()
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// The message bytes as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Re-encodes every segment of the message, independent of the read cursor,
/// terminating segments with CR.
impl Marshal for Message {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        let mut cursor = 0;
        let mut first = true;
        while let Some(span) = next_segment_span(&self.data, &mut cursor) {
            if !first {
                out.push(SEGMENT_TERMINATOR);
            }
            first = false;
            Segment::new(span, self.delimiters).marshal_into(out);
        }
    }
}

/// Finds the next segment at or after `cursor` and moves the cursor past its
/// terminator.
fn next_segment_span(data: &Bytes, cursor: &mut usize) -> Option<Bytes> {
    let rest = &data[*cursor..];
    let start = *cursor
        + rest
            .iter()
            .position(|&b| !is_segment_padding(b))
            .unwrap_or(rest.len());
    let end = memchr2(CR, LF, &data[start..]).map_or(data.len(), |i| start + i);
    *cursor = (end + 1).min(data.len());
    if start == end {
        return None;
    }
    Some(data.slice(start..end))
}

/// ASCII whitespace plus vertical tab, which `u8::is_ascii_whitespace` leaves out.
fn is_segment_padding(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}

/// Segments grouped by type, keeping the order in which each type first
/// appeared.
#[derive(Debug, Clone, Default)]
pub struct SegmentMap {
    groups: Vec<(String, Vec<Segment>)>,
}

impl SegmentMap {
    /// Appends `segment` to the group of its type.
    pub fn push(&mut self, segment: Segment) {
        let segment_type = segment.segment_type();
        match self.groups.iter_mut().find(|(t, _)| *t == segment_type) {
            Some((_, group)) => group.push(segment),
            None => self.groups.push((segment_type, vec![segment])),
        }
    }

    /// The segments of one type; empty when the type never occurred.
    pub fn get(&self, segment_type: &str) -> &[Segment] {
        self.groups
            .iter()
            .find(|(t, _)| t == segment_type)
            .map(|(_, group)| group.as_slice())
            .unwrap_or_default()
    }

    /// Segment types in order of first appearance.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Segment])> {
        self.groups.iter().map(|(t, group)| (t.as_str(), group.as_slice()))
    }

    /// Number of distinct segment types.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
