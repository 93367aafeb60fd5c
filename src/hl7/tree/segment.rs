use bytes::Bytes;

use super::{join, split, Component, Field, Fields, FromSpan, Marshal, SubComponent};
use crate::hl7::types::models::Delimiters;

/// One line of a message: an ordered list of field slots.
///
/// Indices are zero-based and count the segment type itself, so for
/// `PID|1|12345` slot 0 is `PID` and slot 2 is `12345`. Every accessor
/// returns `None` for an index that is out of range at any level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    fields: Vec<Fields>,
    delimiters: Delimiters,
}

impl Segment {
    pub fn new(data: impl Into<Bytes>, delimiters: Delimiters) -> Self {
        Self::from_span(data.into(), delimiters)
    }

    /// The segment type, e.g. `MSH` or `PID`. Empty for an empty segment.
    pub fn segment_type(&self) -> String {
        self.sub_component(0, 0, 0, 0)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// The field slot at `idx`, with all of its repetitions.
    pub fn fields(&self, idx: usize) -> Option<&Fields> {
        self.fields.get(idx)
    }

    pub fn field(&self, field_idx: usize, repetition_idx: usize) -> Option<&Field> {
        self.fields(field_idx)?.field(repetition_idx)
    }

    pub fn component(
        &self,
        field_idx: usize,
        repetition_idx: usize,
        component_idx: usize,
    ) -> Option<&Component> {
        self.fields(field_idx)?.component(repetition_idx, component_idx)
    }

    pub fn sub_component(
        &self,
        field_idx: usize,
        repetition_idx: usize,
        component_idx: usize,
        sub_idx: usize,
    ) -> Option<&SubComponent> {
        self.fields(field_idx)?
            .sub_component(repetition_idx, component_idx, sub_idx)
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Number of field slots, including the segment type.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fields> {
        self.fields.iter()
    }
}

impl Marshal for Segment {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        join(&self.fields, self.delimiters.field, out);
    }
}

impl FromSpan for Segment {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self {
        Self {
            fields: split(&span, delimiters.field, delimiters),
            delimiters,
        }
    }
}
