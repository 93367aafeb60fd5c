use bytes::Bytes;

use super::{join, split, Component, Field, FromSpan, Marshal, SubComponent};
use crate::hl7::types::models::Delimiters;

/// A field slot together with all of its repetitions.
///
/// A slot that does not repeat holds exactly one [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    repetitions: Vec<Field>,
    delimiters: Delimiters,
}

impl Fields {
    pub fn new(data: impl Into<Bytes>, delimiters: Delimiters) -> Self {
        Self::from_span(data.into(), delimiters)
    }

    /// Returns the repetition at `idx`.
    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.repetitions.get(idx)
    }

    pub fn component(&self, repetition_idx: usize, component_idx: usize) -> Option<&Component> {
        self.field(repetition_idx)?.component(component_idx)
    }

    pub fn sub_component(
        &self,
        repetition_idx: usize,
        component_idx: usize,
        sub_idx: usize,
    ) -> Option<&SubComponent> {
        self.field(repetition_idx)?.sub_component(component_idx, sub_idx)
    }

    /// Number of repetitions.
    pub fn len(&self) -> usize {
        self.repetitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repetitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.repetitions.iter()
    }
}

impl Marshal for Fields {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        join(&self.repetitions, self.delimiters.repetition, out);
    }
}

impl FromSpan for Fields {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self {
        Self {
            repetitions: split(&span, delimiters.repetition, delimiters),
            delimiters,
        }
    }
}
