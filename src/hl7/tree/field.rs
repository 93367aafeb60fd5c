use bytes::Bytes;

use super::{join, split, Component, FromSpan, Marshal, SubComponent};
use crate::hl7::types::models::Delimiters;

/// One occurrence of a field: an ordered list of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    components: Vec<Component>,
    delimiters: Delimiters,
}

impl Field {
    pub fn new(data: impl Into<Bytes>, delimiters: Delimiters) -> Self {
        Self::from_span(data.into(), delimiters)
    }

    pub fn component(&self, idx: usize) -> Option<&Component> {
        self.components.get(idx)
    }

    pub fn sub_component(&self, component_idx: usize, sub_idx: usize) -> Option<&SubComponent> {
        self.component(component_idx)?.sub_component(sub_idx)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }
}

impl Marshal for Field {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        join(&self.components, self.delimiters.component, out);
    }
}

impl FromSpan for Field {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self {
        Self {
            components: split(&span, delimiters.component, delimiters),
            delimiters,
        }
    }
}
