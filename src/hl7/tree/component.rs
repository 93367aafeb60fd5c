use bytes::Bytes;

use super::{join, split, FromSpan, Marshal, SubComponent};
use crate::hl7::types::models::Delimiters;

/// An ordered list of sub-components, split on the sub-component separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    sub_components: Vec<SubComponent>,
    delimiters: Delimiters,
}

impl Component {
    pub fn new(data: impl Into<Bytes>, delimiters: Delimiters) -> Self {
        Self::from_span(data.into(), delimiters)
    }

    pub fn sub_component(&self, idx: usize) -> Option<&SubComponent> {
        self.sub_components.get(idx)
    }

    pub fn len(&self) -> usize {
        self.sub_components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubComponent> {
        self.sub_components.iter()
    }
}

impl Marshal for Component {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        join(&self.sub_components, self.delimiters.sub_component, out);
    }
}

impl FromSpan for Component {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self {
        Self {
            sub_components: split(&span, delimiters.sub_component, delimiters),
            delimiters,
        }
    }
}
