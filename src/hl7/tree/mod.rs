//! Hierarchical decomposition of a segment into its nested parts.
//!
//! ```text
//! Segment        split on the field separator        PID|a~b|c
//! └─ Fields      split on the repetition separator   a~b
//!    └─ Field    split on the component separator    x^y
//!       └─ Component   split on the sub-component separator   p&q
//!          └─ SubComponent   opaque leaf
//! ```
//!
//! Every level is produced by the same [`split`] routine and re-encoded by
//! the same [`join`] routine, parameterised only by the active separator and
//! the child type. Children are [`Bytes`] views into the message buffer, so
//! splitting never copies leaf data.

mod component;
mod field;
mod fields;
mod segment;
mod sub_component;

pub use component::Component;
pub use field::Field;
pub use fields::Fields;
pub use segment::Segment;
pub use sub_component::SubComponent;

use bytes::Bytes;
use memchr::memchr_iter;

use super::types::models::Delimiters;

/// Re-encodes a node into the exact bytes it was decoded from.
pub trait Marshal {
    /// Appends the encoded form of this node to `out`.
    fn marshal_into(&self, out: &mut Vec<u8>);

    /// Returns the encoded form of this node.
    fn to_hl7(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.marshal_into(&mut out);
        out
    }
}

/// Builds a node from one span of its parent.
pub(crate) trait FromSpan {
    fn from_span(span: Bytes, delimiters: Delimiters) -> Self;
}

/// Splits `span` on `separator`, building one child per delimited part.
///
/// An empty span has no children. Otherwise the final part is always
/// emitted, even when empty, so `a|` yields `["a", ""]`.
pub(crate) fn split<T: FromSpan>(span: &Bytes, separator: u8, delimiters: Delimiters) -> Vec<T> {
    if span.is_empty() {
        return Vec::new();
    }
    let mut children = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(separator, span) {
        children.push(T::from_span(span.slice(start..pos), delimiters));
        start = pos + 1;
    }
    children.push(T::from_span(span.slice(start..), delimiters));
    children
}

/// Writes `children` separated by `separator`; the inverse of [`split`].
pub(crate) fn join<T: Marshal>(children: &[T], separator: u8, out: &mut Vec<u8>) {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        child.marshal_into(out);
    }
}
