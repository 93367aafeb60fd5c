//! Leaf value interpretation: escape sequences, formatting directives and
//! timestamp layouts.
//!
//! Nothing in here runs while a message is split. These functions are only
//! reached when a caller asks a [`SubComponent`](crate::hl7::tree::SubComponent)
//! for its display string or a typed value.

pub mod escape;
pub mod time;
