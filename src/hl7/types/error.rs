//! Custom error types for the hl7-reader crate.

use std::num::ParseIntError;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Running out of input is never an error: readers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum Hl7Error {
    /// An error originating from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The message is too short to hold the delimiter declarations of its header.
    #[error("Message too short: {len} bytes, at least 8 are required to declare the delimiters")]
    MessageTooShort { len: usize },

    /// A leaf value could not be read as an integer.
    #[error("Invalid integer value {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A leaf value has a length or shape that matches none of the timestamp layouts.
    #[error("Unknown time format: {value:?}")]
    UnknownTimeFormat { value: String },

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `Hl7Error` type.
pub type Result<T> = std::result::Result<T, Hl7Error>;
