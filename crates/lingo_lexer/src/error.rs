//! Error types for matcher construction, priority-list access, and scanning.
//!
//! Three categories, each with its own type or variants:
//! - precondition violations ([`MatcherError`], most of [`ListError`],
//!   construction-time [`ScanError`] variants) are reported at the call that
//!   violated them;
//! - cursor misuse ([`ListError::ConcurrentModification`],
//!   [`ListError::IllegalState`]) is reported by the cursor step that noticed it;
//! - [`UnsortedList`] means the list broke its own ordering invariant and is a
//!   bug, never a condition to recover from.
//!
//! End of input is not an error anywhere in this crate.

use std::io;

use thiserror::Error;

/// A matcher could not be built from the given arguments.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// A character matcher was given text that is not exactly one character.
    #[error("character matcher needs exactly one character, got {text:?}")]
    NotACharacter { text: String },
    /// A pattern matcher was given a regular expression that does not compile.
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// A priority list or token list operation was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// `index` is not a valid position in a list of `len` elements.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// `from..to` is not a valid range in a list of `len` elements.
    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },
    /// The list was structurally changed by something other than this cursor.
    #[error("list modified outside the cursor (expected modification {expected}, found {found})")]
    ConcurrentModification { expected: u64, found: u64 },
    /// `operation` needs a preceding `next` or `previous` on the cursor.
    #[error("cursor must call next or previous before {operation}")]
    IllegalState { operation: &'static str },
    /// The cursor has no element in the requested direction.
    #[error("no more elements")]
    NoSuchElement,
}

/// The priority list is not sorted: an internal-consistency failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("priority list unsorted at index {index}: priority {current} follows {previous}")]
pub struct UnsortedList {
    /// Index of the first element out of order.
    pub index: usize,
    /// Priority of the element before `index`.
    pub previous: i32,
    /// Priority of the element at `index`.
    pub current: i32,
}

/// Scanner construction or scanning failed.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading from the backing stream failed. Fatal to the scan.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// A word grew past the configured maximum length.
    #[error("word exceeds {limit} bytes at input offset {offset}")]
    WordTooLong { limit: usize, offset: u64 },
    /// `scan` was called on a scanner that already ran.
    #[error("scanner has already run")]
    AlreadyScanned,
    /// The whitespace matcher must be a character matcher.
    #[error("whitespace matcher must match single characters")]
    WhitespaceNotCharacter,
    /// A stream-backed scanner needs a non-empty read buffer.
    #[error("read buffer size must be at least 1")]
    ZeroBufferSize,
}
