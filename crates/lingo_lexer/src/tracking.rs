//! Fail-fast bookkeeping shared by the detached list cursors.
//!
//! A detached cursor does not borrow its list between steps, so the borrow
//! checker cannot stop other code from changing the list in between. Instead
//! every list counts its structural modifications; a cursor captures the count
//! when created and compares it on every step. Changes made through the cursor
//! itself re-capture the count.

use crate::error::ListError;

/// Cursor position between elements, plus the element last stepped over.
///
/// `index` is the position of the element `next` would return. `last` is
/// the index returned by the most recent `next`/`previous`, cleared by any
/// mutation through the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CursorState {
    index: usize,
    last: Option<usize>,
    expected: u64,
}

impl CursorState {
    pub(crate) fn new(index: usize, modifications: u64) -> Self {
        CursorState {
            index,
            last: None,
            expected: modifications,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn check(&self, found: u64) -> Result<(), ListError> {
        if self.expected == found {
            Ok(())
        } else {
            Err(ListError::ConcurrentModification {
                expected: self.expected,
                found,
            })
        }
    }

    /// Move forward over one element; returns its index.
    pub(crate) fn step_forward(&mut self, len: usize, found: u64) -> Result<usize, ListError> {
        self.check(found)?;
        if self.index >= len {
            return Err(ListError::NoSuchElement);
        }
        let current = self.index;
        self.index += 1;
        self.last = Some(current);
        Ok(current)
    }

    /// Move backward over one element; returns its index.
    ///
    /// A position past `len` means the cursor is used on a list it did not
    /// come from.
    pub(crate) fn step_back(&mut self, len: usize, found: u64) -> Result<usize, ListError> {
        self.check(found)?;
        if self.index == 0 {
            return Err(ListError::NoSuchElement);
        }
        if self.index > len {
            return Err(ListError::IndexOutOfBounds {
                index: self.index - 1,
                len,
            });
        }
        self.index -= 1;
        self.last = Some(self.index);
        Ok(self.index)
    }

    /// Claim the last stepped-over index for `operation` (which will remove it).
    ///
    /// The cursor moves to that index, the position the following element
    /// slides into.
    pub(crate) fn take_last(
        &mut self,
        found: u64,
        operation: &'static str,
    ) -> Result<usize, ListError> {
        self.check(found)?;
        let last = self
            .last
            .take()
            .ok_or(ListError::IllegalState { operation })?;
        self.index = last;
        Ok(last)
    }

    /// Account for an element inserted at `at` by this cursor.
    ///
    /// Elements landing at or before the cursor end up behind it.
    pub(crate) fn inserted(&mut self, at: usize) {
        if at <= self.index {
            self.index += 1;
        }
        self.last = None;
    }

    /// Adopt the list's modification count after a change made through this cursor.
    pub(crate) fn resync(&mut self, modifications: u64) {
        self.expected = modifications;
    }
}
