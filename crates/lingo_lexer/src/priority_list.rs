//! Always-sorted collection of matchers.
//!
//! [`PriorityList`] keeps its matchers ascending by [`Matcher::priority`]
//! after every operation. Duplicates are allowed, including the same matcher
//! instance more than once.
//!
//! # Ordering
//!
//! [`insert`](PriorityList::insert) places a matcher immediately before the
//! first existing matcher whose priority is greater than or equal to its own.
//! Within one priority band the most recently inserted matcher therefore
//! comes first:
//!
//! ```text
//! insert(A @ 5), insert(B @ 5)   =>   [B, A]
//! ```
//!
//! Bulk construction ([`PriorityList::from_slots`], `collect()`) sorts once
//! with [`QuickSort`], which is unstable; equal priorities come out in no
//! particular order.
//!
//! # Identity
//!
//! Lookup and removal compare [`MatcherRef`] handles with [`Arc::ptr_eq`].
//! Two separately built matchers with the same rule are different elements.
//!
//! # Capacity
//!
//! Unused capacity is the list's headroom. When an insert finds no headroom
//! the list grows by its current padding (10 unless set with
//! [`PriorityList::with_padding`]), and the padding doubles for next time.
//!
//! # Iteration
//!
//! [`iter`](PriorityList::iter) borrows the list; nothing can change it while
//! the iterator lives. [`cursor`](PriorityList::cursor) hands out a detached
//! [`ListCursor`] that can step both ways and mutate through the list, and
//! fails fast if the list was changed behind its back.

use std::fmt;
use std::sync::Arc;

use lingo_sorts::{KeySort, QuickSort};
use tracing::{debug, trace};

use crate::error::{ListError, UnsortedList};
use crate::matcher::{Matcher, MatcherRef};

mod cursor;

pub use cursor::ListCursor;

/// Padding for the first growth of a list.
const INITIAL_PADDING: usize = 10;

/// Borrowing iterator over a [`PriorityList`] in priority order.
pub type Iter<'a> = std::slice::Iter<'a, MatcherRef>;

/// Matchers sorted ascending by priority.
#[derive(Clone, Debug)]
pub struct PriorityList {
    matchers: Vec<MatcherRef>,
    padding: usize,
    modifications: u64,
}

impl PriorityList {
    /// Create an empty list with no capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` matchers.
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityList {
            matchers: Vec::with_capacity(capacity),
            padding: INITIAL_PADDING,
            modifications: 0,
        }
    }

    /// Create an empty list whose first growth adds `padding` slots.
    ///
    /// A padding of zero is treated as one.
    pub fn with_padding(padding: usize) -> Self {
        PriorityList {
            matchers: Vec::new(),
            padding: padding.max(1),
            modifications: 0,
        }
    }

    /// Build a list from slots that may be empty.
    ///
    /// The slots are copied and sorted once by priority, empty slots sorting
    /// last; empty slots then count as headroom, not as elements.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<MatcherRef>>,
    {
        let mut slots: Vec<Option<MatcherRef>> = slots.into_iter().collect();
        QuickSort.sort_by_key(&mut slots, |slot| {
            slot.as_ref()
                .map_or(i64::MAX, |matcher| i64::from(matcher.priority()))
        });

        let capacity = slots.len();
        let mut matchers = Vec::with_capacity(capacity);
        matchers.extend(slots.into_iter().flatten());
        debug!(
            len = matchers.len(),
            capacity, "priority list built from slots"
        );

        let list = PriorityList {
            matchers,
            padding: INITIAL_PADDING,
            modifications: 0,
        };
        debug_assert!(list.check_invariant().is_ok());
        list
    }

    /// Number of matchers in the list.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Number of matchers the list can hold before growing.
    pub fn capacity(&self) -> usize {
        self.matchers.capacity()
    }

    /// Slots added by the next growth.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Count of structural changes so far. Cursors compare against it.
    pub fn modifications(&self) -> u64 {
        self.modifications
    }

    /// Insert `matcher` at its sorted position; returns that position.
    pub fn insert(&mut self, matcher: impl Into<MatcherRef>) -> usize {
        let matcher = matcher.into();
        let index = self.insertion_point(matcher.priority());
        self.reserve_headroom(1);
        self.matchers.insert(index, matcher);
        self.modifications += 1;
        debug_assert!(self.check_invariant().is_ok());
        index
    }

    /// Insert every matcher; returns `true` if any was inserted.
    pub fn insert_all<I>(&mut self, matchers: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<MatcherRef>,
    {
        let matchers = matchers.into_iter();
        self.reserve_headroom(matchers.size_hint().0);
        let before = self.len();
        for matcher in matchers {
            self.insert(matcher);
        }
        self.len() != before
    }

    /// Remove the first occurrence of `matcher`; returns `false` if absent.
    pub fn remove(&mut self, matcher: &MatcherRef) -> bool {
        match self.index_of(matcher) {
            Some(index) => {
                self.matchers.remove(index);
                self.modifications += 1;
                true
            }
            None => false,
        }
    }

    /// Remove and return the matcher at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<MatcherRef, ListError> {
        self.check_index(index)?;
        let removed = self.matchers.remove(index);
        self.modifications += 1;
        Ok(removed)
    }

    /// Remove one occurrence of each of `matchers`; returns `true` if
    /// anything was removed.
    pub fn remove_all<'a, I>(&mut self, matchers: I) -> bool
    where
        I: IntoIterator<Item = &'a MatcherRef>,
    {
        let mut changed = false;
        for matcher in matchers {
            changed |= self.remove(matcher);
        }
        changed
    }

    /// Keep only the matchers for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&Matcher) -> bool) {
        let before = self.len();
        self.matchers.retain(|matcher| keep(matcher.as_ref()));
        if self.len() != before {
            self.modifications += 1;
        }
    }

    /// Remove every matcher. Capacity is kept.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.matchers.clear();
            self.modifications += 1;
        }
    }

    /// Remove the matcher at `index` and insert `matcher` at its own sorted
    /// position; returns the removed matcher.
    pub fn replace(
        &mut self,
        index: usize,
        matcher: impl Into<MatcherRef>,
    ) -> Result<MatcherRef, ListError> {
        let removed = self.remove_at(index)?;
        self.insert(matcher);
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Option<&MatcherRef> {
        self.matchers.get(index)
    }

    pub fn first(&self) -> Option<&MatcherRef> {
        self.matchers.first()
    }

    pub fn last(&self) -> Option<&MatcherRef> {
        self.matchers.last()
    }

    /// The matchers in priority order.
    pub fn as_slice(&self) -> &[MatcherRef] {
        &self.matchers
    }

    /// A copy of the matchers in priority order, sharing the instances.
    pub fn to_vec(&self) -> Vec<MatcherRef> {
        self.matchers.clone()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.matchers.iter()
    }

    /// Priorities in list order.
    pub fn priorities(&self) -> impl Iterator<Item = i32> + '_ {
        self.matchers.iter().map(|matcher| matcher.priority())
    }

    /// Position of the first occurrence of `matcher`.
    pub fn index_of(&self, matcher: &MatcherRef) -> Option<usize> {
        self.matchers
            .iter()
            .position(|candidate| Arc::ptr_eq(candidate, matcher))
    }

    /// Position of the last occurrence of `matcher`.
    pub fn last_index_of(&self, matcher: &MatcherRef) -> Option<usize> {
        self.matchers
            .iter()
            .rposition(|candidate| Arc::ptr_eq(candidate, matcher))
    }

    pub fn contains(&self, matcher: &MatcherRef) -> bool {
        self.index_of(matcher).is_some()
    }

    /// Independent copy of `from..to`. Later changes to either list do not
    /// affect the other; the matcher instances are shared.
    pub fn slice(&self, from: usize, to: usize) -> Result<PriorityList, ListError> {
        if from > to || to > self.len() {
            return Err(ListError::InvalidRange {
                from,
                to,
                len: self.len(),
            });
        }
        Ok(PriorityList {
            matchers: self.matchers[from..to].to_vec(),
            padding: INITIAL_PADDING,
            modifications: 0,
        })
    }

    /// Cursor positioned before the first matcher.
    pub fn cursor(&self) -> ListCursor {
        ListCursor::new(0, self.modifications)
    }

    /// Cursor positioned before the matcher at `index` (`index == len()` is
    /// the end).
    pub fn cursor_at(&self, index: usize) -> Result<ListCursor, ListError> {
        if index > self.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(ListCursor::new(index, self.modifications))
    }

    /// Verify that priorities never decrease along the list.
    ///
    /// A failure is a bug in this type, not a recoverable condition.
    pub fn check_invariant(&self) -> Result<(), UnsortedList> {
        for (offset, pair) in self.matchers.windows(2).enumerate() {
            let (previous, current) = (pair[0].priority(), pair[1].priority());
            if previous > current {
                return Err(UnsortedList {
                    index: offset + 1,
                    previous,
                    current,
                });
            }
        }
        Ok(())
    }

    fn insertion_point(&self, priority: i32) -> usize {
        self.matchers
            .iter()
            .position(|matcher| matcher.priority() >= priority)
            .unwrap_or(self.matchers.len())
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Make room for `extra` more matchers, growing by the padding.
    fn reserve_headroom(&mut self, extra: usize) {
        let capacity = self.matchers.capacity();
        if self.len() + extra <= capacity {
            return;
        }
        while extra > self.padding {
            self.padding *= 2;
        }
        let target = capacity + self.padding;
        self.matchers.reserve_exact(target - self.len());
        trace!(
            from = capacity,
            to = self.matchers.capacity(),
            "priority list grown"
        );
        self.padding *= 2;
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists are equal when they hold the same instances in the same order.
impl PartialEq for PriorityList {
    fn eq(&self, other: &Self) -> bool {
        self.matchers.len() == other.matchers.len()
            && self
                .matchers
                .iter()
                .zip(&other.matchers)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Eq for PriorityList {}

impl FromIterator<MatcherRef> for PriorityList {
    fn from_iter<I: IntoIterator<Item = MatcherRef>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().map(Some))
    }
}

impl FromIterator<Matcher> for PriorityList {
    fn from_iter<I: IntoIterator<Item = Matcher>>(iter: I) -> Self {
        Self::from_slots(iter.into_iter().map(|matcher| Some(Arc::new(matcher))))
    }
}

impl<'a> IntoIterator for &'a PriorityList {
    type Item = &'a MatcherRef;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Priorities in order, e.g. `[1, 1, 2, 3]`.
impl fmt::Display for PriorityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, priority) in self.priorities().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{priority}")?;
        }
        f.write_str("]")
    }
}
