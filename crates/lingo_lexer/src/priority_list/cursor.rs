use crate::error::ListError;
use crate::matcher::MatcherRef;
use crate::tracking::CursorState;

use super::PriorityList;

/// Detached, fail-fast, bidirectional cursor over a [`PriorityList`].
///
/// The cursor sits *between* elements. Every step takes the list it was
/// created from; if that list was structurally changed by anything other than
/// this cursor, the step fails with [`ListError::ConcurrentModification`],
/// and so does every later step.
///
/// [`remove`](Self::remove) and [`replace`](Self::replace) act on the element
/// returned by the last [`next`](Self::next) or [`previous`](Self::previous)
/// and fail with [`ListError::IllegalState`] if there is none.
/// [`insert`](Self::insert) is allowed at any time. Because the list stays
/// sorted, an inserted matcher lands at its priority position, which may be
/// on either side of the cursor; the cursor is adjusted so that `next` keeps
/// returning the element it would have returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListCursor {
    state: CursorState,
}

impl ListCursor {
    pub(super) fn new(index: usize, modifications: u64) -> Self {
        ListCursor {
            state: CursorState::new(index, modifications),
        }
    }

    pub fn has_next(&self, list: &PriorityList) -> Result<bool, ListError> {
        self.state.check(list.modifications)?;
        Ok(self.state.index() < list.len())
    }

    pub fn has_previous(&self, list: &PriorityList) -> Result<bool, ListError> {
        self.state.check(list.modifications)?;
        Ok(self.state.index() > 0)
    }

    /// Index of the element `next` would return.
    pub fn next_index(&self, list: &PriorityList) -> Result<usize, ListError> {
        self.state.check(list.modifications)?;
        Ok(self.state.index())
    }

    /// Index of the element `previous` would return, `None` at the start.
    pub fn previous_index(&self, list: &PriorityList) -> Result<Option<usize>, ListError> {
        self.state.check(list.modifications)?;
        Ok(self.state.index().checked_sub(1))
    }

    pub fn next<'a>(&mut self, list: &'a PriorityList) -> Result<&'a MatcherRef, ListError> {
        let index = self.state.step_forward(list.len(), list.modifications)?;
        Ok(&list.matchers[index])
    }

    pub fn previous<'a>(&mut self, list: &'a PriorityList) -> Result<&'a MatcherRef, ListError> {
        let index = self.state.step_back(list.len(), list.modifications)?;
        Ok(&list.matchers[index])
    }

    /// Remove the element last returned by `next` or `previous`.
    pub fn remove(&mut self, list: &mut PriorityList) -> Result<MatcherRef, ListError> {
        let index = self.state.take_last(list.modifications, "remove")?;
        let removed = list.remove_at(index)?;
        self.state.resync(list.modifications);
        Ok(removed)
    }

    /// Replace the element last returned by `next` or `previous`; the
    /// replacement goes to its own sorted position.
    pub fn replace(
        &mut self,
        list: &mut PriorityList,
        matcher: impl Into<MatcherRef>,
    ) -> Result<MatcherRef, ListError> {
        let index = self.state.take_last(list.modifications, "replace")?;
        let removed = list.remove_at(index)?;
        let at = list.insert(matcher);
        self.state.inserted(at);
        self.state.resync(list.modifications);
        Ok(removed)
    }

    /// Insert `matcher` at its sorted position; returns that position.
    pub fn insert(
        &mut self,
        list: &mut PriorityList,
        matcher: impl Into<MatcherRef>,
    ) -> Result<usize, ListError> {
        self.state.check(list.modifications)?;
        let at = list.insert(matcher);
        self.state.inserted(at);
        self.state.resync(list.modifications);
        Ok(at)
    }
}
