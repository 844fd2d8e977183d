//! Scanner output.
//!
//! [`Tokens`] is the token sequence a scan produces, in input order. Callers
//! read it through a borrowing [`iter`](Tokens::iter) or walk it with a
//! detached [`TokenCursor`] that may remove entries; the cursor follows the
//! same fail-fast rules as [`ListCursor`](crate::ListCursor).

use crate::error::ListError;
use crate::token::{Token, TokenKind};
use crate::tracking::CursorState;

/// Tokens in the order they were produced.
///
/// Equality compares the tokens only.
#[derive(Clone, Debug, Default)]
pub struct Tokens {
    tokens: Vec<Token>,
    modifications: u64,
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.modifications += 1;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds in token order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(Token::kind)
    }

    /// Number of structural changes so far.
    pub fn modifications(&self) -> u64 {
        self.modifications
    }

    /// Remove and return the token at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Token, ListError> {
        if index >= self.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.modifications += 1;
        Ok(self.tokens.remove(index))
    }

    /// Keep only the tokens for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Token) -> bool) {
        let before = self.len();
        self.tokens.retain(keep);
        if self.len() != before {
            self.modifications += 1;
        }
    }

    /// Cursor positioned before the first token.
    pub fn cursor(&self) -> TokenCursor {
        TokenCursor {
            state: CursorState::new(0, self.modifications),
        }
    }
}

impl PartialEq for Tokens {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Tokens {}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens {
            tokens: iter.into_iter().collect(),
            modifications: 0,
        }
    }
}

/// Detached forward cursor over [`Tokens`] with removal.
///
/// Fails with [`ListError::ConcurrentModification`] once the tokens were
/// changed other than through this cursor, and with
/// [`ListError::IllegalState`] when `remove` has no preceding `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenCursor {
    state: CursorState,
}

impl TokenCursor {
    pub fn has_next(&self, tokens: &Tokens) -> Result<bool, ListError> {
        self.state.check(tokens.modifications)?;
        Ok(self.state.index() < tokens.len())
    }

    pub fn next<'a>(&mut self, tokens: &'a Tokens) -> Result<&'a Token, ListError> {
        let index = self
            .state
            .step_forward(tokens.len(), tokens.modifications)?;
        Ok(&tokens.tokens[index])
    }

    /// Remove the token last returned by `next`.
    pub fn remove(&mut self, tokens: &mut Tokens) -> Result<Token, ListError> {
        let index = self.state.take_last(tokens.modifications, "remove")?;
        let removed = tokens.remove_at(index)?;
        self.state.resync(tokens.modifications);
        Ok(removed)
    }
}
