//! Token output types.
//!
//! A [`Token`] pairs a [`TokenKind`] with the text it was produced from.
//! [`TokenKind`] is a closed set describing the linguistic role of the text;
//! matchers carry the kind they assign.

use std::fmt;

/// Linguistic or syntactic role of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Any word no matcher claimed, e.g. `apple`.
    Word,
    /// Commas separating list items: `apples, oranges, and bananas`.
    ListSeparator,
    /// Sentence-ending marks: `.` `!` `?`.
    Punctuation,
    /// Colon introducing a summary or elaboration.
    SummarySeparator,
    /// Semicolon joining independent clauses.
    ClauseSeparator,
    /// `and`, `or`, `but`, `for`, `so`, `yet`, `nor`.
    CoordinatingConjunction,
    /// `either`, `neither`.
    CorrelativeConjunction,
    /// Hyphen joining compound words or numbers, e.g. `bottom-left`.
    Hyphen,
    /// Runs of digits.
    Number,
    /// Whitespace. Used by the default whitespace matcher; the scanner never emits it.
    Whitespace,
    /// Reserved for tests.
    Test,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Word,
        TokenKind::ListSeparator,
        TokenKind::Punctuation,
        TokenKind::SummarySeparator,
        TokenKind::ClauseSeparator,
        TokenKind::CoordinatingConjunction,
        TokenKind::CorrelativeConjunction,
        TokenKind::Hyphen,
        TokenKind::Number,
        TokenKind::Whitespace,
        TokenKind::Test,
    ];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Word => "Word",
            TokenKind::ListSeparator => "ListSeparator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::SummarySeparator => "SummarySeparator",
            TokenKind::ClauseSeparator => "ClauseSeparator",
            TokenKind::CoordinatingConjunction => "CoordinatingConjunction",
            TokenKind::CorrelativeConjunction => "CorrelativeConjunction",
            TokenKind::Hyphen => "Hyphen",
            TokenKind::Number => "Number",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Test => "Test",
        }
    }

    /// Returns `true` for the conjunction kinds.
    pub const fn is_conjunction(self) -> bool {
        matches!(
            self,
            TokenKind::CoordinatingConjunction | TokenKind::CorrelativeConjunction
        )
    }

    /// Returns `true` for kinds that separate parts of a sentence.
    pub const fn is_separator(self) -> bool {
        matches!(
            self,
            TokenKind::ListSeparator | TokenKind::SummarySeparator | TokenKind::ClauseSeparator
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammatical number and possession of a noun.
///
/// | example | variant |
/// |---|---|
/// | `an apple` | `Singular` |
/// | `my apple's` | `SingularPossessive` |
/// | `apples` | `Plural` |
/// | `the students' apples` | `PluralPossessive` |
///
/// Not produced by the scanner; consumers that classify words further share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plurality {
    Singular,
    SingularPossessive,
    Plural,
    PluralPossessive,
}

impl Plurality {
    pub const fn is_plural(self) -> bool {
        matches!(self, Plurality::Plural | Plurality::PluralPossessive)
    }

    pub const fn is_singular(self) -> bool {
        !self.is_plural()
    }

    pub const fn is_possessive(self) -> bool {
        matches!(
            self,
            Plurality::SingularPossessive | Plurality::PluralPossessive
        )
    }
}

/// An immutable `(kind, text)` pair produced by scanning.
///
/// Equality and hashing use both fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First character of the text, if any.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
