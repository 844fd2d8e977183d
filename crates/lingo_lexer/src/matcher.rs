//! Matchers: prioritized predicates that assign a [`TokenKind`] to text.
//!
//! A [`Matcher`] is either a *character matcher*, tested against every
//! single-byte candidate while the scanner walks the input, or a *word
//! matcher*, tested only against completed words. Both kinds are tested
//! against completed words when the scanner classifies them.
//!
//! The match rule is a closed set of variants chosen through the factory
//! functions on [`Matcher`]; the variant type itself is private.
//!
//! | factory | level | matches |
//! |---|---|---|
//! | [`Matcher::character`] | char | exactly that character |
//! | [`Matcher::character_set`] | char | any character of the set |
//! | [`Matcher::word`] | word | the exact word |
//! | [`Matcher::word_ignore_case`] | word | the word, ignoring case |
//! | [`Matcher::word_set`] | word | any word of the set |
//! | [`Matcher::digits`] | word | one or more ASCII digits |
//! | [`Matcher::whitespace`] | char | one or more whitespace characters |
//! | [`Matcher::pattern`] | either | any text containing a regex match |

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::MatcherError;
use crate::token::TokenKind;

/// Shared handle to an immutable matcher.
///
/// Priority lists, their slices, and presets hold the same instances; list
/// lookup and removal compare handles by identity.
pub type MatcherRef = Arc<Matcher>;

/// The whitespace matcher scanners use when none is supplied.
///
/// Built at compile time: priority `-1`, kind [`TokenKind::Whitespace`],
/// character-level.
pub static DEFAULT_WHITESPACE: Matcher = Matcher {
    priority: -1,
    kind: TokenKind::Whitespace,
    character_match: true,
    rule: Rule::Whitespace,
};

/// A prioritized predicate over candidate text.
#[derive(Clone, Debug)]
pub struct Matcher {
    priority: i32,
    kind: TokenKind,
    character_match: bool,
    rule: Rule,
}

#[derive(Clone, Debug)]
enum Rule {
    Char(char),
    /// Sorted and deduplicated for binary search.
    CharSet(Box<[char]>),
    Word(Box<str>),
    WordIgnoreCase(Box<str>),
    WordSet {
        words: Box<[Box<str>]>,
        ignore_case: bool,
    },
    Digits,
    Whitespace,
    Pattern(Regex),
}

impl Matcher {
    /// Matches exactly `c`.
    pub fn character(c: char, priority: i32, kind: TokenKind) -> Self {
        Self::new(priority, kind, true, Rule::Char(c))
    }

    /// Matches exactly the single character in `text`.
    ///
    /// Fails with [`MatcherError::NotACharacter`] unless `text` holds exactly
    /// one character.
    pub fn character_str(text: &str, priority: i32, kind: TokenKind) -> Result<Self, MatcherError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::character(c, priority, kind)),
            _ => Err(MatcherError::NotACharacter {
                text: text.to_owned(),
            }),
        }
    }

    /// Matches any one character in `chars`.
    pub fn character_set(
        chars: impl IntoIterator<Item = char>,
        priority: i32,
        kind: TokenKind,
    ) -> Self {
        let mut set: Vec<char> = chars.into_iter().collect();
        set.sort_unstable();
        set.dedup();
        Self::new(priority, kind, true, Rule::CharSet(set.into_boxed_slice()))
    }

    /// Matches `word` exactly, case included.
    pub fn word(word: impl Into<Box<str>>, priority: i32, kind: TokenKind) -> Self {
        Self::new(priority, kind, false, Rule::Word(word.into()))
    }

    /// Matches `word` regardless of letter case.
    pub fn word_ignore_case(word: impl Into<Box<str>>, priority: i32, kind: TokenKind) -> Self {
        Self::new(priority, kind, false, Rule::WordIgnoreCase(word.into()))
    }

    /// [`word`](Self::word) or [`word_ignore_case`](Self::word_ignore_case),
    /// picked by `ignore_case`.
    pub fn simple(
        word: impl Into<Box<str>>,
        priority: i32,
        kind: TokenKind,
        ignore_case: bool,
    ) -> Self {
        if ignore_case {
            Self::word_ignore_case(word, priority, kind)
        } else {
            Self::word(word, priority, kind)
        }
    }

    /// Matches any of `words`, optionally ignoring case.
    pub fn word_set<I, S>(words: I, priority: i32, kind: TokenKind, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let words = words.into_iter().map(Into::into).collect();
        Self::new(priority, kind, false, Rule::WordSet { words, ignore_case })
    }

    /// Matches non-empty text made only of ASCII digits.
    pub fn digits(priority: i32, kind: TokenKind) -> Self {
        Self::new(priority, kind, false, Rule::Digits)
    }

    /// Matches non-empty text made only of whitespace.
    ///
    /// Most callers want [`DEFAULT_WHITESPACE`] instead.
    pub fn whitespace(priority: i32, kind: TokenKind) -> Self {
        Self::new(priority, kind, true, Rule::Whitespace)
    }

    /// Matches text containing at least one match of `pattern` (a search,
    /// not a full match).
    pub fn pattern(
        pattern: &str,
        priority: i32,
        kind: TokenKind,
        character_match: bool,
    ) -> Result<Self, MatcherError> {
        let regex = Regex::new(pattern).map_err(|err| MatcherError::InvalidPattern {
            pattern: pattern.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self::from_regex(regex, priority, kind, character_match))
    }

    /// Like [`pattern`](Self::pattern), for an already compiled regex.
    pub fn from_regex(regex: Regex, priority: i32, kind: TokenKind, character_match: bool) -> Self {
        Self::new(priority, kind, character_match, Rule::Pattern(regex))
    }

    /// The shared default whitespace matcher.
    pub fn default_whitespace() -> &'static Matcher {
        &DEFAULT_WHITESPACE
    }

    fn new(priority: i32, kind: TokenKind, character_match: bool, rule: Rule) -> Self {
        Matcher {
            priority,
            kind,
            character_match,
            rule,
        }
    }

    /// Lower priorities are tried first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The kind assigned to matched text.
    pub fn token_kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns `true` if this matcher is tested against single characters
    /// during scanning.
    pub fn is_character_match(&self) -> bool {
        self.character_match
    }

    /// Tests `candidate` against this matcher's rule.
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.rule {
            Rule::Char(c) => single_char(candidate) == Some(*c),
            Rule::CharSet(set) => {
                single_char(candidate).is_some_and(|c| set.binary_search(&c).is_ok())
            }
            Rule::Word(word) => **word == *candidate,
            Rule::WordIgnoreCase(word) => eq_ignore_case(word, candidate),
            Rule::WordSet { words, ignore_case } => {
                if *ignore_case {
                    words.iter().any(|word| eq_ignore_case(word, candidate))
                } else {
                    words.iter().any(|word| **word == *candidate)
                }
            }
            Rule::Digits => !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit()),
            Rule::Whitespace => {
                !candidate.is_empty() && candidate.chars().all(char::is_whitespace)
            }
            Rule::Pattern(regex) => regex.is_match(candidate),
        }
    }
}

/// The only character of `text`, or `None` if it has zero or several.
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Rule::Char(c) => write!(f, "character {c:?}")?,
            Rule::CharSet(set) => {
                let chars: String = set.iter().collect();
                write!(f, "characters {chars:?}")?;
            }
            Rule::Word(word) => write!(f, "word {word:?}")?,
            Rule::WordIgnoreCase(word) => write!(f, "word {word:?} (any case)")?,
            Rule::WordSet { words, ignore_case } => {
                f.write_str("words [")?;
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{word:?}")?;
                }
                f.write_str("]")?;
                if *ignore_case {
                    f.write_str(" (any case)")?;
                }
            }
            Rule::Digits => f.write_str("digits")?,
            Rule::Whitespace => f.write_str("whitespace")?,
            Rule::Pattern(regex) => write!(f, "pattern /{}/", regex.as_str())?,
        }
        write!(f, " -> {} @ {}", self.kind, self.priority)
    }
}
