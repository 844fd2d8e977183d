//! Preset matcher bundles.

use std::sync::{Arc, OnceLock};

use crate::matcher::{Matcher, MatcherRef};
use crate::priority_list::PriorityList;
use crate::token::TokenKind;

/// Coordinating conjunctions, matched in any case.
pub const COORDINATING_CONJUNCTIONS: [&str; 7] = ["and", "or", "but", "for", "so", "yet", "nor"];

/// Correlative conjunctions, matched in any case.
pub const CORRELATIVE_CONJUNCTIONS: [&str; 2] = ["either", "neither"];

/// Sentence-ending punctuation.
pub const SENTENCE_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Matchers for plain English prose.
///
/// | matcher | rule | default priority |
/// |---|---|---|
/// | `colon` | `:` -> `SummarySeparator` | symbol (1) |
/// | `semicolon` | `;` -> `ClauseSeparator` | symbol (1) |
/// | `comma` | `,` -> `ListSeparator` | symbol (1) |
/// | `coordinating` | [`COORDINATING_CONJUNCTIONS`] | conjunction (3) |
/// | `correlative` | [`CORRELATIVE_CONJUNCTIONS`] | conjunction (3) |
/// | `digits` | digit runs -> `Number` | digit (1) |
/// | `punctuation` | [`SENTENCE_PUNCTUATION`] | punctuation (2) |
#[derive(Clone, Debug)]
pub struct EnglishMatchers {
    pub colon: MatcherRef,
    pub semicolon: MatcherRef,
    pub comma: MatcherRef,
    pub coordinating: MatcherRef,
    pub correlative: MatcherRef,
    pub digits: MatcherRef,
    pub punctuation: MatcherRef,
}

static SHARED: OnceLock<EnglishMatchers> = OnceLock::new();

impl EnglishMatchers {
    pub const SYMBOL_PRIORITY: i32 = 1;
    pub const CONJUNCTION_PRIORITY: i32 = 3;
    pub const DIGIT_PRIORITY: i32 = 1;
    pub const PUNCTUATION_PRIORITY: i32 = 2;

    /// The bundle at its default priorities.
    pub fn new() -> Self {
        Self::with_priorities(
            Self::SYMBOL_PRIORITY,
            Self::CONJUNCTION_PRIORITY,
            Self::DIGIT_PRIORITY,
            Self::PUNCTUATION_PRIORITY,
        )
    }

    pub fn with_priorities(symbol: i32, conjunction: i32, digit: i32, punctuation: i32) -> Self {
        EnglishMatchers {
            colon: Arc::new(Matcher::character(':', symbol, TokenKind::SummarySeparator)),
            semicolon: Arc::new(Matcher::character(';', symbol, TokenKind::ClauseSeparator)),
            comma: Arc::new(Matcher::character(',', symbol, TokenKind::ListSeparator)),
            coordinating: Arc::new(Matcher::word_set(
                COORDINATING_CONJUNCTIONS,
                conjunction,
                TokenKind::CoordinatingConjunction,
                true,
            )),
            correlative: Arc::new(Matcher::word_set(
                CORRELATIVE_CONJUNCTIONS,
                conjunction,
                TokenKind::CorrelativeConjunction,
                true,
            )),
            digits: Arc::new(Matcher::digits(digit, TokenKind::Number)),
            punctuation: Arc::new(Matcher::character_set(
                SENTENCE_PUNCTUATION,
                punctuation,
                TokenKind::Punctuation,
            )),
        }
    }

    /// Process-wide bundle at default priorities, built on first use.
    pub fn shared() -> &'static EnglishMatchers {
        SHARED.get_or_init(EnglishMatchers::new)
    }

    /// All matchers, in declaration order.
    pub fn matchers(&self) -> [MatcherRef; 7] {
        [
            &self.colon,
            &self.semicolon,
            &self.comma,
            &self.coordinating,
            &self.correlative,
            &self.digits,
            &self.punctuation,
        ]
        .map(Arc::clone)
    }

    /// A new priority list holding all matchers.
    pub fn into_list(self) -> PriorityList {
        self.matchers().into_iter().collect()
    }
}

impl Default for EnglishMatchers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
