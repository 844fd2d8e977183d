//! Lingo lexer - priority-ordered matching of natural-language text
//!
//! This crate turns raw text into a flat sequence of typed tokens:
//! - [`Matcher`]s: prioritized predicates assigning a [`TokenKind`]
//! - [`PriorityList`]: matchers kept sorted by priority, with fail-fast cursors
//! - [`Scanner`]: walks bytes, emits single-character tokens, and classifies
//!   completed words
//! - [`Tokens`]: the scan output
//! - [`EnglishMatchers`]: a ready-made bundle for English prose
//!
//! # Example
//!
//! ```
//! use lingo_lexer::{tokenize, EnglishMatchers, TokenKind};
//!
//! let list = EnglishMatchers::new().into_list();
//! let tokens = tokenize("either 3 or 4!", &list)?;
//! let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(texts, ["either", "3", "or", "4", "!"]);
//! assert_eq!(tokens.get(0).map(|t| t.kind()), Some(TokenKind::CorrelativeConjunction));
//! # Ok::<(), lingo_lexer::ScanError>(())
//! ```

mod error;
pub mod matcher;
pub mod presets;
pub mod priority_list;
pub mod scanner;
mod token;
mod tokens;
mod tracking;

pub use error::{ListError, MatcherError, ScanError, UnsortedList};
pub use matcher::{Matcher, MatcherRef, DEFAULT_WHITESPACE};
pub use presets::EnglishMatchers;
pub use priority_list::{ListCursor, PriorityList};
pub use scanner::{tokenize, Scanner, ScannerConfig};
pub use token::{Plurality, Token, TokenKind};
pub use tokens::{TokenCursor, Tokens};
