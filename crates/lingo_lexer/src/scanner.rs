//! Byte-at-a-time scanner.
//!
//! A [`Scanner`] reads its input one byte at a time and classifies it against
//! a [`PriorityList`]:
//!
//! 1. The first *character* matcher (in priority order) that accepts the byte
//!    wins. Any pending word is flushed, then a one-character token of the
//!    matcher's kind is emitted.
//! 2. Otherwise, if the whitespace matcher accepts the byte, any pending word
//!    is flushed and the byte is dropped.
//! 3. Otherwise the byte joins the pending word.
//!
//! Flushing a word classifies the whole word against *every* matcher in the
//! list, character matchers included; the first match wins, and a word no
//! matcher claims becomes [`TokenKind::Word`]. End of input flushes once more.
//!
//! Bytes outside ASCII are never classified on their own; they always join
//! the pending word, so a multi-byte character is never split. Finished words
//! are decoded as UTF-8, replacing invalid sequences.
//!
//! # Example
//!
//! ```
//! use lingo_lexer::{EnglishMatchers, Scanner, TokenKind};
//!
//! let list = EnglishMatchers::new().into_list();
//! let mut scanner = Scanner::from_text("apples, or pears.", &list);
//! let tokens = scanner.scan()?;
//! let kinds: Vec<_> = tokens.kinds().collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Word,
//!         TokenKind::ListSeparator,
//!         TokenKind::CoordinatingConjunction,
//!         TokenKind::Word,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! # Ok::<(), lingo_lexer::ScanError>(())
//! ```

use std::io::Read;

use tracing::{debug, trace};

use crate::error::ScanError;
use crate::matcher::Matcher;
use crate::priority_list::PriorityList;
use crate::token::{Token, TokenKind};
use crate::tokens::Tokens;

mod input;

use input::ByteInput;

/// Scanner buffer sizes and limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Bytes requested from the reader per refill.
    pub buffer_size: usize,
    /// Initial capacity of the pending-word buffer.
    pub word_capacity: usize,
    /// Longest word accepted, in bytes. Longer words fail the scan.
    pub max_word_len: usize,
}

impl ScannerConfig {
    pub const DEFAULT_BUFFER_SIZE: usize = 1000;
    pub const DEFAULT_WORD_CAPACITY: usize = 100;
    pub const DEFAULT_MAX_WORD_LEN: usize = 4096;

    pub const fn new() -> Self {
        ScannerConfig {
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
            word_capacity: Self::DEFAULT_WORD_CAPACITY,
            max_word_len: Self::DEFAULT_MAX_WORD_LEN,
        }
    }

    #[must_use]
    pub const fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    #[must_use]
    pub const fn with_word_capacity(mut self, word_capacity: usize) -> Self {
        self.word_capacity = word_capacity;
        self
    }

    #[must_use]
    pub const fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the scanner is in its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Between words; the word buffer is empty.
    Scanning,
    /// Inside a word; the word buffer holds its bytes so far.
    Accumulating,
    /// Input exhausted or the scan failed.
    End,
}

/// Tokenizes one input against a borrowed [`PriorityList`].
///
/// A scanner runs [`scan`](Self::scan) once. It owns its reader and releases
/// it when dropped or [`finish`](Self::finish)ed, whether or not the scan
/// succeeded. The list is borrowed, so it cannot change while a scanner
/// exists.
pub struct Scanner<'m, R> {
    input: ByteInput<R>,
    list: &'m PriorityList,
    whitespace: &'m Matcher,
    word: Vec<u8>,
    max_word_len: usize,
    tokens: Tokens,
    phase: Phase,
    scanned: bool,
}

impl<'m, 't> Scanner<'m, &'t [u8]> {
    /// Scanner over in-memory text with the default whitespace matcher.
    pub fn from_text(text: &'t str, list: &'m PriorityList) -> Self {
        let bytes = text.as_bytes();
        let config = ScannerConfig::new().with_buffer_size(bytes.len().max(1));
        Self::build(bytes, list, Matcher::default_whitespace(), config)
    }
}

impl<'m, R: Read> Scanner<'m, R> {
    /// Scanner over `reader` with a 1000-byte buffer and the default
    /// whitespace matcher.
    pub fn from_reader(reader: R, list: &'m PriorityList) -> Self {
        Self::build(
            reader,
            list,
            Matcher::default_whitespace(),
            ScannerConfig::new(),
        )
    }

    /// Scanner over `reader` refilling `buffer_size` bytes at a time.
    pub fn from_reader_with_buffer(
        reader: R,
        list: &'m PriorityList,
        buffer_size: usize,
    ) -> Result<Self, ScanError> {
        Self::with_config(
            reader,
            list,
            Matcher::default_whitespace(),
            ScannerConfig::new().with_buffer_size(buffer_size),
        )
    }

    /// Fully configured scanner. `whitespace` must be a character matcher.
    pub fn with_config(
        reader: R,
        list: &'m PriorityList,
        whitespace: &'m Matcher,
        config: ScannerConfig,
    ) -> Result<Self, ScanError> {
        if !whitespace.is_character_match() {
            return Err(ScanError::WhitespaceNotCharacter);
        }
        if config.buffer_size == 0 {
            return Err(ScanError::ZeroBufferSize);
        }
        Ok(Self::build(reader, list, whitespace, config))
    }

    fn build(
        reader: R,
        list: &'m PriorityList,
        whitespace: &'m Matcher,
        config: ScannerConfig,
    ) -> Self {
        Scanner {
            input: ByteInput::new(reader, config.buffer_size),
            list,
            whitespace,
            word: Vec::with_capacity(config.word_capacity.min(config.max_word_len)),
            max_word_len: config.max_word_len,
            tokens: Tokens::new(),
            phase: Phase::Scanning,
            scanned: false,
        }
    }

    /// Scan the whole input and return the tokens.
    ///
    /// On failure the tokens produced before the failing byte stay readable
    /// through [`tokens`](Self::tokens); a word pending at that point is
    /// dropped. Scanning again fails with [`ScanError::AlreadyScanned`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(matchers = self.list.len(), buffer = self.input.capacity())
    )]
    pub fn scan(&mut self) -> Result<&Tokens, ScanError> {
        if self.scanned {
            return Err(ScanError::AlreadyScanned);
        }
        self.scanned = true;

        if let Err(err) = self.run() {
            self.phase = Phase::End;
            debug!(
                tokens = self.tokens.len(),
                bytes = self.input.consumed(),
                error = %err,
                "scan failed"
            );
            return Err(err);
        }

        debug!(
            tokens = self.tokens.len(),
            bytes = self.input.consumed(),
            "scan complete"
        );
        Ok(&self.tokens)
    }

    fn run(&mut self) -> Result<(), ScanError> {
        while self.phase != Phase::End {
            match self.input.next_byte()? {
                Some(byte) => self.step(byte)?,
                None => {
                    self.flush_word();
                    self.phase = Phase::End;
                }
            }
        }
        Ok(())
    }

    fn step(&mut self, byte: u8) -> Result<(), ScanError> {
        if byte.is_ascii() {
            let mut utf8 = [0; 4];
            let candidate: &str = char::from(byte).encode_utf8(&mut utf8);

            let list = self.list;
            if let Some(matcher) = list
                .iter()
                .find(|m| m.is_character_match() && m.matches(candidate))
            {
                self.flush_word();
                self.emit(matcher.token_kind(), candidate.to_owned());
                return Ok(());
            }

            if self.whitespace.matches(candidate) {
                self.flush_word();
                return Ok(());
            }
        }
        self.accumulate(byte)
    }

    fn accumulate(&mut self, byte: u8) -> Result<(), ScanError> {
        if self.word.len() >= self.max_word_len {
            return Err(ScanError::WordTooLong {
                limit: self.max_word_len,
                offset: self.input.consumed() - 1,
            });
        }
        self.word.push(byte);
        self.phase = Phase::Accumulating;
        Ok(())
    }

    /// Classify and emit the pending word, if any.
    fn flush_word(&mut self) {
        if self.phase != Phase::Accumulating {
            return;
        }
        let text = String::from_utf8_lossy(&self.word).into_owned();
        self.word.clear();
        self.phase = Phase::Scanning;

        let kind = self
            .list
            .iter()
            .find(|m| m.matches(&text))
            .map_or(TokenKind::Word, |m| m.token_kind());
        self.emit(kind, text);
    }

    fn emit(&mut self, kind: TokenKind, text: String) {
        trace!(%kind, text = %text, "token");
        self.tokens.push(Token::new(kind, text));
    }

    /// Tokens produced so far.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Returns `true` once `scan` has been called.
    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// Bytes read from the input so far.
    pub fn bytes_read(&self) -> u64 {
        self.input.consumed()
    }

    /// Release the reader and return the tokens.
    pub fn finish(self) -> Tokens {
        self.tokens
    }
}

/// Tokenize in-memory `text` with the default whitespace matcher.
pub fn tokenize(text: &str, list: &PriorityList) -> Result<Tokens, ScanError> {
    let mut scanner = Scanner::from_text(text, list);
    scanner.scan()?;
    Ok(scanner.finish())
}
