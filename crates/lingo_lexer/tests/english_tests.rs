#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! End-to-end scans of English sentences with the preset matchers.

use lingo_lexer::{
    tokenize, EnglishMatchers, Matcher, PriorityList, Scanner, ScannerConfig, TokenKind,
};
use pretty_assertions::assert_eq;

fn english() -> PriorityList {
    EnglishMatchers::new().into_list()
}

fn scan(text: &str, list: &PriorityList) -> Vec<(TokenKind, String)> {
    tokenize(text, list)
        .expect("in-memory scan")
        .into_iter()
        .map(|t| (t.kind(), t.text().to_owned()))
        .collect()
}

fn expect(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    pairs
        .iter()
        .map(|&(kind, text)| (kind, text.to_owned()))
        .collect()
}

const FRUIT: &str = "If I had to choose 1 favorite fruit it would be either apples or oranges.";

#[test]
fn favorite_fruit_sentence() {
    use TokenKind::{CoordinatingConjunction, CorrelativeConjunction, Number, Punctuation, Word};

    assert_eq!(
        scan(FRUIT, &english()),
        expect(&[
            (Word, "If"),
            (Word, "I"),
            (Word, "had"),
            (Word, "to"),
            (Word, "choose"),
            (Number, "1"),
            (Word, "favorite"),
            (Word, "fruit"),
            (Word, "it"),
            (Word, "would"),
            (Word, "be"),
            (CorrelativeConjunction, "either"),
            (Word, "apples"),
            (CoordinatingConjunction, "or"),
            (Word, "oranges"),
            (Punctuation, "."),
        ])
    );
}

#[test]
fn no_whitespace_tokens() {
    let tokens = tokenize(FRUIT, &english()).unwrap();
    assert!(tokens.kinds().all(|kind| kind != TokenKind::Whitespace));
    assert!(tokens.iter().all(|t| !t.text().trim().is_empty()));
}

#[test]
fn exact_case_word_matcher() {
    let mut list = english();
    list.insert(Matcher::simple("TEST", 1, TokenKind::Test, false));

    assert_eq!(
        scan("TEST word yet Test", &list),
        expect(&[
            (TokenKind::Test, "TEST"),
            (TokenKind::Word, "word"),
            (TokenKind::CoordinatingConjunction, "yet"),
            (TokenKind::Word, "Test"),
        ])
    );
}

#[test]
fn separators() {
    assert_eq!(
        scan("Bring three things: bread, cheese; and wine!", &english()),
        expect(&[
            (TokenKind::Word, "Bring"),
            (TokenKind::Word, "three"),
            (TokenKind::Word, "things"),
            (TokenKind::SummarySeparator, ":"),
            (TokenKind::Word, "bread"),
            (TokenKind::ListSeparator, ","),
            (TokenKind::Word, "cheese"),
            (TokenKind::ClauseSeparator, ";"),
            (TokenKind::CoordinatingConjunction, "and"),
            (TokenKind::Word, "wine"),
            (TokenKind::Punctuation, "!"),
        ])
    );
}

#[test]
fn hyphenated_words_with_pattern_matcher() {
    let mut list = english();
    list.insert(Matcher::pattern(r"^\w+(-\w+)+$", 4, TokenKind::Hyphen, false).unwrap());

    assert_eq!(
        scan("the bottom-left corner", &list),
        expect(&[
            (TokenKind::Word, "the"),
            (TokenKind::Hyphen, "bottom-left"),
            (TokenKind::Word, "corner"),
        ])
    );
}

#[test]
fn shifted_priorities_change_winner() {
    // With conjunctions ahead of everything, "for" is still a conjunction,
    // and digits glued to letters are not a number.
    let list = EnglishMatchers::with_priorities(5, 0, 5, 5).into_list();
    assert_eq!(
        scan("for 4u", &list),
        expect(&[
            (TokenKind::CoordinatingConjunction, "for"),
            (TokenKind::Word, "4u"),
        ])
    );
}

#[test]
fn stream_and_text_agree() {
    let list = english();
    let expected = tokenize(FRUIT, &list).unwrap();

    for size in [1, 2, 3, 7, 64, 1000] {
        let config = ScannerConfig::new().with_buffer_size(size);
        let mut scanner =
            Scanner::with_config(FRUIT.as_bytes(), &list, Matcher::default_whitespace(), config)
                .unwrap();
        scanner.scan().unwrap();
        assert_eq!(scanner.finish(), expected, "buffer size {size}");
    }
}

#[test]
fn cursor_strips_conjunctions() {
    let mut tokens = tokenize(FRUIT, &english()).unwrap();
    let mut cursor = tokens.cursor();
    while cursor.has_next(&tokens).unwrap() {
        if cursor.next(&tokens).unwrap().kind().is_conjunction() {
            cursor.remove(&mut tokens).unwrap();
        }
    }
    assert_eq!(tokens.len(), 14);
    assert!(tokens.kinds().all(|kind| !kind.is_conjunction()));
}
