use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_priorities() {
    let english = EnglishMatchers::new();
    let priorities: Vec<i32> = english.matchers().iter().map(|m| m.priority()).collect();
    assert_eq!(priorities, vec![1, 1, 1, 3, 3, 1, 2]);
}

#[test]
fn custom_priorities() {
    let english = EnglishMatchers::with_priorities(10, 20, 30, 40);
    assert_eq!(english.colon.priority(), 10);
    assert_eq!(english.comma.priority(), 10);
    assert_eq!(english.coordinating.priority(), 20);
    assert_eq!(english.correlative.priority(), 20);
    assert_eq!(english.digits.priority(), 30);
    assert_eq!(english.punctuation.priority(), 40);
}

#[test]
fn kinds_and_levels() {
    let english = EnglishMatchers::new();
    let described: Vec<(TokenKind, bool)> = english
        .matchers()
        .iter()
        .map(|m| (m.token_kind(), m.is_character_match()))
        .collect();
    assert_eq!(
        described,
        vec![
            (TokenKind::SummarySeparator, true),
            (TokenKind::ClauseSeparator, true),
            (TokenKind::ListSeparator, true),
            (TokenKind::CoordinatingConjunction, false),
            (TokenKind::CorrelativeConjunction, false),
            (TokenKind::Number, false),
            (TokenKind::Punctuation, true),
        ]
    );
}

#[test]
fn conjunctions_ignore_case() {
    let english = EnglishMatchers::new();
    for word in COORDINATING_CONJUNCTIONS {
        assert!(english.coordinating.matches(word), "{word}");
        assert!(english.coordinating.matches(&word.to_uppercase()), "{word}");
    }
    assert!(english.correlative.matches("Neither"));
    assert!(!english.correlative.matches("whether"));
}

#[test]
fn into_list_is_sorted_and_shares_instances() {
    let english = EnglishMatchers::new();
    let list = english.clone().into_list();
    assert_eq!(list.len(), 7);
    assert_eq!(list.to_string(), "[1, 1, 1, 1, 2, 3, 3]");
    for matcher in english.matchers() {
        assert!(list.contains(&matcher));
    }
}

#[test]
fn shared_bundle_is_built_once() {
    let first = EnglishMatchers::shared();
    let second = EnglishMatchers::shared();
    assert!(std::ptr::eq(first, second));
    assert!(Arc::ptr_eq(&first.comma, &second.comma));
}
