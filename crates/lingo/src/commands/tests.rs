#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|&s| s.to_owned()).collect()
}

fn lex_to_string(input: &str, options: LexOptions) -> (Result<usize, CliError>, String) {
    let mut out = Vec::new();
    let result = lex_reader(input.as_bytes(), options, &mut out);
    (result, String::from_utf8_lossy(&out).into_owned())
}

// === Argument parsing ===

#[test]
fn parse_path_and_defaults() {
    let (path, options) = parse_lex_args(&args(&["notes.txt"])).unwrap();
    assert_eq!(path, "notes.txt");
    assert_eq!(options, LexOptions::default());
    assert_eq!(options.config.buffer_size, 1000);
}

#[test]
fn parse_options_in_any_position() {
    let (path, options) =
        parse_lex_args(&args(&["--buffer-size=8", "-", "--max-word=16"])).unwrap();
    assert_eq!(path, "-");
    assert_eq!(options.config.buffer_size, 8);
    assert_eq!(options.config.max_word_len, 16);
}

#[test]
fn parse_rejects_bad_input() {
    assert!(matches!(
        parse_lex_args(&args(&["--buffer-size"])),
        Err(CliError::InvalidOption { ref option }) if option == "--buffer-size"
    ));
    assert!(matches!(
        parse_lex_args(&args(&["a", "--max-word=lots"])),
        Err(CliError::InvalidOption { .. })
    ));
    assert!(matches!(
        parse_lex_args(&args(&["a", "--verbose=1"])),
        Err(CliError::InvalidOption { .. })
    ));
    assert!(matches!(
        parse_lex_args(&args(&["a", "b"])),
        Err(CliError::InvalidOption { ref option }) if option == "b"
    ));
    assert!(matches!(
        parse_lex_args(&args(&["--max-word=3"])),
        Err(CliError::Missing { .. })
    ));
}

// === lex ===

#[test]
fn lex_prints_one_token_per_line() {
    let (result, output) = lex_to_string("Either tea, or 2 coffees.", LexOptions::default());
    assert!(matches!(result, Ok(7)));
    assert_eq!(
        output,
        "CorrelativeConjunction Either\n\
         Word tea\n\
         ListSeparator ,\n\
         CoordinatingConjunction or\n\
         Number 2\n\
         Word coffees\n\
         Punctuation .\n"
    );
}

#[test]
fn lex_reports_scan_failure_after_printing() {
    let mut options = LexOptions::default();
    options.config.max_word_len = 3;
    let (result, output) = lex_to_string("a, abcdef", options);
    assert!(matches!(
        result,
        Err(CliError::Scan(ScanError::WordTooLong { limit: 3, .. }))
    ));
    assert_eq!(output, "Word a\nListSeparator ,\n");
}

#[test]
fn lex_rejects_zero_buffer() {
    let mut options = LexOptions::default();
    options.config.buffer_size = 0;
    let (result, output) = lex_to_string("words", options);
    assert!(matches!(
        result,
        Err(CliError::Scan(ScanError::ZeroBufferSize))
    ));
    assert!(output.is_empty());
}

#[test]
fn lex_missing_file() {
    let mut out = Vec::new();
    let result = lex_file(
        "/nonexistent/lingo/input.txt",
        LexOptions::default(),
        &mut out,
    );
    assert!(matches!(
        result,
        Err(CliError::Open { ref path, .. }) if path == "/nonexistent/lingo/input.txt"
    ));
}

// === matchers ===

#[test]
fn matchers_listed_in_priority_order() {
    let mut out = Vec::new();
    assert!(list_matchers(&mut out).is_ok());
    let output = String::from_utf8_lossy(&out).into_owned();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[..4].iter().all(|line| line.ends_with("@ 1")));
    assert!(lines[4].starts_with("characters \"!.?\" -> Punctuation"));
    assert!(lines[5..].iter().all(|line| line.ends_with("@ 3")));
}
