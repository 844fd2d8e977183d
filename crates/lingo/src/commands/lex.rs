use std::fs::File;
use std::io::{self, Read, Write};

use lingo_lexer::{EnglishMatchers, Matcher, Scanner};
use tracing::debug;

use super::{CliError, LexOptions};

/// Tokenize `path` (`-` for stdin) with the English preset and print one
/// `<Kind> <text>` line per token. Returns the token count.
pub fn lex_file(path: &str, options: LexOptions, out: &mut impl Write) -> Result<usize, CliError> {
    if path == "-" {
        return lex_reader(io::stdin().lock(), options, out);
    }
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_owned(),
        source,
    })?;
    lex_reader(file, options, out)
}

/// Like [`lex_file`], reading from `reader`.
pub fn lex_reader(
    reader: impl Read,
    options: LexOptions,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let list = EnglishMatchers::shared().clone().into_list();
    let mut scanner =
        Scanner::with_config(reader, &list, Matcher::default_whitespace(), options.config)?;

    // Print what was scanned even when the scan fails part way.
    let scanned = scanner.scan().map(|_| ());
    let tokens = scanner.finish();
    for token in &tokens {
        writeln!(out, "{} {}", token.kind(), token.text())?;
    }
    out.flush()?;
    debug!(tokens = tokens.len(), "lex finished");

    scanned?;
    Ok(tokens.len())
}
