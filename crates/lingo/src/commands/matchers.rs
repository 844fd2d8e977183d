use std::io::Write;

use lingo_lexer::EnglishMatchers;

use super::CliError;

/// Print the English preset matchers in priority order, one per line.
pub fn list_matchers(out: &mut impl Write) -> Result<(), CliError> {
    let list = EnglishMatchers::shared().clone().into_list();
    for matcher in &list {
        writeln!(out, "{matcher}")?;
    }
    out.flush()?;
    Ok(())
}
