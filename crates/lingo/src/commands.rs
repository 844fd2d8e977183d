//! Command handlers for the lingo CLI.
//!
//! Each handler writes its report to a caller-supplied writer and returns a
//! [`CliError`] instead of exiting, so `main` owns the process exit code.

use std::io;

use lingo_lexer::{ScanError, ScannerConfig};
use thiserror::Error;

mod lex;
mod matchers;

pub use lex::{lex_file, lex_reader};
pub use matchers::list_matchers;

/// A command failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// An option was not recognized or its value did not parse.
    #[error("invalid option `{option}`")]
    InvalidOption { option: String },
    /// The command needs an argument that was not given.
    #[error("missing {what}")]
    Missing { what: &'static str },
    #[error("cannot open `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Writing the report failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Options of `lingo lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: ScannerConfig,
}

impl LexOptions {
    /// Merge one `--name=value` argument into the options.
    fn apply(&mut self, arg: &str) -> Result<(), CliError> {
        let invalid = || CliError::InvalidOption {
            option: arg.to_owned(),
        };
        let (name, value) = arg.split_once('=').ok_or_else(invalid)?;
        let value: usize = value.parse().map_err(|_| invalid())?;
        match name {
            "--buffer-size" => self.config.buffer_size = value,
            "--max-word" => self.config.max_word_len = value,
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

/// Split `lingo lex` arguments into the input path and options.
///
/// The path is the first argument not starting with `--`; `-` means stdin.
pub fn parse_lex_args(args: &[String]) -> Result<(String, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut path = None;
    for arg in args {
        if arg.starts_with("--") {
            options.apply(arg)?;
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::InvalidOption {
                option: arg.clone(),
            });
        }
    }
    let path = path.ok_or(CliError::Missing { what: "input file" })?;
    Ok((path, options))
}

#[cfg(test)]
mod tests;
