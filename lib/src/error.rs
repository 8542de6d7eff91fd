use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Conllu(#[from] ConlluError),

    #[error("{0}")]
    Lexicon(#[from] LexiconError),
}

/// Malformed dependency-parse input. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ConlluError {
    #[error("line {0}: expected 10 tab-separated fields")]
    Field(usize),

    #[error("line {0}: token id is not a number")]
    Id(usize),

    #[error("line {0}: head is not a number")]
    Head(usize),
}

/// Extension lexicon loading errors.
#[derive(Debug, Error, PartialEq)]
pub enum LexiconError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Lexicon Parse Error: {0}")]
    Parse(String),
}
