extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Lang(#[from] lexhue::error::Error),
}

/// Invocation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("input filepath is required")]
    MissingInput,

    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}
