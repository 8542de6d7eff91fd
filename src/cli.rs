extern crate clap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lexhue", about = "Color-codes the words of a text file by part of speech")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tag every word and print it color-coded by coarse category.
    Tag(Tag),
    /// Extract each sentence's main clause from a dependency parse.
    Clauses(Clauses),
}

#[derive(Debug, Parser)]
pub struct Tag {
    /// Input text file.
    pub file: Option<PathBuf>,

    /// Strip HTML markup before tokenizing.
    #[arg(long)]
    pub html: bool,

    /// Extension lexicon (JSON) merged over the built-in table.
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Log resource loading progress.
    #[arg(long, short)]
    pub debug: bool,
}

#[derive(Debug, Parser)]
pub struct Clauses {
    /// Dependency parse of the input, in CoNLL-U format.
    pub file: Option<PathBuf>,

    /// Log resource loading progress.
    #[arg(long, short)]
    pub debug: bool,
}
