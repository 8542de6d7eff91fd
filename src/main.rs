extern crate clap;
extern crate tokio;

mod cli;
mod document;
mod engine;
mod error;
mod read;

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use crate::{
    cli::{Cli, Clauses, Command, Tag},
    engine::{ClauseWalker, Highlighter},
    error::{ConfigError, Error, IoError},
    read::FileReader,
};

use clap::Parser;
use lexhue::{
    color::{paint, Color},
    parse::conllu,
    tagger::{Lexicon, Tagger},
    tokenizer::{Html, Tokenizer, Treebank},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{}", paint(&error.to_string(), Color::Err));
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Tag(args) => tag(args).await,
        Command::Clauses(args) => clauses(args).await,
    }
}

async fn tag(args: Tag) -> Result<(), Error> {
    init_logging(args.debug);
    let document = FileReader::new().load(&required(args.file)?).await?;

    let tokenizer = match args.html {
        true => Tokenizer::Html(Html::new()),
        false => Tokenizer::Treebank(Treebank::new()),
    };

    let mut lexicon = Lexicon::new();
    if let Some(path) = args.lexicon {
        lexicon.extend_from_path(path)?;
    }

    let mut highlighter = Highlighter::new(tokenizer, Tagger::Lexicon(lexicon));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    highlighter
        .run(&document, &mut out)
        .and_then(|_| out.flush())
        .map_err(|error| IoError::Writer(error.kind()))?;

    Ok(())
}

async fn clauses(args: Clauses) -> Result<(), Error> {
    init_logging(args.debug);
    let document = FileReader::new().load(&required(args.file)?).await?;

    let trees = conllu::sentences(&document)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ClauseWalker::new()
        .run(&trees, &mut out)
        .and_then(|_| out.flush())
        .map_err(|error| IoError::Writer(error.kind()))?;

    Ok(())
}

fn required(file: Option<PathBuf>) -> Result<PathBuf, Error> {
    file.ok_or_else(|| ConfigError::MissingInput.into())
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
