mod html;
mod treebank;

pub use {html::Html, treebank::Treebank};

use crate::token::Tokens;

#[derive(Clone, Debug)]
pub enum Tokenizer {
    Treebank(Treebank),
    Html(Html),
}

impl Tokenizer {
    pub fn tokenize(&mut self, text: &str) -> Tokens {
        match self {
            Tokenizer::Treebank(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Html(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens;
}
