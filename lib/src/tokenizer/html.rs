use crate::{
    token::Tokens,
    tokenizer::{TextTokenizer, Treebank},
};

use html2text;

/// Strips markup, then hands the plain text to the treebank splitter.
#[derive(Clone, Debug, Default)]
pub struct Html {
    tokenizer: Treebank,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for Html {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        let clean_text = html2text::from_read(text.as_ref().as_bytes(), 100);
        self.tokenizer.tokenize(clean_text)
    }
}
