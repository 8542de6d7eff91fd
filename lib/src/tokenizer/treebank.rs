use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Word splitter that keeps punctuation as standalone tokens, so a
/// downstream tagger sees `sat` and `.` separately. Apostrophes and
/// hyphens between letters stay inside the word.
#[derive(Clone, Debug, Default)]
pub struct Treebank;

impl Treebank {
    pub fn new() -> Self {
        Self::default()
    }
}

fn joins_word(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '-')
}

impl TextTokenizer for Treebank {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        let mut tokens = Tokens::new();
        let mut word = String::new();

        let mut chars = text.as_ref().chars().peekable();
        while let Some(ch) = chars.next() {
            if ch.is_alphanumeric() {
                word.push(ch);
                continue;
            }

            let joined = joins_word(ch)
                && !word.is_empty()
                && chars.peek().is_some_and(|next| next.is_alphanumeric());
            if joined {
                word.push(ch);
                continue;
            }

            if !word.is_empty() {
                tokens.push(Token::from(std::mem::take(&mut word)));
            }
            if !ch.is_whitespace() {
                tokens.push(Token::from(ch.to_string()));
            }
        }

        if !word.is_empty() {
            tokens.push(Token::from(word));
        }

        tokens
    }
}
