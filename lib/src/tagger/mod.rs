mod lexicon;

pub use lexicon::Lexicon;

use crate::token::{TaggedTokens, Tokens};

#[derive(Clone, Debug)]
pub enum Tagger {
    Lexicon(Lexicon),
}

impl Tagger {
    pub fn tag(&mut self, tokens: Tokens) -> TaggedTokens {
        match self {
            Tagger::Lexicon(tagger) => tagger.tag(tokens),
        }
    }
}

/// Assigns a fine-grained tag to every token. Providers never fail
/// mid-line; unknown words get a best-effort tag.
pub trait WordTagger {
    fn tag(&mut self, tokens: Tokens) -> TaggedTokens;
}
