use std::fmt::{Display, Formatter};

/// Coarse part-of-speech bucket used for coloring.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adverb,
    Adjective,
    Preposition,
    Conjunction,
}

impl PartOfSpeech {
    /// Legend order.
    pub const ALL: [PartOfSpeech; 7] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adverb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
    ];

    /// Buckets a Penn Treebank tag by prefix, first match wins.
    ///
    /// Tags are matched as given; no case folding. Anything outside the
    /// table degrades to `None` rather than an error.
    pub fn from_penn(tag: &str) -> Option<PartOfSpeech> {
        match tag {
            _ if tag.starts_with("NN") => Some(PartOfSpeech::Noun),
            _ if tag.starts_with("PR") => Some(PartOfSpeech::Pronoun),
            _ if tag.starts_with("VB") => Some(PartOfSpeech::Verb),
            // adverb tags ride the verb bucket
            _ if tag.starts_with("RB") => Some(PartOfSpeech::Verb),
            _ if tag.starts_with("JJ") => Some(PartOfSpeech::Adjective),
            // IN covers prepositions and subordinating conjunctions
            _ if tag.starts_with("IN") => Some(PartOfSpeech::Preposition),
            // CC covers coordinating conjunctions
            _ if tag.starts_with("CC") => Some(PartOfSpeech::Conjunction),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
        }
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
