use std::{collections::HashMap as StdHashMap, fs, path::Path};

use hashbrown::HashMap;
use log::debug;
use serde::Deserialize;

use crate::{
    error::{Error, LexiconError},
    tagger::WordTagger,
    token::{Tagged, TaggedTokens, Tokens},
};

/// Closed-class words and irregular forms the suffix rules cannot reach.
/// Open-class vocabulary is left to the shape and suffix fallbacks.
const CORE: &[(&str, &str)] = &[
    // personal pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("themselves", "PRP"),
    // possessives
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("no", "DT"),
    // prepositions and subordinators
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("about", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("between", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("against", "IN"),
    ("without", "IN"),
    ("within", "IN"),
    ("upon", "IN"),
    ("as", "IN"),
    ("if", "IN"),
    ("because", "IN"),
    ("while", "IN"),
    ("than", "IN"),
    ("although", "IN"),
    ("though", "IN"),
    ("since", "IN"),
    ("until", "IN"),
    ("unless", "IN"),
    ("to", "TO"),
    // coordinators
    ("and", "CC"),
    ("but", "CC"),
    ("or", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    ("so", "CC"),
    ("both", "CC"),
    ("either", "CC"),
    ("neither", "CC"),
    // modals
    ("will", "MD"),
    ("would", "MD"),
    ("can", "MD"),
    ("could", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // be / have / do
    ("is", "VBZ"),
    ("are", "VBP"),
    ("am", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("has", "VBZ"),
    ("have", "VBP"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    // irregular past forms
    ("went", "VBD"),
    ("came", "VBD"),
    ("saw", "VBD"),
    ("said", "VBD"),
    ("got", "VBD"),
    ("made", "VBD"),
    ("took", "VBD"),
    ("knew", "VBD"),
    ("ran", "VBD"),
    ("sat", "VBD"),
    ("stood", "VBD"),
    ("told", "VBD"),
    ("found", "VBD"),
    ("gave", "VBD"),
    ("left", "VBD"),
    ("kept", "VBD"),
    ("felt", "VBD"),
    ("put", "VBD"),
    // frequent adverbs
    ("not", "RB"),
    ("n't", "RB"),
    ("very", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("again", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("here", "RB"),
    ("there", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("soon", "RB"),
    ("still", "RB"),
    ("almost", "RB"),
    ("already", "RB"),
    // wh-words
    ("what", "WP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
];

#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: StdHashMap<String, String>,
}

/// Word-to-tag lookup with shape and suffix fallbacks for everything the
/// table misses. Lookup is case-insensitive for table entries; shape rules
/// see the original form.
#[derive(Clone, Debug)]
pub struct Lexicon {
    words: HashMap<String, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let words = CORE
            .iter()
            .map(|&(word, tag)| (String::from(word), String::from(tag)))
            .collect::<HashMap<_, _>>();
        Self { words }
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merges a `{ "words": { word: tag } }` JSON file into the table.
    /// File entries win over built-ins.
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let path = path.as_ref();
        debug!("loading extension lexicon from {}", path.display());

        let buffer =
            fs::read_to_string(path).map_err(|error| LexiconError::File(error.kind()))?;
        let file: LexiconFile = serde_json::from_str(&buffer)
            .map_err(|error| LexiconError::Parse(error.to_string()))?;

        let count = file.words.len();
        for (word, tag) in file.words {
            self.words.insert(word.to_lowercase(), tag);
        }

        debug!("merged {count} lexicon entries");
        Ok(count)
    }

    /// Resolves one surface form to a tag. Table first, then shape rules,
    /// then suffix rules, then the `NN` default.
    pub fn resolve(&self, form: &str) -> String {
        if let Some(tag) = self.words.get(form) {
            return tag.clone();
        }

        let lowered = form.to_lowercase();
        if let Some(tag) = self.words.get(&lowered) {
            return tag.clone();
        }

        if let Some(tag) = shape_tag(form) {
            return String::from(tag);
        }

        String::from(suffix_tag(&lowered))
    }
}

fn shape_tag(form: &str) -> Option<&'static str> {
    let mut chars = form.chars();
    let first = chars.next()?;

    if form.chars().all(|ch| !ch.is_alphanumeric()) {
        return Some(punctuation_tag(first));
    }

    if form
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ','))
    {
        return Some("CD");
    }

    if first.is_uppercase() {
        return Some("NNP");
    }

    None
}

fn punctuation_tag(ch: char) -> &'static str {
    match ch {
        '.' | '!' | '?' => ".",
        ',' => ",",
        ';' | ':' | '-' | '\u{2014}' => ":",
        '(' | '[' | '{' => "(",
        ')' | ']' | '}' => ")",
        '\'' | '"' | '`' | '\u{2019}' => "''",
        '$' => "$",
        _ => "SYM",
    }
}

fn suffix_tag(lowered: &str) -> &'static str {
    const ADJECTIVE_SUFFIXES: [&str; 6] = ["ous", "ful", "ive", "able", "ic", "al"];

    if lowered.len() > 3 && lowered.ends_with("ly") {
        return "RB";
    }
    if lowered.len() > 4 && lowered.ends_with("ing") {
        return "VBG";
    }
    if lowered.len() > 3 && lowered.ends_with("ed") {
        return "VBD";
    }
    if lowered.len() > 4 && lowered.ends_with("est") {
        return "JJS";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| lowered.len() > suffix.len() + 2 && lowered.ends_with(suffix))
    {
        return "JJ";
    }
    if lowered.len() > 3
        && lowered.ends_with('s')
        && !lowered.ends_with("ss")
        && !lowered.ends_with("us")
        && !lowered.ends_with("is")
    {
        return "NNS";
    }

    "NN"
}

impl WordTagger for Lexicon {
    fn tag(&mut self, tokens: Tokens) -> TaggedTokens {
        tokens
            .into_iter()
            .map(|token| {
                let tag = self.resolve(token.as_str());
                Tagged::new(token, tag)
            })
            .collect()
    }
}
