use crate::{
    error::{ConlluError, Error},
    parse::{Tree, Word},
};

const FIELDS: usize = 10;

/// Reads CoNLL-U text into one tree per sentence.
///
/// Comment lines (`#`) are skipped, blank lines close a sentence,
/// multiword range ids (`1-2`) and empty nodes (`1.1`) carry no tree
/// edges and are dropped. Any malformed token line aborts the whole read.
pub fn sentences(text: &str) -> Result<Vec<Tree>, Error> {
    let mut trees = Vec::new();
    let mut words = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let line_no = index + 1;

        if line.is_empty() {
            if !words.is_empty() {
                trees.push(Tree::new(std::mem::take(&mut words)));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if let Some(word) = word(line, line_no)? {
            words.push(word);
        }
    }

    if !words.is_empty() {
        trees.push(Tree::new(words));
    }

    Ok(trees)
}

fn word(line: &str, line_no: usize) -> Result<Option<Word>, Error> {
    let fields = line.split('\t').collect::<Vec<_>>();
    if fields.len() != FIELDS {
        return Err(ConlluError::Field(line_no).into());
    }

    let id_field = fields[0];
    if id_field.contains('-') || id_field.contains('.') {
        return Ok(None);
    }

    let id = id_field
        .parse::<usize>()
        .map_err(|_| ConlluError::Id(line_no))?;
    let head = fields[6]
        .parse::<usize>()
        .map_err(|_| ConlluError::Head(line_no))?;

    Ok(Some(Word::new(id, fields[1], head, fields[7])))
}
