use crate::parse::{Tree, Word, NSUBJ, PUNCT};

/// Words whose immediate parent is `root`, plus the root itself, in the
/// order the parse delivers them.
pub fn main_clause<'t>(tree: &'t Tree, root: &Word) -> Vec<&'t Word> {
    tree.words()
        .iter()
        .filter(|word| word.id() == root.id() || word.head() == root.id())
        .collect()
}

/// Drops everything before the first nominal subject. A clause with no
/// subject keeps its full span.
pub fn trim_to_subject(clause: &mut Vec<&Word>) {
    if let Some(position) = clause.iter().position(|word| word.relation() == NSUBJ) {
        clause.drain(..position);
    }
}

/// Drops the first punctuation word and everything after it. A clause
/// with no punctuation keeps its tail.
pub fn trim_at_punctuation(clause: &mut Vec<&Word>) {
    if let Some(position) = clause.iter().position(|word| word.relation() == PUNCT) {
        clause.truncate(position);
    }
}

/// Surface text of a clause, single-space separated.
pub fn text(clause: &[&Word]) -> String {
    clause
        .iter()
        .map(|word| word.form())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One trimmed main clause per sentence root.
pub fn extract(tree: &Tree) -> Vec<String> {
    tree.roots()
        .map(|root| {
            let mut clause = main_clause(tree, root);
            trim_to_subject(&mut clause);
            trim_at_punctuation(&mut clause);
            text(&clause)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract, main_clause, text, trim_at_punctuation, trim_to_subject};
    use crate::parse::{Tree, Word};

    // "The cat sat on the mat ."
    fn cat_tree() -> Tree {
        Tree::new(vec![
            Word::new(1, "The", 2, "det"),
            Word::new(2, "cat", 3, "nsubj"),
            Word::new(3, "sat", 0, "root"),
            Word::new(4, "on", 6, "case"),
            Word::new(5, "the", 6, "det"),
            Word::new(6, "mat", 3, "obl"),
            Word::new(7, ".", 3, "punct"),
        ])
    }

    #[test]
    fn test_main_clause_keeps_root_and_direct_dependents() {
        let tree = cat_tree();
        let root = tree.roots().next().unwrap();

        let clause = main_clause(&tree, root);
        let forms = clause.iter().map(|word| word.form()).collect::<Vec<_>>();
        assert_eq!(forms, ["cat", "sat", "mat", "."]);
    }

    #[test]
    fn test_extract_trims_subject_and_punctuation() {
        let tree = cat_tree();
        assert_eq!(extract(&tree), ["cat sat mat"]);
    }

    #[test]
    fn test_subject_verb_only() {
        // "The cat sat ."
        let tree = Tree::new(vec![
            Word::new(1, "The", 2, "det"),
            Word::new(2, "cat", 3, "nsubj"),
            Word::new(3, "sat", 0, "root"),
            Word::new(4, ".", 3, "punct"),
        ]);
        assert_eq!(extract(&tree), ["cat sat"]);
    }

    #[test]
    fn test_no_subject_keeps_clause_head() {
        // "Stop now !"
        let tree = Tree::new(vec![
            Word::new(1, "Stop", 0, "root"),
            Word::new(2, "now", 1, "advmod"),
            Word::new(3, "!", 1, "punct"),
        ]);
        assert_eq!(extract(&tree), ["Stop now"]);
    }

    #[test]
    fn test_no_punctuation_keeps_tail() {
        let tree = Tree::new(vec![
            Word::new(1, "dogs", 2, "nsubj"),
            Word::new(2, "bark", 0, "root"),
        ]);
        assert_eq!(extract(&tree), ["dogs bark"]);
    }

    #[test]
    fn test_no_root_yields_nothing() {
        let tree = Tree::new(vec![Word::new(1, "fragment", 2, "dep")]);
        assert!(extract(&tree).is_empty());
    }

    #[test]
    fn test_multiple_roots() {
        let tree = Tree::new(vec![
            Word::new(1, "dogs", 2, "nsubj"),
            Word::new(2, "bark", 0, "root"),
            Word::new(3, ".", 2, "punct"),
            Word::new(4, "cats", 5, "nsubj"),
            Word::new(5, "sleep", 0, "root"),
            Word::new(6, ".", 5, "punct"),
        ]);
        assert_eq!(extract(&tree), ["dogs bark", "cats sleep"]);
    }

    #[test]
    fn test_trims_are_idempotent() {
        let tree = cat_tree();
        let root = tree.roots().next().unwrap();

        let mut clause = main_clause(&tree, root);
        trim_to_subject(&mut clause);
        trim_at_punctuation(&mut clause);
        let once = text(&clause);

        trim_to_subject(&mut clause);
        trim_at_punctuation(&mut clause);
        assert_eq!(text(&clause), once);
    }

    #[test]
    fn test_subject_subtype_counts_as_subject() {
        let tree = Tree::new(vec![
            Word::new(1, "The", 2, "det"),
            Word::new(2, "door", 3, "nsubj:pass"),
            Word::new(3, "opened", 0, "root"),
            Word::new(4, ".", 3, "punct"),
        ]);
        assert_eq!(extract(&tree), ["door opened"]);
    }
}
