pub mod conllu;

use std::fmt::Write;

/// Relation label marking the head of a sentence.
pub const ROOT: &str = "root";
/// Relation label marking a nominal subject.
pub const NSUBJ: &str = "nsubj";
/// Relation label marking punctuation.
pub const PUNCT: &str = "punct";

/// One token of a parsed sentence. `id` is 1-based surface position;
/// `head` is the parent's id, 0 for sentence roots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    id: usize,
    form: String,
    head: usize,
    deprel: String,
}

impl Word {
    pub fn new<F: Into<String>, D: Into<String>>(id: usize, form: F, head: usize, deprel: D) -> Self {
        Self {
            id,
            form: form.into(),
            head,
            deprel: deprel.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn head(&self) -> usize {
        self.head
    }

    /// Relation label without any subtype, so `nsubj:pass` compares as
    /// `nsubj`.
    pub fn relation(&self) -> &str {
        match self.deprel.split_once(':') {
            Some((base, _)) => base,
            None => &self.deprel,
        }
    }

    pub fn is_root(&self) -> bool {
        self.relation() == ROOT
    }
}

/// Read-only dependency tree for one sentence. Words stay in surface
/// order; the tree structure lives in the head references.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    words: Vec<Word>,
}

impl Tree {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: usize) -> Option<&Word> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Every word whose relation marks it as a sentence root. Parsers
    /// occasionally segment differently than the caller, so there can be
    /// more than one.
    pub fn roots(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|word| word.is_root())
    }

    /// Immediate dependents of `id`, in surface order.
    pub fn children(&self, id: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |word| word.head == id)
    }

    /// Pre-order walk over `id` and all its descendants.
    pub fn subtree(&self, id: usize) -> Subtree<'_> {
        Subtree {
            tree: self,
            stack: vec![(id, 0)],
        }
    }

    /// Indented diagnostic view of a subtree, one token per line, two
    /// spaces per depth level.
    pub fn render_subtree(&self, id: usize) -> String {
        let mut rendered = String::new();
        for (word, depth) in self.subtree(id) {
            for _ in 0..depth {
                rendered.push_str("  ");
            }
            // String's fmt::Write never fails
            let _ = writeln!(rendered, "{}", word.form());
        }
        rendered
    }
}

/// Pre-order subtree iterator driven by an explicit stack; parse trees
/// are sentence-scale, so no depth concerns.
pub struct Subtree<'t> {
    tree: &'t Tree,
    stack: Vec<(usize, usize)>,
}

impl<'t> Iterator for Subtree<'t> {
    type Item = (&'t Word, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(word) = self.tree.word(id) else {
                continue;
            };

            let children = self
                .tree
                .children(id)
                .map(|child| child.id)
                .collect::<Vec<_>>();
            for child in children.into_iter().rev() {
                self.stack.push((child, depth + 1));
            }

            return Some((word, depth));
        }
    }
}
