use std::io::{self, Write};

use crate::document::Document;

use lexhue::{
    clause,
    color::Palette,
    parse::Tree,
    pos::PartOfSpeech,
    tagger::Tagger,
    tokenizer::Tokenizer,
};

/// Tag-and-colorize pipeline: legend first, then one rendered block per
/// input line.
#[derive(Debug)]
pub struct Highlighter {
    pub tokenizer: Tokenizer,
    pub tagger: Tagger,
    pub palette: Palette,
}

impl Highlighter {
    pub fn new(tokenizer: Tokenizer, tagger: Tagger) -> Self {
        Self {
            tokenizer,
            tagger,
            palette: Palette::new(),
        }
    }

    pub fn run<W: Write>(&mut self, document: &Document, out: &mut W) -> io::Result<()> {
        self.palette.write_legend(out)?;

        for line in document.lines() {
            let tokens = self.tokenizer.tokenize(line);
            let tagged = self.tagger.tag(tokens);

            for word in &tagged {
                let pos = PartOfSpeech::from_penn(word.tag());
                write!(out, "{} ", self.palette.render(word.form(), pos))?;
            }
            out.write_all(b"\n\n")?;
        }

        Ok(())
    }
}

/// Clause pipeline: per sentence root, the indented parse subtree, then
/// the trimmed main clause between marker lines.
#[derive(Debug, Default)]
pub struct ClauseWalker;

impl ClauseWalker {
    pub fn new() -> Self {
        Self
    }

    pub fn run<W: Write>(&self, trees: &[Tree], out: &mut W) -> io::Result<()> {
        writeln!(out, "=== main clauses ===")?;

        for tree in trees {
            for root in tree.roots() {
                out.write_all(tree.render_subtree(root.id()).as_bytes())?;

                let mut clause = clause::main_clause(tree, root);
                clause::trim_to_subject(&mut clause);
                clause::trim_at_punctuation(&mut clause);

                writeln!(out, "=== main clause ===")?;
                writeln!(out, "{}", clause::text(&clause))?;
                writeln!(out, "===================")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClauseWalker, Highlighter};
    use crate::document::Document;

    use lexhue::{
        parse::conllu,
        tagger::{Lexicon, Tagger},
        tokenizer::{Tokenizer, Treebank},
    };

    fn highlighter() -> Highlighter {
        Highlighter::new(
            Tokenizer::Treebank(Treebank::new()),
            Tagger::Lexicon(Lexicon::new()),
        )
    }

    fn run_to_string(document: &str) -> String {
        let document = Document::new(String::from(document));
        let mut out = Vec::new();
        highlighter().run(&document, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_legend_comes_first() {
        let output = run_to_string("The cat sat.\n");
        assert!(output.starts_with("=== color key ===\n"));
        assert!(output.contains("\x1b[33mnoun\x1b[0m\n"));
    }

    #[test]
    fn test_single_line_block() {
        let output = run_to_string("The cat sat.\n");
        let body = output.split_once("=================\n\n").unwrap().1;

        // four color-coded tokens, space separated, then the blank line
        assert_eq!(body.matches("\x1b[0m").count(), 4);
        assert!(body.ends_with(" \n\n"));

        // "The" carries no category and falls back to white
        assert!(body.starts_with("\x1b[37mThe\x1b[0m "));
        // "cat" is a noun, "sat" a verb
        assert!(body.contains("\x1b[33mcat\x1b[0m "));
        assert!(body.contains("\x1b[34msat\x1b[0m "));
    }

    #[test]
    fn test_line_count_is_preserved() {
        let output = run_to_string("one line\nanother line\na third\n");
        let body = output.split_once("=================\n\n").unwrap().1;
        assert_eq!(body.matches("\n\n").count(), 3);
    }

    #[test]
    fn test_empty_input_line_still_emits_block() {
        let output = run_to_string("words here\n\nmore words\n");
        let body = output.split_once("=================\n\n").unwrap().1;
        assert_eq!(body.matches("\n\n").count(), 3);
    }

    const CAT_PARSE: &str = "\
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2\tcat\tcat\tNOUN\tNN\t_\t3\tnsubj\t_\t_
3\tsat\tsit\tVERB\tVBD\t_\t0\troot\t_\t_
4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_
";

    #[test]
    fn test_clause_walker_markers() {
        let trees = conllu::sentences(CAT_PARSE).unwrap();
        let mut out = Vec::new();
        ClauseWalker::new().run(&trees, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "=== main clauses ===\n\
             sat\n  cat\n    The\n  .\n\
             === main clause ===\n\
             cat sat\n\
             ===================\n"
        );
    }

    #[test]
    fn test_clause_walker_rootless_tree_prints_nothing() {
        let trees = conllu::sentences("1\tfragment\t_\tX\tXX\t_\t2\tdep\t_\t_\n").unwrap();
        let mut out = Vec::new();
        ClauseWalker::new().run(&trees, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "=== main clauses ===\n");
    }
}
