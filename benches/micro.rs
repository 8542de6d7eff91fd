use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexhue::{
    tagger::{Lexicon, Tagger},
    tokenizer::{TextTokenizer, Treebank},
};

fn get_test_corpus() -> Vec<String> {
    vec![
        "The quick brown fox jumps over the lazy dog.",
        "The cat sat on the mat.",
        "She quickly found it, and they were famous.",
        "Suddenly, the dog barked at the mailman.",
        "A fast brown fox leaps over lazy hounds.",
        "Foxes are cunning and quick.",
        "Dogs are loyal and lazy.",
        "Clever foxes evade the lazy dogs.",
        "The sun shines on the lazy dog.",
        "Quick thinking foxes outsmart lazy dogs.",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect::<Vec<_>>()
}

fn bench_tokenize(c: &mut Criterion) {
    let corpus = black_box(get_test_corpus());
    let mut tokenizer = Treebank::new();

    c.bench_function("treebank-tokenize", |b| {
        b.iter(|| {
            for line in &corpus {
                let _ = tokenizer.tokenize(line);
            }
        })
    });
}

fn bench_tag(c: &mut Criterion) {
    let corpus = black_box(get_test_corpus());
    let mut tokenizer = Treebank::new();
    let mut tagger = Tagger::Lexicon(Lexicon::new());

    c.bench_function("lexicon-tag", |b| {
        b.iter(|| {
            for line in &corpus {
                let _ = tagger.tag(tokenizer.tokenize(line));
            }
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_tag);
criterion_main!(benches);
