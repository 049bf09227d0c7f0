//! Criterion benchmarks for emolex.
//!
//! Covers the two hot paths of a run:
//! - Text analysis (folding and tokenization)
//! - Token and sliding-window phrase matching

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emolex::analysis::analyzer::analyzer::Analyzer;
use emolex::analysis::analyzer::emotion::EmotionAnalyzer;
use emolex::lexicon::emotion::EmotionLexicon;
use emolex::lexicon::word_list::WordList;
use emolex::matcher::Matcher;
use emolex::matcher::phrase::PhraseMatcher;
use emolex::matcher::token::TokenMatcher;
use std::hint::black_box;

const WORDS: &[&str] = &[
    "joy", "anger", "trust", "fear", "happy", "sad", "vui", "mừng", "buồn", "giận", "well",
    "being", "at", "ease", "good", "grief", "the", "and", "a", "of", "Café", "NAÏVE",
];

/// Generate a text of `count` words with a deterministic spread.
fn generate_text(count: usize) -> String {
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        words.push(WORDS[(i * 7 + i / 3) % WORDS.len()]);
    }
    words.join(" ")
}

fn build_lexicon(analyzer: &EmotionAnalyzer) -> EmotionLexicon {
    let mut lexicon = EmotionLexicon::new(["anger", "fear", "joy", "sadness", "trust"]);
    let entries: &[(&str, &[&str])] = &[
        ("joy", &["joy"]),
        ("happy", &["joy"]),
        ("vui mừng", &["joy"]),
        ("well being", &["joy", "trust"]),
        ("at ease", &["trust"]),
        ("anger", &["anger"]),
        ("giận", &["anger"]),
        ("fear", &["fear"]),
        ("grief", &["sadness"]),
        ("buồn", &["sadness"]),
        ("the good and the sad", &["joy", "sadness"]),
    ];
    for &(entry, emotions) in entries {
        lexicon.insert(entry, emotions, analyzer).unwrap();
    }
    lexicon
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = EmotionAnalyzer::new().unwrap();
    let text = generate_text(10_000);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("analyze_10k_words", |b| {
        b.iter(|| {
            let tokens = analyzer.analyze_to_tokens(black_box(&text)).unwrap();
            black_box(tokens)
        })
    });

    group.finish();
}

/// Benchmark token and phrase matching.
fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    let analyzer = EmotionAnalyzer::new().unwrap();
    let lexicon = build_lexicon(&analyzer);
    let words = WordList::from_words(["joy", "happy", "grief", "fear"], &analyzer).unwrap();

    for count in [1_000, 10_000, 100_000] {
        let tokens = analyzer.analyze_to_tokens(&generate_text(count)).unwrap();
        group.throughput(Throughput::Elements(tokens.len() as u64));

        group.bench_with_input(BenchmarkId::new("token", count), &tokens, |b, tokens| {
            let matcher = TokenMatcher::new(&words);
            b.iter(|| black_box(matcher.count(black_box(tokens))))
        });

        group.bench_with_input(BenchmarkId::new("phrase", count), &tokens, |b, tokens| {
            let matcher = PhraseMatcher::new(&lexicon);
            b.iter(|| black_box(matcher.count(black_box(tokens))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_matching);
criterion_main!(benches);
