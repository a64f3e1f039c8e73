use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_similarity::{compute_similarity, Corpus, SimilarityMatrix};

const WORDS: &[&str] = &[
    "river", "stone", "market", "engine", "forest", "signal", "harbor", "lantern", "copper",
    "meadow", "rocket", "castle", "garden", "thunder", "violin", "glacier", "compass", "orchard",
    "canyon", "beacon", "falcon", "marble", "velvet", "summit", "cobalt", "ember", "willow",
];

/// Deterministic synthetic corpus (xorshift32 word picks)
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Corpus {
    let mut state = 0x9E37_79B9u32;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let pairs: Vec<(String, String)> = (0..docs)
        .map(|d| {
            let text = (0..words_per_doc)
                .map(|_| WORDS[next() as usize % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            (format!("doc{d}.txt"), text)
        })
        .collect();
    Corpus::from_pairs(pairs).expect("unique ids")
}

fn similarity_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(100, 400);

    c.bench_function("analyze_100_docs", |b| {
        b.iter(|| compute_similarity(&corpus).expect("valid corpus"));
    });

    let analysis = compute_similarity(&corpus).expect("valid corpus");
    c.bench_function("similarity_matrix_100_docs", |b| {
        b.iter(|| SimilarityMatrix::from_vectors(analysis.vectors()));
    });

    c.bench_function("report_100_docs", |b| {
        b.iter(|| analysis.report(0.4).expect("valid threshold"));
    });
}

criterion_group!(benches, similarity_benchmark);
criterion_main!(benches);
