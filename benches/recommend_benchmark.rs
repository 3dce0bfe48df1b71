use criterion::{black_box, criterion_group, criterion_main, Criterion};

use recommendation_service::services::similarity::{
    cosine_similarity, score_candidates, tfidf_vectors,
};
use recommendation_service::utils::text::tokenize_text;

fn sample_corpus() -> Vec<String> {
    let mut corpus = vec![
        "science fiction adventure desert planet spice politics Frank Herbert".to_string(),
        "science fiction sequel messiah prophecy desert Frank Herbert".to_string(),
        "regency romance marriage manners society Jane Austen".to_string(),
        "gothic horror creature science Mary Shelley".to_string(),
    ];

    // Pad the pool to a realistic sweep size (23 subjects x 10 docs).
    for i in 0..230 {
        corpus.push(format!(
            "fiction drama volume {} author {} literature classics",
            i,
            i % 17
        ));
    }

    corpus
}

fn benchmark_tokenize_text(c: &mut Criterion) {
    let blob = "Science-Fiction adventure on the desert planet Arrakis, where spice politics \
                and prophecy decide the fate of great houses";

    c.bench_function("tokenize_text", |b| {
        b.iter(|| tokenize_text(black_box(blob)))
    });
}

fn benchmark_tfidf_vectors(c: &mut Criterion) {
    let corpus = sample_corpus();

    c.bench_function("tfidf_vectors", |b| {
        b.iter(|| tfidf_vectors(black_box(&corpus)))
    });
}

fn benchmark_cosine_similarity(c: &mut Criterion) {
    let corpus = sample_corpus();
    let vectors = tfidf_vectors(&corpus);

    c.bench_function("cosine_similarity", |b| {
        b.iter(|| cosine_similarity(black_box(&vectors[0]), black_box(&vectors[1])))
    });
}

fn benchmark_score_candidates(c: &mut Criterion) {
    let corpus = sample_corpus();
    let (target, candidates) = corpus.split_first().unwrap();

    c.bench_function("score_candidates", |b| {
        b.iter(|| score_candidates(black_box(target), black_box(candidates)))
    });
}

criterion_group!(
    benches,
    benchmark_tokenize_text,
    benchmark_tfidf_vectors,
    benchmark_cosine_similarity,
    benchmark_score_candidates
);
criterion_main!(benches);
