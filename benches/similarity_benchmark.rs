use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serp_similarity::{score_serp_similarity, ResultSequence, SequenceSimilarity};

fn benchmark_sequence_ratio(c: &mut Criterion) {
    // Two 100-result SERPs with heavy but shuffled overlap
    let a: ResultSequence = (0..100).map(|i| format!("domain-{}.com", i)).collect();
    let b: ResultSequence = (0..100)
        .map(|i| format!("domain-{}.com", (i * 37) % 110))
        .collect();

    c.bench_function("sequence_ratio", |bencher| {
        bencher.iter(|| SequenceSimilarity::new(black_box(&a), black_box(&b)).ratio())
    });
}

fn benchmark_score_serp_similarity(c: &mut Criterion) {
    // 20 keywords, 10 results each, with partial cross-keyword overlap
    let sequences: Vec<ResultSequence> = (0..20)
        .map(|k| {
            (0..10)
                .map(|r| format!("site-{}.com", (k * 3 + r) % 40))
                .collect()
        })
        .collect();

    c.bench_function("score_serp_similarity", |bencher| {
        bencher.iter(|| score_serp_similarity(black_box(&sequences)))
    });
}

criterion_group!(
    benches,
    benchmark_sequence_ratio,
    benchmark_score_serp_similarity
);
criterion_main!(benches);
