//! Classifier benchmarks: training throughput at the memory-capacity
//! boundary (every learn evicts) and classification over a grown
//! vocabulary.
//!
//! Run with: cargo bench -p sieve-core --bench classifier_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sieve_core::NaiveBayesClassifier;

/// Deterministic pseudo-corpus: `count` samples over a `vocabulary`-sized
/// token space, alternating between 4 categories.
fn corpus(count: usize, vocabulary: usize) -> Vec<(u32, Vec<u32>)> {
    (0..count)
        .map(|i| {
            let category = (i % 4) as u32;
            let features = (0..8)
                .map(|j| ((i * 31 + j * 17) % vocabulary) as u32)
                .collect();
            (category, features)
        })
        .collect()
}

fn learn_at_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("learn");
    for capacity in [100usize, 1000] {
        let samples = corpus(capacity * 2, 512);
        group.bench_with_input(
            BenchmarkId::new("sliding_window", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut nb: NaiveBayesClassifier<u32, u32> =
                        NaiveBayesClassifier::with_memory_capacity(capacity);
                    for (category, features) in &samples {
                        nb.learn(*category, features.clone());
                    }
                    black_box(nb.core().categories_total())
                });
            },
        );
    }
    group.finish();
}

fn classify_trained(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for vocabulary in [128usize, 2048] {
        let mut nb: NaiveBayesClassifier<u32, u32> =
            NaiveBayesClassifier::with_memory_capacity(1000);
        for (category, features) in corpus(1000, vocabulary) {
            nb.learn(category, features);
        }
        let query: Vec<u32> = (0..16).collect();
        group.bench_with_input(
            BenchmarkId::new("ranked", vocabulary),
            &vocabulary,
            |b, _| {
                b.iter(|| black_box(nb.classify_detailed(black_box(&query))));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, learn_at_capacity, classify_trained);
criterion_main!(benches);
