//! Benchmarks for index construction, lookup and ranking distances.
//!
//! Dictionaries come from a seeded RNG so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use state_set_index::prelude::*;

// ============================================================================
// Test Data Generation
// ============================================================================

/// Seeded random words over a 12-letter alphabet.
fn generate_words(count: usize, seed: u64) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdeilmnrst";
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=12);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

/// Queries derived from dictionary words by one or two edits.
fn generate_queries(words: &[String]) -> Vec<String> {
    words
        .iter()
        .step_by(97)
        .enumerate()
        .map(|(i, word)| {
            let mut chars: Vec<char> = word.chars().collect();
            match i % 3 {
                0 => {
                    chars.swap(1, 2);
                }
                1 => {
                    chars.remove(chars.len() / 2);
                }
                _ => {
                    chars.insert(2, 'x');
                    chars[0] = 'z';
                }
            }
            chars.into_iter().collect()
        })
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 50_000] {
        let words = generate_words(size, 0x5eed);
        group.throughput(Throughput::Elements(size as u64));

        for prefix_length in [4, 6, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("prefix_{}", prefix_length), size),
                &words,
                |b, words| {
                    b.iter(|| StateSetIndex::build(black_box(words), Identity, prefix_length).unwrap());
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Lookup
// ============================================================================

fn bench_find(c: &mut Criterion) {
    let words = generate_words(20_000, 0xfeed);
    let queries = generate_queries(&words);

    for coverage in [Coverage::Complete, Coverage::IndexedPrefix] {
        let mut group = c.benchmark_group(format!("find/{}", coverage));
        group.throughput(Throughput::Elements(queries.len() as u64));

        for threshold in [0, 1, 2, 3] {
            let index = IndexBuilder::new()
                .prefix_length(6)
                .coverage(coverage)
                .build(&words)
                .unwrap();

            group.bench_with_input(BenchmarkId::from_parameter(threshold), &threshold, |b, &t| {
                b.iter(|| {
                    for query in &queries {
                        black_box(index.find(black_box(query), t).unwrap());
                    }
                });
            });
        }

        group.finish();
    }
}

fn bench_find_by_mapping(c: &mut Criterion) {
    let words = generate_words(20_000, 0xbeef);
    let queries = generate_queries(&words);
    let mut group = c.benchmark_group("find/mapping");
    group.throughput(Throughput::Elements(queries.len() as u64));

    for kind in [MappingKind::Identity, MappingKind::CaseFold, MappingKind::Phonetic] {
        let index = StateSetIndex::build(&words, kind, 6).unwrap();
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(index.find(black_box(query), 2).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let words = generate_words(20_000, 0xcafe);
    let index = StateSetIndex::build(&words, Identity, 6).unwrap();
    let queries = generate_queries(&words);
    let mut group = c.benchmark_group("candidates");

    for threshold in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(threshold), &threshold, |b, &t| {
            b.iter(|| {
                for query in &queries {
                    black_box(index.candidates(black_box(query), t).unwrap());
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Ranking distances
// ============================================================================

fn bench_distances(c: &mut Criterion) {
    let pairs = [
        ("short_1edit", "test", "best"),
        ("medium_transposed", "Mustermann", "Mustremann"),
        ("medium_different", "completely", "different"),
        (
            "long_common_prefix",
            "this_is_a_very_long_common_prefix_abc",
            "this_is_a_very_long_common_prefix_xyz",
        ),
        ("unicode", "naïve café", "naive cafe"),
    ];

    let mut group = c.benchmark_group("distance");
    for (name, source, target) in pairs {
        group.bench_with_input(
            BenchmarkId::new("standard", name),
            &(source, target),
            |b, &(s, t)| b.iter(|| standard_distance(black_box(s), black_box(t))),
        );
        group.bench_with_input(
            BenchmarkId::new("bounded_2", name),
            &(source, target),
            |b, &(s, t)| b.iter(|| bounded_distance(black_box(s), black_box(t), 2)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_find,
    bench_find_by_mapping,
    bench_candidates,
    bench_distances
);
criterion_main!(benches);
