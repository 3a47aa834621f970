// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use covergrid_search::{Corpus, QueryPattern, SearchEngine, diff};

const WORDS: &[&str] = &[
    "super", "mega", "legend", "of", "the", "hero", "quest", "kart", "racing", "dragon", "star",
    "fox", "metal", "gear", "final", "fantasy", "castle", "night", "island", "world",
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// JSON payloads of `n` cards, each with a title and a short alias field.
fn gen_payloads(n: usize) -> Vec<(u32, String)> {
    let mut rng = Rng::new(0xC0DE_CAFE_F00D_0001);
    (0..n)
        .map(|i| {
            let words = 2 + rng.pick(4);
            let title: Vec<&str> = (0..words).map(|_| WORDS[rng.pick(WORDS.len())]).collect();
            let alias: String = title.iter().filter_map(|w| w.chars().next()).collect();
            let payload = format!(r#"["{}", "{}"]"#, title.join(" "), alias.to_uppercase());
            (i as u32, payload)
        })
        .collect()
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    let keystrokes = ["l", "le", "leg", "lege", "legend", "legend ", "legend h", "legend he", ""];
    for &n in &[100usize, 1000, 5000] {
        let payloads = gen_payloads(n);
        group.throughput(Throughput::Elements((n * keystrokes.len()) as u64));
        group.bench_function(format!("keystrokes_n{}", n), |b| {
            b.iter_batched(
                || SearchEngine::from_payloads(payloads.iter().map(|(id, p)| (*id, p.as_str()))),
                |mut engine| {
                    let mut emitted = 0;
                    for q in keystrokes {
                        emitted += engine.on_query_change(q).len();
                    }
                    black_box(emitted);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    let corpus = Corpus::new(["The Legend of the Hero: Castle Night Quest", "TLOTHCNQ"]);
    for query in ["hero", "legend hero", "the of castle quest"] {
        group.bench_function(format!("compile_match_{}", query.replace(' ', "_")), |b| {
            b.iter(|| {
                let pattern = QueryPattern::compile(black_box(query)).unwrap();
                black_box(corpus.matches(&pattern));
            })
        });
    }
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for &n in &[100u32, 1000, 5000] {
        let prev: Vec<u32> = (0..n).filter(|i| i % 2 == 0).collect();
        let next: Vec<u32> = (0..n).filter(|i| i % 3 == 0).collect();
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("half_vs_third_n{}", n), |b| {
            b.iter(|| black_box(diff(&prev, &next)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_typing, bench_pattern, bench_diff);
criterion_main!(benches);
