// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nearby_index::{Index, PlayerId, Rect};

use rstar::{AABB, RTree};

const WORLD: f64 = 2000.0;

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_players(n: usize) -> Vec<(PlayerId, f64, f64)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..n)
        .map(|id| {
            (
                id as PlayerId,
                rng.next_f64() * WORLD,
                rng.next_f64() * WORLD,
            )
        })
        .collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("aoi_external_compare");
    for &n in &[1000usize, 10_000] {
        let players = gen_players(n);
        let viewport = Rect::new(800.0, 1000.0, 800.0, 1000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("nearby_build_query_n{}", n), |b| {
            b.iter_batched(
                || players.clone(),
                |players| {
                    let index = Index::from_positions(&players);
                    let hits = index.search(viewport).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || {
                    players
                        .iter()
                        .map(|&(_, x, y)| [x, y])
                        .collect::<Vec<[f64; 2]>>()
                },
                |points| {
                    let tree = RTree::bulk_load(points);
                    let envelope =
                        AABB::from_corners([viewport.x_lo, viewport.y_lo], [viewport.x_hi, viewport.y_hi]);
                    let hits = tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
