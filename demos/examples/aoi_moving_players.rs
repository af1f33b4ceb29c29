// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving players.
//!
//! Tick a seeded population of wandering players, query a viewport each tick,
//! and cross-check the index against a naive filter.
//!
//! Run:
//! - `cargo run -p nearby_demos --example aoi_moving_players`

use nearby_index::{Index, PlayerId, Rect};

const WORLD: f32 = 1000.0;
const PLAYERS: usize = 500;
const TICKS: usize = 60;

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
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

fn main() {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut players: Vec<(PlayerId, f32, f32)> = (0..PLAYERS)
        .map(|id| {
            (
                id as PlayerId,
                rng.next_f32() * WORLD,
                rng.next_f32() * WORLD,
            )
        })
        .collect();
    let mut scene = Index::from_positions(&players);

    let viewport = Rect::new(400.0, 600.0, 400.0, 600.0);
    for tick in 0..TICKS {
        for entry in &mut players {
            let (id, x, y) = *entry;
            let nx = (x + (rng.next_f32() - 0.5) * 10.0).clamp(0.0, WORLD);
            let ny = (y + (rng.next_f32() - 0.5) * 10.0).clamp(0.0, WORLD);
            assert!(scene.update(id, nx, ny));
            *entry = (id, nx, ny);
        }

        let mut visible = scene.search(viewport);
        visible.sort_unstable();
        let mut expected: Vec<PlayerId> = players
            .iter()
            .filter(|&&(_, x, y)| viewport.contains(x, y))
            .map(|&(id, _, _)| id)
            .collect();
        expected.sort_unstable();
        assert_eq!(visible, expected, "index and naive filter disagree");

        if tick % 10 == 0 {
            println!("tick {:2}: {} players in the viewport", tick, visible.len());
        }
    }
    println!("{} ticks verified against the naive filter", TICKS);
}
