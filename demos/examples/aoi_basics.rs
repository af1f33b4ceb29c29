// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area-of-interest basics.
//!
//! Populate a small scene, query a rectangle, move a player, and print the
//! per-axis tree dump.
//!
//! Run:
//! - `cargo run -p nearby_demos --example aoi_basics`

use nearby_index::{Index, Rect};

fn main() {
    let mut scene: Index<f32> = Index::new();
    scene.insert(1, 0.0, 0.0);
    scene.insert(2, 10.0, 10.0);
    scene.insert(3, 5.0, 5.0);
    scene.insert(4, 8.0, 1.0);

    let mut near_origin = scene.search(Rect::new(-1.0, 6.0, -1.0, 6.0));
    near_origin.sort_unstable();
    println!("players near the origin: {:?}", near_origin);
    assert_eq!(near_origin, vec![1, 3]);

    // Player 3 wanders off; the query follows.
    scene.update(3, 40.0, 40.0);
    let near_origin = scene.search(Rect::new(-1.0, 6.0, -1.0, 6.0));
    println!("after the move: {:?}", near_origin);
    assert_eq!(near_origin, vec![1]);

    println!("scene extent: {:?}", scene.range());
    println!("{}", scene.dump(true, true));
}
