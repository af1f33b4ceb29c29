// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearby Index: a 2D area-of-interest index for a game scene.
//!
//! The index tracks a dynamic population of players, each identified by a
//! stable [`PlayerId`] and positioned on two real-valued axes, and answers
//! one interactive query: which players currently lie inside an axis-aligned
//! rectangle?
//!
//! - Insert, remove, and move players as cheaply as the query itself.
//! - Rectangle search with exclusive edges, resolved by querying the
//!   narrower axis first and filtering through a side map.
//! - Covering [`Rect`] of the whole population, bulk construction, and a
//!   level-by-level diagnostic dump.
//!
//! Each axis is indexed by a `nearby_span_tree::SpanTree`; this crate owns
//! the pair plus the id → `(x, y)` side map and keeps the three in lockstep.
//!
//! # Example
//!
//! ```rust
//! use nearby_index::{Index, Rect};
//!
//! let mut scene: Index<f32> = Index::new();
//! scene.insert(1, 0.0, 0.0);
//! scene.insert(2, 10.0, 10.0);
//! scene.insert(3, 5.0, 5.0);
//!
//! let mut near_origin = scene.search(Rect::new(-1.0, 6.0, -1.0, 6.0));
//! near_origin.sort_unstable();
//! assert_eq!(near_origin, vec![1, 3]);
//!
//! // Move player 3 away and query again.
//! assert!(scene.update(3, 50.0, 50.0));
//! assert_eq!(scene.search(Rect::new(-1.0, 6.0, -1.0, 6.0)), vec![1]);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds
//! may assert.

#![no_std]

extern crate alloc;

mod index;
mod types;

pub use index::Index;
pub use nearby_span_tree::PlayerId;
pub use types::Rect;
