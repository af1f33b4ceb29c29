// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearby Span Tree: a height-balanced ordered index over one coordinate axis.
//!
//! The tree stores `(player id, coordinate)` entries as leaves of a balanced
//! binary tree whose internal nodes cache the covering span `[lo, hi]` of
//! their subtree. Range searches prune on the cached spans; inserts, removes,
//! and coordinate updates keep the tree balanced and the spans exact.
//!
//! - Insert, remove, and update entries keyed by a stable player id.
//! - Range-search for every id strictly inside an open interval.
//! - Bulk-build from sorted input in O(n).
//! - Invariant checking for tests ([`SpanTree::check_invariants_detailed`]).
//!
//! One tree indexes one axis. Pairing two of them under a shared side map
//! yields a 2D area-of-interest index; that composition lives in the
//! `nearby_index` crate.
//!
//! # Example
//!
//! ```rust
//! use nearby_span_tree::SpanTree;
//!
//! let mut tree: SpanTree<f32> = SpanTree::new();
//! tree.insert(1, 0.5);
//! tree.insert(2, 4.0);
//! tree.insert(3, 9.5);
//!
//! // Bounds are exclusive; results come back in coordinate order.
//! assert_eq!(tree.search(0.0, 5.0), vec![1, 2]);
//!
//! assert!(tree.update(2, 4.0, 8.0));
//! assert_eq!(tree.search(5.0, 10.0), vec![2, 3]);
//!
//! assert!(tree.remove(3, 9.5));
//! assert_eq!(tree.range(), Some((0.5, 8.0)));
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds
//! may assert.

#![no_std]

extern crate alloc;

mod node;
mod tree;
mod types;
mod validation;

pub use tree::SpanTree;
pub use types::PlayerId;
