// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D area-of-interest index composing two per-axis span trees.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::ops::Sub;

use hashbrown::HashMap;
use nearby_span_tree::{PlayerId, SpanTree};

use crate::types::Rect;

/// 2D area-of-interest index over a population of players.
///
/// X and Y coordinates live in one [`SpanTree`] each; a side map from player
/// id to `(x, y)` resolves the off-axis coordinate during queries and serves
/// as the source of truth for mutations. A player is present in both trees
/// and the map, or in none of them.
pub struct Index<T> {
    x_tree: SpanTree<T>,
    y_tree: SpanTree<T>,
    positions: HashMap<PlayerId, (T, T)>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self {
            x_tree: SpanTree::default(),
            y_tree: SpanTree::default(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Copy + PartialOrd + Debug> Debug for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("players", &self.positions.len())
            .field("x_tree", &self.x_tree)
            .field("y_tree", &self.y_tree)
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Index<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-construct from an initial population. Later duplicates of an id
    /// are ignored.
    pub fn from_positions(players: &[(PlayerId, T, T)]) -> Self {
        let mut positions: HashMap<PlayerId, (T, T)> = HashMap::with_capacity(players.len());
        for &(id, x, y) in players {
            positions.entry(id).or_insert((x, y));
        }
        let mut by_x: Vec<(T, PlayerId)> = positions.iter().map(|(&id, &(x, _))| (x, id)).collect();
        let mut by_y: Vec<(T, PlayerId)> = positions.iter().map(|(&id, &(_, y))| (y, id)).collect();
        by_x.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("coordinates must be comparable"));
        by_y.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("coordinates must be comparable"));
        Self {
            x_tree: SpanTree::from_sorted(&by_x),
            y_tree: SpanTree::from_sorted(&by_y),
            positions,
        }
    }

    /// Number of players in the scene.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no players are present.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the player is present.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.positions.contains_key(&id)
    }

    /// The player's current position, if present.
    pub fn position(&self, id: PlayerId) -> Option<(T, T)> {
        self.positions.get(&id).copied()
    }

    /// Add a player at `(x, y)`. Rejects an already-present id with `false`.
    pub fn insert(&mut self, id: PlayerId, x: T, y: T) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.x_tree.insert(id, x);
        self.y_tree.insert(id, y);
        self.positions.insert(id, (x, y));
        true
    }

    /// Remove a player. Returns `false` when the id is absent.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        let Some((x, y)) = self.positions.remove(&id) else {
            return false;
        };
        let removed_x = self.x_tree.remove(id, x);
        let removed_y = self.y_tree.remove(id, y);
        debug_assert!(
            removed_x && removed_y,
            "aoi invariant violated: side map and trees out of sync"
        );
        true
    }

    /// Move a player to `(x, y)`. Returns `false` when the id is absent.
    ///
    /// Presence and the stored coordinates are validated on the side map
    /// before either tree is touched; with correct hints the per-axis
    /// updates cannot fail, so the two trees move together or not at all.
    pub fn update(&mut self, id: PlayerId, x: T, y: T) -> bool {
        let Some(&(old_x, old_y)) = self.positions.get(&id) else {
            return false;
        };
        let updated_x = self.x_tree.update(id, old_x, x);
        let updated_y = self.y_tree.update(id, old_y, y);
        debug_assert!(
            updated_x && updated_y,
            "aoi invariant violated: side map and trees out of sync"
        );
        self.positions.insert(id, (x, y));
        true
    }

    /// Ids of every player strictly inside the rectangle.
    ///
    /// The axis with the smaller extent is queried first; candidates are then
    /// filtered against the other axis through the side map. Edges are
    /// exclusive on both axes.
    pub fn search(&self, rect: Rect<T>) -> Vec<PlayerId>
    where
        T: Sub<Output = T>,
    {
        let mut out = Vec::new();
        if rect.width() < rect.height() {
            self.x_tree.search_into(rect.x_lo, rect.x_hi, &mut out);
            out.retain(|id| {
                let &(_, y) = self
                    .positions
                    .get(id)
                    .expect("aoi invariant violated: tree entry missing from side map");
                rect.y_lo < y && y < rect.y_hi
            });
        } else {
            self.y_tree.search_into(rect.y_lo, rect.y_hi, &mut out);
            out.retain(|id| {
                let &(x, _) = self
                    .positions
                    .get(id)
                    .expect("aoi invariant violated: tree entry missing from side map");
                rect.x_lo < x && x < rect.x_hi
            });
        }
        out
    }

    /// The covering rectangle of the whole population, or `None` when empty.
    pub fn range(&self) -> Option<Rect<T>> {
        let (x_lo, x_hi) = self.x_tree.range()?;
        let (y_lo, y_hi) = self.y_tree.range()?;
        Some(Rect::new(x_lo, x_hi, y_lo, y_hi))
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.x_tree = SpanTree::default();
        self.y_tree = SpanTree::default();
        self.positions.clear();
    }

    /// Level-by-level textual dump of the selected trees. Diagnostic only.
    pub fn dump(&self, include_x: bool, include_y: bool) -> String {
        let mut out = String::new();
        if include_x {
            out.push_str("x tree:\n");
            out.push_str(&self.x_tree.dump_levels());
        }
        if include_y {
            out.push_str("y tree:\n");
            out.push_str(&self.y_tree.dump_levels());
        }
        out
    }
}
