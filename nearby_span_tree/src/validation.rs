// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariant checking for [`SpanTree`], used by tests and debugging sessions.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::node::Node;
use crate::tree::SpanTree;
use crate::types::PlayerId;

/// Per-subtree facts gathered by the checking walk.
struct Summary<T> {
    min: T,
    max: T,
    height: u16,
    count: usize,
}

impl<T: Copy + PartialOrd + Debug> SpanTree<T> {
    /// True when every structural invariant holds.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Walk the tree and verify every structural invariant, reporting the
    /// first violation found:
    ///
    /// - each internal node's `[lo, hi]` equals the extremes of its subtree,
    /// - sibling heights differ by at most one,
    /// - every left-subtree coordinate is ≤ every right-subtree coordinate,
    /// - cached heights are exact,
    /// - player ids are unique and the entry count matches `len`.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let Some(root) = self.root_node() else {
            return if self.len() == 0 {
                Ok(())
            } else {
                Err(format!("empty tree reports len {}", self.len()))
            };
        };
        let summary = check_node(root)?;
        if summary.count != self.len() {
            return Err(format!(
                "tree holds {} entries but reports len {}",
                summary.count,
                self.len()
            ));
        }
        let mut ids: Vec<PlayerId> = self.entries().iter().map(|&(id, _)| id).collect();
        ids.sort_unstable();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                return Err(format!("duplicate player id {}", pair[0]));
            }
        }
        Ok(())
    }
}

fn check_node<T: Copy + PartialOrd + Debug>(node: &Node<T>) -> Result<Summary<T>, String> {
    match node {
        Node::Leaf { pos, .. } => Ok(Summary {
            min: *pos,
            max: *pos,
            height: 0,
            count: 1,
        }),
        Node::Internal {
            lo,
            hi,
            height,
            left,
            right,
        } => {
            let left = check_node(left)?;
            let right = check_node(right)?;
            if left.max > right.min {
                return Err(format!(
                    "ordering violated: left max {:?} exceeds right min {:?}",
                    left.max, right.min
                ));
            }
            if *lo != left.min {
                return Err(format!(
                    "covering span lo {lo:?} disagrees with subtree min {:?}",
                    left.min
                ));
            }
            if *hi != right.max {
                return Err(format!(
                    "covering span hi {hi:?} disagrees with subtree max {:?}",
                    right.max
                ));
            }
            let expected = 1 + left.height.max(right.height);
            if *height != expected {
                return Err(format!("cached height {height} should be {expected}"));
            }
            if left.height.abs_diff(right.height) > 1 {
                return Err(format!(
                    "balance violated: sibling heights {} and {}",
                    left.height, right.height
                ));
            }
            Ok(Summary {
                min: left.min,
                max: right.max,
                height: *height,
                count: left.count + right.count,
            })
        }
    }
}
