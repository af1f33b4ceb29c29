// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared primitive types.

/// Identifier of a player tracked by the scene index.
///
/// Identifiers are opaque and stable for a player's lifetime in the scene.
/// They are the primary key of the index: no two entries share one, while
/// coordinates may collide freely.
pub type PlayerId = u16;
