// Copyright 2025 the Nearby Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo-only package; see the `examples/` directory.
