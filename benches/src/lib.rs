// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the Ashlar crates. See the `benches/` directory.
