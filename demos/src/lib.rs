// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Ashlar crates. See the `examples/` directory.
