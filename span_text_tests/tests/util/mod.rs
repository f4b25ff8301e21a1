// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
pub(crate) mod samples;

pub(crate) use asserts::{assert_ranges_in_bounds, sections};
