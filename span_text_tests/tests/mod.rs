// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `span_text`.
//!
//! - The `util` module contains shared sample texts and assertions.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that every module can share `util`.
//! - If you want to add new tests, put them into the module matching their "topic", or create a
//!   new one. Put the topic at the start of the test name: `draw_click_link_color` is better
//!   than `click_link_color_draw`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod properties;
mod util;
