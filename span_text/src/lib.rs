// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span Text is a fluent builder for text carrying ranged style attributes.
//!
//! - [`SpanBuilder`] accumulates text and attribute ranges through chained calls.
//! - [`Target`] anchors an attribute to occurrences of a substring instead of explicit offsets.
//! - [`SpannedText`] is the finished, immutable result handed to a renderer.
//! - [`AttributeSegments`] and [`DrawRuns`] resolve overlapping ranges into flat runs.
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards to `peniko/std`.
//! - `libm`: Forwards to `peniko/libm` for `no_std` builds.
//!
//! ## Indices
//!
//! All ranges and offsets are **byte indices** into UTF-8 text. Explicit ranges must lie on
//! character boundaries; ranges found by substring search always do.
//!
//! ## Overlaps
//!
//! Ranges may overlap freely and are never merged. When a renderer resolves a run, the active
//! attributes apply in creation order (last writer wins).
//!
//! ## Example
//!
//! ```
//! use peniko::color::palette::css;
//! use span_text::{ClickHandler, DrawState, SpanBuilder, Target};
//!
//! # fn main() -> Result<(), span_text::Error> {
//! let mut builder = SpanBuilder::new();
//! builder
//!     .add_section("Read the ")?
//!     .add_clickable_section(
//!         "privacy policy",
//!         span_text::Attribute::ForegroundColor(css::ORANGE),
//!         ClickHandler::new(|event| assert_eq!(event.section(), "privacy policy")),
//!     )?
//!     .add_section(" before continuing.")?
//!     .set_strikethrough_section(Target::new("continuing"))?;
//! let text = builder.finalize()?;
//!
//! for (handler, event) in text.click_targets_at(12) {
//!     handler.invoke(&event);
//! }
//!
//! let runs: Vec<_> = text.draw_runs(DrawState::default()).coalesced().collect();
//! assert_eq!(runs.len(), 5);
//! assert_eq!(runs[1].state.color, css::ORANGE);
//! assert!(runs[3].state.strikethrough);
//! # Ok(())
//! # }
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attribute;
mod attribute_range;
mod builder;
mod click;
mod config;
mod draw;
mod error;
mod image;
mod locate;
mod sections;
mod segments;
mod spanned;


pub use crate::attribute::{
    Alignment, Attribute, BlurStyle, FontHandle, MaskFilter, TypefaceStyle,
};
pub use crate::attribute_range::{AttributeRange, Inclusivity};
pub use crate::builder::SpanBuilder;
pub use crate::click::{ClickEvent, ClickHandler};
pub use crate::config::BuilderConfig;
pub use crate::draw::{CoalescedDrawRuns, DrawRun, DrawRuns, DrawState, VerticalPosition};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::image::{
    FontMetrics, ImageAlign, ImageCache, ImageHandle, ImageResolver, ImageSource, InlineImage,
};
pub use crate::locate::{locate, MatchPolicy, Matches, Target};
pub use crate::segments::{
    ActiveSpans, ActiveSpansIter, AttributeSegments, AttributeSegmentsWorkspace,
};
pub use crate::spanned::SpannedText;
