// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::{
    Attribute, AttributeRange, AttributeSegments, ClickEvent, ClickHandler, DrawRuns, DrawState,
    InlineImage,
};

/// Finished text with its attribute ranges.
///
/// Produced by [`SpanBuilder::finalize`](crate::SpanBuilder::finalize). Ranges keep creation
/// order, which is also the order in which overlapping attributes apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpannedText {
    text: String,
    ranges: Vec<AttributeRange>,
}

impl SpannedText {
    pub(crate) fn new(text: String, ranges: Vec<AttributeRange>) -> Self {
        debug_assert!(
            ranges.iter().all(|r| r.end() <= text.len()),
            "ranges must lie within the text"
        );
        Self { text, ranges }
    }

    /// The text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All ranges in creation order.
    pub fn ranges(&self) -> &[AttributeRange] {
        &self.ranges
    }

    /// Ranges covering the byte at `index`, in creation order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &AttributeRange> + '_ {
        self.ranges.iter().filter(move |r| r.contains(index))
    }

    /// Ranges overlapping `range`, in creation order.
    pub fn attributes_for_range(
        &self,
        range: Range<usize>,
    ) -> impl Iterator<Item = &AttributeRange> + '_ {
        self.ranges.iter().filter(move |r| r.overlaps(&range))
    }

    /// Click handlers covering the byte at `index`, each paired with the event to dispatch.
    ///
    /// Hit-testing a position to a byte index is up to the renderer.
    pub fn click_targets_at(
        &self,
        index: usize,
    ) -> impl Iterator<Item = (&ClickHandler, ClickEvent<'_>)> + '_ {
        self.attributes_at(index).filter_map(move |r| match r.attribute() {
            Attribute::Click(handler) => Some((
                handler,
                ClickEvent {
                    text: &self.text,
                    range: r.range(),
                },
            )),
            _ => None,
        })
    }

    /// Inline images as `(range index, placeholder range, image)`.
    ///
    /// The range index is the key [`ImageCache`](crate::ImageCache) uses.
    pub fn images(&self) -> impl Iterator<Item = (usize, Range<usize>, &InlineImage)> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .filter_map(|(index, r)| match r.attribute() {
                Attribute::Image(image) => Some((index, r.range(), image)),
                _ => None,
            })
    }

    /// Splits the text into non-overlapping segments with their active ranges.
    pub fn segments(&self) -> AttributeSegments<'static, '_> {
        AttributeSegments::new(self)
    }

    /// Resolves the text into runs of uniform paint state, starting each run from `base`.
    pub fn draw_runs(&self, base: DrawState) -> DrawRuns<'_> {
        DrawRuns::new(self, base)
    }

    /// Splits into the text and its ranges.
    pub fn into_parts(self) -> (String, Vec<AttributeRange>) {
        (self.text, self.ranges)
    }
}

impl AsRef<str> for SpannedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SpannedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
