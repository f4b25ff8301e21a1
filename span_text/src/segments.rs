// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-based segmentation for [`SpannedText`].
//!
//! Ranges in a [`SpannedText`] overlap freely. This module splits the text into
//! non-overlapping, contiguous segments and reports which ranges are active over each one.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Range};

use crate::{AttributeRange, SpannedText};

fn build_segment_state(text: &SpannedText, workspace: &mut AttributeSegmentsWorkspace) {
    let ranges = text.ranges();

    workspace.boundaries.clear();
    workspace.boundaries.reserve(2 + ranges.len() * 2);
    workspace.boundaries.push(0);
    workspace.boundaries.push(text.len());
    for range in ranges {
        workspace.boundaries.push(range.start());
        workspace.boundaries.push(range.end());
    }
    workspace.boundaries.sort_unstable();
    workspace.boundaries.dedup();

    let boundary_count = workspace.boundaries.len();
    workspace.starts.clear();
    workspace.starts.resize(boundary_count, Vec::new());
    workspace.ends.clear();
    workspace.ends.resize(boundary_count, Vec::new());

    for (index, range) in ranges.iter().enumerate() {
        if range.is_empty() {
            continue;
        }
        let (Ok(start), Ok(end)) = (
            workspace.boundaries.binary_search(&range.start()),
            workspace.boundaries.binary_search(&range.end()),
        ) else {
            continue;
        };
        workspace.starts[start].push(index);
        workspace.ends[end].push(index);
    }

    workspace.active.clear();
}

/// Reusable allocation workspace for attribute segmentation.
///
/// Reusing a workspace amortizes setup allocations when segmenting many texts.
#[derive(Clone, Debug, Default)]
pub struct AttributeSegmentsWorkspace {
    boundaries: Vec<usize>,
    /// Range indices starting at each boundary.
    starts: Vec<Vec<usize>>,
    /// Range indices ending at each boundary.
    ends: Vec<Vec<usize>>,
    /// Active range indices, kept sorted.
    active: Vec<usize>,
}

impl AttributeSegmentsWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an iterator using this workspace's retained allocations.
    pub fn segments<'w, 'a>(&'w mut self, text: &'a SpannedText) -> AttributeSegments<'w, 'a> {
        build_segment_state(text, self);
        AttributeSegments {
            text,
            workspace: Workspace::Borrowed(self),
            index: 0,
        }
    }
}

#[derive(Debug)]
enum Workspace<'w> {
    Owned(AttributeSegmentsWorkspace),
    Borrowed(&'w mut AttributeSegmentsWorkspace),
}

impl Deref for Workspace<'_> {
    type Target = AttributeSegmentsWorkspace;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(workspace) => workspace,
            Self::Borrowed(workspace) => workspace,
        }
    }
}

impl DerefMut for Workspace<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::Owned(workspace) => workspace,
            Self::Borrowed(workspace) => workspace,
        }
    }
}

/// Iterator over contiguous attribute segments of a [`SpannedText`].
///
/// Each yielded item is a non-empty, non-overlapping byte range, and together they cover the
/// whole text. The ranges active for the yielded segment are exposed through
/// [`AttributeSegments::active_spans`].
///
/// Zero-width ranges are never active, but their offsets still split segments.
///
/// # Examples
///
/// ```
/// use span_text::{Attribute, SpanBuilder};
///
/// # fn main() -> Result<(), span_text::Error> {
/// let mut builder = SpanBuilder::new();
/// builder
///     .add_section("hello")?
///     .set_underline_in(0..2)?
///     .set_strikethrough_in(1..5)?;
/// let text = builder.finalize()?;
///
/// let mut segments = text.segments();
/// assert_eq!(segments.next(), Some(0..1));
/// assert_eq!(segments.active_spans().len(), 1);
///
/// assert_eq!(segments.next(), Some(1..2));
/// let active: Vec<_> = segments
///     .active_spans()
///     .iter()
///     .map(|range| range.attribute())
///     .collect();
/// assert_eq!(active, [&Attribute::Underline, &Attribute::Strikethrough]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AttributeSegments<'w, 'a> {
    text: &'a SpannedText,
    workspace: Workspace<'w>,
    index: usize,
}

impl<'a> AttributeSegments<'static, 'a> {
    /// Segments `text` with a fresh workspace.
    pub(crate) fn new(text: &'a SpannedText) -> Self {
        let mut workspace = AttributeSegmentsWorkspace::new();
        build_segment_state(text, &mut workspace);
        Self {
            text,
            workspace: Workspace::Owned(workspace),
            index: 0,
        }
    }
}

impl<'a> AttributeSegments<'_, 'a> {
    /// The text being segmented.
    pub fn text(&self) -> &'a SpannedText {
        self.text
    }

    fn update_active_for_boundary(&mut self, boundary: usize) {
        let workspace = &mut *self.workspace;
        for id in &workspace.ends[boundary] {
            if let Ok(ix) = workspace.active.binary_search(id) {
                workspace.active.remove(ix);
            }
        }
        for &id in &workspace.starts[boundary] {
            if let Err(ix) = workspace.active.binary_search(&id) {
                workspace.active.insert(ix, id);
            }
        }
    }

    /// Returns the ranges active for the most recently yielded segment.
    ///
    /// Before the first call to [`Iterator::next`], and after exhaustion, this view is empty.
    pub fn active_spans(&self) -> ActiveSpans<'_, 'a> {
        ActiveSpans {
            active_ids: &self.workspace.active,
            ranges: self.text.ranges(),
        }
    }
}

impl Iterator for AttributeSegments<'_, '_> {
    type Item = Range<usize>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 < self.workspace.boundaries.len() {
            self.update_active_for_boundary(self.index);
            let start = self.workspace.boundaries[self.index];
            let end = self.workspace.boundaries[self.index + 1];
            self.index += 1;
            debug_assert!(start < end, "boundaries are sorted + deduped");
            return Some(start..end);
        }
        self.workspace.active.clear();
        None
    }
}

impl ExactSizeIterator for AttributeSegments<'_, '_> {
    fn len(&self) -> usize {
        // Remaining segments are remaining adjacent boundary pairs.
        self.workspace
            .boundaries
            .len()
            .saturating_sub(self.index + 1)
    }
}

/// The ranges active over a particular segment.
///
/// Iterates in application order (creation order). Iterate in reverse for last-writer-wins
/// lookups.
#[derive(Clone, Debug)]
pub struct ActiveSpans<'s, 'a> {
    active_ids: &'s [usize],
    ranges: &'a [AttributeRange],
}

impl<'s, 'a> ActiveSpans<'s, 'a> {
    /// Iterate over the active ranges in application order.
    pub fn iter(&self) -> ActiveSpansIter<'s, 'a> {
        ActiveSpansIter {
            ids: self.active_ids.iter(),
            ranges: self.ranges,
        }
    }

    /// Returns `true` if no ranges are active in this segment.
    pub fn is_empty(&self) -> bool {
        self.active_ids.is_empty()
    }

    /// Returns the number of active ranges.
    pub fn len(&self) -> usize {
        self.active_ids.len()
    }
}

impl<'s, 'a> IntoIterator for &ActiveSpans<'s, 'a> {
    type Item = &'a AttributeRange;
    type IntoIter = ActiveSpansIter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over active ranges in application order.
#[derive(Clone, Debug)]
pub struct ActiveSpansIter<'s, 'a> {
    ids: core::slice::Iter<'s, usize>,
    ranges: &'a [AttributeRange],
}

impl<'a> Iterator for ActiveSpansIter<'_, 'a> {
    type Item = &'a AttributeRange;

    fn next(&mut self) -> Option<Self::Item> {
        let ranges = self.ranges;
        self.ids.by_ref().find_map(|&id| ranges.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}

impl DoubleEndedIterator for ActiveSpansIter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ranges = self.ranges;
        self.ids.by_ref().rev().find_map(|&id| ranges.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeSegmentsWorkspace;
    use crate::{Attribute, AttributeRange, Inclusivity, SpannedText};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::Range;

    fn spanned(text: &str, ranges: &[(Range<usize>, Attribute)]) -> SpannedText {
        SpannedText::new(
            String::from(text),
            ranges
                .iter()
                .cloned()
                .map(|(range, attribute)| {
                    AttributeRange::new(range, attribute, Inclusivity::ExclusiveExclusive)
                })
                .collect(),
        )
    }

    fn active(segments: &super::AttributeSegments<'_, '_>) -> Vec<Attribute> {
        segments
            .active_spans()
            .iter()
            .map(|range| range.attribute().clone())
            .collect()
    }

    #[test]
    fn empty_text_yields_nothing() {
        let text = spanned("", &[]);
        let mut segments = text.segments();
        assert_eq!(segments.len(), 0);
        assert!(segments.next().is_none());
    }

    #[test]
    fn no_ranges_yields_single_segment() {
        let text = spanned("hello", &[]);
        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..5));
        assert!(segments.active_spans().is_empty());
        assert_eq!(segments.next(), None);
    }

    #[test]
    fn overlapping_ranges() {
        let text = spanned(
            "abcdef",
            &[(1..4, Attribute::Underline), (2..5, Attribute::Strikethrough)],
        );
        let mut segments = text.segments();
        assert_eq!(segments.size_hint(), (5, Some(5)));

        assert_eq!(segments.next(), Some(0..1));
        assert!(segments.active_spans().is_empty());
        assert_eq!(segments.next(), Some(1..2));
        assert_eq!(active(&segments), vec![Attribute::Underline]);
        assert_eq!(segments.next(), Some(2..4));
        assert_eq!(
            active(&segments),
            vec![Attribute::Underline, Attribute::Strikethrough]
        );
        assert_eq!(segments.next(), Some(4..5));
        assert_eq!(active(&segments), vec![Attribute::Strikethrough]);
        assert_eq!(segments.next(), Some(5..6));
        assert!(segments.active_spans().is_empty());
        assert_eq!(segments.next(), None);
    }

    #[test]
    fn application_order_is_reversible() {
        let text = spanned(
            "abc",
            &[
                (0..3, Attribute::Underline),
                (0..3, Attribute::Subscript),
                (0..3, Attribute::Superscript),
            ],
        );
        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..3));
        let reverse: Vec<_> = segments
            .active_spans()
            .iter()
            .rev()
            .map(|range| range.attribute().clone())
            .collect();
        assert_eq!(
            reverse,
            vec![
                Attribute::Superscript,
                Attribute::Subscript,
                Attribute::Underline
            ]
        );
    }

    #[test]
    fn zero_width_range_splits_but_is_inactive() {
        let text = spanned("hello", &[(2..2, Attribute::Underline)]);
        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..2));
        assert!(segments.active_spans().is_empty());
        assert_eq!(segments.next(), Some(2..5));
        assert!(segments.active_spans().is_empty());
        assert_eq!(segments.next(), None);
    }

    #[test]
    fn active_spans_empty_after_exhaustion() {
        let text = spanned("abc", &[(0..3, Attribute::Underline)]);
        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..3));
        assert_eq!(segments.active_spans().len(), 1);
        assert_eq!(segments.next(), None);
        assert!(segments.active_spans().is_empty());
    }

    #[test]
    fn workspace_reuses_for_multiple_texts() {
        let mut workspace = AttributeSegmentsWorkspace::new();

        let a = spanned("abc", &[(0..1, Attribute::Underline)]);
        {
            let mut segments = workspace.segments(&a);
            assert_eq!(segments.next(), Some(0..1));
            assert_eq!(active(&segments), vec![Attribute::Underline]);
            assert_eq!(segments.next(), Some(1..3));
            assert_eq!(segments.next(), None);
        }

        let b = spanned("wxyz", &[(1..4, Attribute::Strikethrough)]);
        {
            let mut segments = workspace.segments(&b);
            assert_eq!(segments.next(), Some(0..1));
            assert!(segments.active_spans().is_empty());
            assert_eq!(segments.next(), Some(1..4));
            assert_eq!(active(&segments), vec![Attribute::Strikethrough]);
            assert_eq!(segments.next(), None);
        }
    }
}
