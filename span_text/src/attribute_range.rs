// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Attribute, Endpoint, Error};

/// Whether text typed at either edge of a range would extend it.
///
/// Ranges are never shifted or grown by the builder itself; the flag is carried through to
/// consumers that edit the finalized text further.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Inclusivity {
    /// Neither edge extends the range.
    #[default]
    ExclusiveExclusive,
    /// Text inserted at the start edge joins the range.
    InclusiveExclusive,
    /// Text inserted at the end edge joins the range.
    ExclusiveInclusive,
    /// Text inserted at either edge joins the range.
    InclusiveInclusive,
}

impl Inclusivity {
    /// Returns `true` if insertion at the start edge joins the range.
    pub const fn includes_start(self) -> bool {
        matches!(self, Self::InclusiveExclusive | Self::InclusiveInclusive)
    }

    /// Returns `true` if insertion at the end edge joins the range.
    pub const fn includes_end(self) -> bool {
        matches!(self, Self::ExclusiveInclusive | Self::InclusiveInclusive)
    }
}

/// One attribute applied to a byte range of the text.
///
/// `start <= end <= len` holds against the text as it was when the range was created.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRange {
    start: usize,
    end: usize,
    attribute: Attribute,
    inclusivity: Inclusivity,
}

impl AttributeRange {
    pub(crate) fn new(range: Range<usize>, attribute: Attribute, inclusivity: Inclusivity) -> Self {
        debug_assert!(range.start <= range.end, "attribute range must be ordered");
        Self {
            start: range.start,
            end: range.end,
            attribute,
            inclusivity,
        }
    }

    /// The start byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the covered bytes as a `Range<usize>`.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns `true` for zero-width ranges, which never style anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The attribute carried by this range.
    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// The edge behavior flag chosen when the range was created.
    #[inline]
    pub fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }

    /// Returns `true` if `index` is covered by this range.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns `true` if this range shares any bytes with `range`.
    ///
    /// Zero-width ranges (on either side) count as overlapping when they touch, so that
    /// removal over a span also drops inert markers sitting on its edges.
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        if self.start > range.end || self.end < range.start {
            return false;
        }
        if self.is_empty() || range.is_empty() {
            return true;
        }
        self.start < range.end && self.end > range.start
    }
}

/// Checks an explicit caller range against `text`.
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.clone(), len));
    }
    if range.end > len {
        return Err(Error::invalid_bounds(range.clone(), len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            text,
            range.clone(),
            Endpoint::Start,
            range.start,
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            text,
            range.clone(),
            Endpoint::End,
            range.end,
        ));
    }
    Ok(())
}
