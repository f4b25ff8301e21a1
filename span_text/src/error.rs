// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error type for span builder operations.
///
/// Only programmer errors are surfaced: using a builder after it was finalized, or passing an
/// explicit range/offset that does not fit the current text. Missing decoration targets and
/// empty inputs are silent no-ops and never produce an `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,

    /// The caller-provided byte range, if the failing call took one.
    range: Option<Range<usize>>,

    /// The length in bytes of the text at the time of failure.
    len: usize,

    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range provided by the caller, when the failing operation took one.
    ///
    /// Offset-based operations report `offset..offset`.
    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// The length in bytes of the builder text at the time of the error.
    ///
    /// This is `0` for [`ErrorKind::InvalidState`], since a finalized builder holds no text.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn finalized() -> Self {
        Self {
            kind: ErrorKind::InvalidState,
            range: None,
            len: 0,
            boundary: None,
        }
    }

    pub(crate) fn invalid_range(range: Range<usize>, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            range: Some(range),
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(range: Range<usize>, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            range: Some(range),
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary(
        text: &str,
        range: Range<usize>,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (char_start, char_end) = enclosing_char_span(text, index);
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            range: Some(range),
            len: text.len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let range = self.range.clone().unwrap_or(0..0);
        match self.kind {
            ErrorKind::InvalidState => f.write_str("span builder used after finalize"),
            ErrorKind::InvalidRange => write!(
                f,
                "invalid range {}..{}: start > end",
                range.start, range.end
            ),
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                range.start, range.end, self.len
            ),
            ErrorKind::NotOnCharBoundary => match self.boundary {
                Some(b) => write!(
                    f,
                    "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                    range.start, range.end, b.which, b.index, b.char_start, b.char_end
                ),
                None => write!(
                    f,
                    "range {}..{} not on UTF-8 boundary",
                    range.start, range.end
                ),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The builder was already finalized.
    InvalidState,

    /// An explicit range had `start > end`.
    InvalidRange,

    /// An explicit range or offset reached past the end of the text.
    InvalidBounds,

    /// An explicit offset or range endpoint was inside a UTF-8 sequence.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Details about an offending index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

/// Returns the byte span of the codepoint containing `index`.
///
/// `index` must be within the text; callers only use this after a bounds check.
fn enclosing_char_span(text: &str, index: usize) -> (usize, usize) {
    if text.is_char_boundary(index) {
        return (index, index);
    }
    let start = (0..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=text.len())
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    (start, end)
}
