// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use span_text::SpannedText;

/// Assert that every range lies within the text and on character boundaries.
pub(crate) fn assert_ranges_in_bounds(text: &SpannedText, case: &str) {
    let s = text.as_str();
    for (i, range) in text.ranges().iter().enumerate() {
        assert!(
            range.start() <= range.end(),
            "range {i} is reversed with {case}"
        );
        assert!(
            range.end() <= text.len(),
            "range {i} ends past the text with {case}"
        );
        assert!(
            s.is_char_boundary(range.start()) && s.is_char_boundary(range.end()),
            "range {i} splits a character with {case}"
        );
    }
}

/// The text covered by each range, in creation order.
pub(crate) fn sections(text: &SpannedText) -> Vec<&str> {
    text.ranges()
        .iter()
        .map(|range| &text.as_str()[range.range()])
        .collect()
}
