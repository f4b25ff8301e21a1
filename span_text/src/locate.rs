// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Substring location for decoration targets.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

/// Byte ranges produced by [`locate`].
pub type Matches = SmallVec<[Range<usize>; 2]>;

/// Which occurrence(s) of a target to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// The first occurrence.
    First,
    /// The last occurrence.
    #[default]
    Last,
    /// Every non-overlapping occurrence, scanning left to right.
    All,
}

/// A substring to decorate, plus how to find it.
///
/// Converting from `&str` gives the defaults: [`MatchPolicy::Last`], case-sensitive.
///
/// A target whose case sensitivity was never set takes the default of the method it is passed
/// to. The color shorthands such as
/// [`SpanBuilder::set_fore_color_section`](crate::SpanBuilder::set_fore_color_section) ignore
/// case by default; everything else is case-sensitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target<'a> {
    text: &'a str,
    policy: MatchPolicy,
    case_sensitive: Option<bool>,
}

impl<'a> Target<'a> {
    /// Targets the last occurrence of `text`.
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            policy: MatchPolicy::Last,
            case_sensitive: None,
        }
    }

    /// Uses the first occurrence.
    #[must_use]
    pub const fn first(self) -> Self {
        self.with_policy(MatchPolicy::First)
    }

    /// Uses the last occurrence.
    #[must_use]
    pub const fn last(self) -> Self {
        self.with_policy(MatchPolicy::Last)
    }

    /// Uses every occurrence.
    #[must_use]
    pub const fn all(self) -> Self {
        self.with_policy(MatchPolicy::All)
    }

    /// Sets the match policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Matches regardless of letter case.
    #[must_use]
    pub const fn ignore_case(self) -> Self {
        self.case_sensitive(false)
    }

    /// Sets whether letter case must match.
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Applies `case_sensitive` unless the case sensitivity was already set.
    pub(crate) const fn or_case_sensitive(mut self, case_sensitive: bool) -> Self {
        if self.case_sensitive.is_none() {
            self.case_sensitive = Some(case_sensitive);
        }
        self
    }

    /// The substring being searched for.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The match policy.
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Whether letter case must match.
    pub const fn is_case_sensitive(&self) -> bool {
        match self.case_sensitive {
            Some(case_sensitive) => case_sensitive,
            None => true,
        }
    }

    /// Locates this target in `base`.
    pub fn locate_in(&self, base: &str) -> Matches {
        locate(base, self.text, self.policy, self.is_case_sensitive())
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(text: &'a String) -> Self {
        Self::new(text)
    }
}

/// Finds `target` in `base`, returning byte ranges into `base`.
///
/// An empty target, or one that does not occur, yields no ranges.
///
/// Case-insensitive search compares the Unicode uppercase forms of both strings. Matches are
/// reported against the original `base`; a match boundary that falls inside the expansion of a
/// single character (such as `ß` uppercasing to `SS`) is widened to that whole character.
pub fn locate(base: &str, target: &str, policy: MatchPolicy, case_sensitive: bool) -> Matches {
    if target.is_empty() {
        return Matches::new();
    }
    if case_sensitive {
        return find(base, target, policy);
    }

    let folded = Folded::new(base);
    let target = target.to_uppercase();
    let mut matches = Matches::new();
    let mut last_end = 0;
    for range in find(&folded.text, &target, policy) {
        let original = folded.original_range(range);
        // Widening can pull adjacent folded matches onto a shared character.
        if original.start < last_end {
            continue;
        }
        last_end = original.end;
        matches.push(original);
    }
    matches
}

fn find(base: &str, target: &str, policy: MatchPolicy) -> Matches {
    let mut matches = Matches::new();
    match policy {
        MatchPolicy::First => {
            if let Some(start) = base.find(target) {
                matches.push(start..start + target.len());
            }
        }
        MatchPolicy::Last => {
            if let Some(start) = base.rfind(target) {
                matches.push(start..start + target.len());
            }
        }
        MatchPolicy::All => {
            // `match_indices` resumes after each match, so repeats never overlap.
            matches.extend(
                base.match_indices(target)
                    .map(|(start, m)| start..start + m.len()),
            );
        }
    }
    matches
}

/// An uppercased copy of a string that remembers where each of its characters came from.
struct Folded {
    text: String,
    /// `(folded_start, original_start, original_end)` for each folded character.
    origins: Vec<(usize, usize, usize)>,
}

impl Folded {
    fn new(base: &str) -> Self {
        let mut text = String::with_capacity(base.len());
        let mut origins = Vec::with_capacity(base.len());
        for (start, c) in base.char_indices() {
            let end = start + c.len_utf8();
            for upper in c.to_uppercase() {
                origins.push((text.len(), start, end));
                text.push(upper);
            }
        }
        Self { text, origins }
    }

    /// Index of the folded character containing byte `offset`.
    fn origin_index(&self, offset: usize) -> usize {
        match self.origins.binary_search_by_key(&offset, |&(folded, _, _)| folded) {
            Ok(ix) => ix,
            Err(ix) => ix.saturating_sub(1),
        }
    }

    fn original_range(&self, folded: Range<usize>) -> Range<usize> {
        let (_, start, _) = self.origins[self.origin_index(folded.start)];
        let (_, _, end) = self.origins[self.origin_index(folded.end - 1)];
        start..end
    }
}
