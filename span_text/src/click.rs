// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click handlers attached to text ranges.

use alloc::sync::Arc;
use core::fmt;
use core::ops::Range;

/// What a renderer reports when it dispatches a click to a [`ClickHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent<'a> {
    /// The full finalized text.
    pub text: &'a str,
    /// The byte range of the clicked span.
    pub range: Range<usize>,
}

impl<'a> ClickEvent<'a> {
    /// The clicked span's text.
    pub fn section(&self) -> &'a str {
        self.text.get(self.range.clone()).unwrap_or_default()
    }
}

/// A callback stored as data on a text range.
///
/// The builder only records where a handler applies. Hit-testing and dispatch belong to the
/// renderer, which calls [`ClickHandler::invoke`].
///
/// Handlers compare equal only when they share the same allocation.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn(&ClickEvent<'_>)>);

impl ClickHandler {
    /// Wraps `f` as a handler.
    pub fn new(f: impl Fn(&ClickEvent<'_>) + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Runs the handler.
    pub fn invoke(&self, event: &ClickEvent<'_>) {
        (self.0)(event);
    }
}

impl PartialEq for ClickHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClickHandler")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
