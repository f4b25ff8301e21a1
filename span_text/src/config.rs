// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Inclusivity;

/// Options for a [`SpanBuilder`](crate::SpanBuilder).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// The character inserted into the text in place of each inline image.
    ///
    /// The default is a space.
    pub image_placeholder: char,

    /// The edge behavior recorded on ranges created without an explicit flag.
    ///
    /// The default is [`Inclusivity::ExclusiveExclusive`].
    pub inclusivity: Inclusivity,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            image_placeholder: ' ',
            inclusivity: Inclusivity::ExclusiveExclusive,
        }
    }
}
