// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline images and the renderer-side helpers for placing them.
//!
//! An inline image occupies a single placeholder character in the text flow. The builder only
//! records which image sits where; decoding is left to an [`ImageResolver`] supplied by the
//! renderer, and resolved data can be reused per range through an [`ImageCache`].

use core::fmt;

use hashbrown::HashMap;
use linebender_resource_handle::{Blob, WeakBlob};

use crate::{Attribute, SpannedText};

/// Opaque, shared image data.
///
/// The bytes are never inspected by this crate. Two handles are equal when they refer to the
/// same underlying blob.
#[derive(Clone)]
pub struct ImageHandle(Blob<u8>);

impl ImageHandle {
    /// Wraps an existing blob.
    pub fn new(blob: Blob<u8>) -> Self {
        Self(blob)
    }

    /// Borrows the underlying blob.
    pub fn blob(&self) -> &Blob<u8> {
        &self.0
    }

    /// The unique identifier of the underlying blob.
    pub fn id(&self) -> u64 {
        self.0.id()
    }
}

impl From<Blob<u8>> for ImageHandle {
    fn from(blob: Blob<u8>) -> Self {
        Self(blob)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("id", &self.0.id())
            .field("len", &self.0.data().len())
            .finish()
    }
}

/// Where an inline image comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// An application resource identifier, resolved by the renderer.
    Resource(u32),
    /// Image data the caller already holds.
    Data(ImageHandle),
}

/// Vertical placement of an inline image relative to its line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageAlign {
    /// The image bottom sits on the line bottom.
    #[default]
    Bottom,
    /// The image bottom sits on the text baseline.
    Baseline,
    /// The image's vertical center matches the visual center of the surrounding text.
    Center,
}

/// Font metrics in y-down coordinates relative to the baseline.
///
/// `top` and `ascent` are negative (above the baseline), `descent` and `bottom` positive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Highest extent of any glyph.
    pub top: f32,
    /// Recommended distance above the baseline.
    pub ascent: f32,
    /// Recommended distance below the baseline.
    pub descent: f32,
    /// Lowest extent of any glyph.
    pub bottom: f32,
}

impl FontMetrics {
    /// The height of the text between ascent and descent.
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// An image laid out inline with text.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineImage {
    /// The image to draw.
    pub source: ImageSource,
    /// Drawn width in pixels.
    pub width: f32,
    /// Drawn height in pixels.
    pub height: f32,
    /// Vertical placement.
    pub align: ImageAlign,
}

impl InlineImage {
    /// Creates a bottom-aligned image of the given size.
    pub fn new(source: ImageSource, width: f32, height: f32) -> Self {
        Self {
            source,
            width,
            height,
            align: ImageAlign::Bottom,
        }
    }

    /// Creates a vertically centered image of the given size.
    pub fn centered(source: ImageSource, width: f32, height: f32) -> Self {
        Self {
            align: ImageAlign::Center,
            ..Self::new(source, width, height)
        }
    }

    /// Returns this image with a different vertical placement.
    #[must_use]
    pub fn with_align(mut self, align: ImageAlign) -> Self {
        self.align = align;
        self
    }

    /// Measures the image for line layout.
    ///
    /// Returns the horizontal advance. When `line` is given it is rewritten to the metrics the
    /// placeholder contributes to its line, computed from `paint`, the metrics of the
    /// surrounding text.
    pub fn measure(&self, paint: &FontMetrics, line: Option<&mut FontMetrics>) -> f32 {
        if let Some(line) = line {
            match self.align {
                ImageAlign::Center => {
                    let center_y = paint.ascent + paint.height() / 2.0;
                    line.ascent = center_y - self.height / 2.0;
                    line.top = line.ascent;
                    line.bottom = center_y + self.height / 2.0;
                    line.descent = line.bottom;
                }
                ImageAlign::Bottom | ImageAlign::Baseline => {
                    line.ascent = -self.height;
                    line.descent = 0.0;
                    line.top = line.ascent;
                    line.bottom = 0.0;
                }
            }
        }
        self.width
    }

    /// Returns the y translation at which the image's top edge should be drawn.
    ///
    /// `baseline` and `line_bottom` are absolute y positions of the line being painted.
    pub fn draw_offset(&self, baseline: f32, line_bottom: f32, paint: &FontMetrics) -> f32 {
        match self.align {
            ImageAlign::Bottom => line_bottom - self.height,
            ImageAlign::Baseline => line_bottom - self.height - paint.descent,
            ImageAlign::Center => {
                let center_y = baseline + paint.descent - paint.height() / 2.0;
                center_y - self.height / 2.0
            }
        }
    }
}

/// Turns an [`ImageSource`] into drawable data.
///
/// Implemented by the renderer; the returned blob stays owned by the resolver's side.
pub trait ImageResolver {
    /// Resolves `source`, or returns `None` if it cannot be loaded.
    fn resolve(&mut self, source: &ImageSource) -> Option<Blob<u8>>;
}

impl<F> ImageResolver for F
where
    F: FnMut(&ImageSource) -> Option<Blob<u8>>,
{
    fn resolve(&mut self, source: &ImageSource) -> Option<Blob<u8>> {
        self(source)
    }
}

/// Per-range cache of resolved image data for one [`SpannedText`].
///
/// Entries are keyed by range index and hold weak references: the cache never keeps image
/// data alive, and a dead entry is resolved again on next use. The cache borrows the text it
/// serves, so it cannot be carried over to a different result.
pub struct ImageCache<'a> {
    text: &'a SpannedText,
    entries: HashMap<usize, WeakBlob<u8>>,
}

impl<'a> ImageCache<'a> {
    /// Creates an empty cache for `text`.
    pub fn new(text: &'a SpannedText) -> Self {
        Self {
            text,
            entries: HashMap::new(),
        }
    }

    /// Returns the data for the image range at `index`, resolving it if needed.
    ///
    /// Returns `None` if `index` is not an image range or the resolver fails.
    pub fn get(&mut self, index: usize, resolver: &mut impl ImageResolver) -> Option<Blob<u8>> {
        let Attribute::Image(image) = self.text.ranges().get(index)?.attribute() else {
            return None;
        };
        if let Some(blob) = self.entries.get(&index).and_then(WeakBlob::upgrade) {
            return Some(blob);
        }
        let blob = resolver.resolve(&image.source)?;
        self.entries.insert(index, blob.downgrade());
        Some(blob)
    }

    /// Returns `true` if a live entry exists for `index`.
    pub fn is_cached(&self, index: usize) -> bool {
        self.entries
            .get(&index)
            .is_some_and(|weak| weak.upgrade().is_some())
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Debug for ImageCache<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCache")
            .field("text_len", &self.text.len())
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
