// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed vocabulary of attributes a range can carry.

use alloc::sync::Arc;
use core::fmt;

use linebender_resource_handle::FontData;
use peniko::Color;

use crate::{ClickHandler, InlineImage};

/// A style or behavior attached to a range of text.
///
/// Any number of attributes may cover the same bytes; each is kept as its own range.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// Text color.
    ForegroundColor(Color),
    /// Fill behind the text.
    BackgroundColor(Color),
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Lowered, subscript baseline.
    Subscript,
    /// Raised, superscript baseline.
    Superscript,
    /// Text size in pixels.
    AbsoluteSize(f32),
    /// Text size as a multiple of the surrounding size.
    RelativeSize(f32),
    /// Bold/italic style.
    Style(TypefaceStyle),
    /// A font family by name, such as `"monospace"` or `"serif"`.
    FontFamily(Arc<str>),
    /// A specific loaded font.
    Font(FontHandle),
    /// A blur or emboss mask.
    Mask(MaskFilter),
    /// A link target.
    Hyperlink(Arc<str>),
    /// Paragraph alignment.
    Alignment(Alignment),
    /// A click callback.
    Click(ClickHandler),
    /// An image drawn in place of its placeholder character.
    Image(InlineImage),
}

impl From<TypefaceStyle> for Attribute {
    fn from(style: TypefaceStyle) -> Self {
        Self::Style(style)
    }
}

impl From<MaskFilter> for Attribute {
    fn from(mask: MaskFilter) -> Self {
        Self::Mask(mask)
    }
}

impl From<Alignment> for Attribute {
    fn from(alignment: Alignment) -> Self {
        Self::Alignment(alignment)
    }
}

impl From<InlineImage> for Attribute {
    fn from(image: InlineImage) -> Self {
        Self::Image(image)
    }
}

/// Weight and slant of a typeface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypefaceStyle {
    /// Regular weight, upright.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Bold weight with italic slant.
    BoldItalic,
}

impl TypefaceStyle {
    /// Returns `true` for bold styles.
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns `true` for italic styles.
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// How a blur mask treats the glyph interior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    /// Blur inside and outside the glyph.
    #[default]
    Normal,
    /// Solid inside, blurred outside.
    Solid,
    /// Nothing inside, blurred outside.
    Outer,
    /// Blurred inside, nothing outside.
    Inner,
}

/// A mask applied to glyph coverage before painting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaskFilter {
    /// Gaussian blur.
    Blur {
        /// Blur radius in pixels.
        radius: f32,
        /// Interior handling.
        style: BlurStyle,
    },
    /// Embossed lighting.
    Emboss {
        /// Direction towards the light source.
        direction: [f32; 3],
        /// Ambient light level, `0.0..=1.0`.
        ambient: f32,
        /// Specular coefficient.
        specular: f32,
        /// Blur radius applied before lighting.
        blur_radius: f32,
    },
}

impl MaskFilter {
    /// Shorthand for a blur mask.
    pub const fn blur(radius: f32, style: BlurStyle) -> Self {
        Self::Blur { radius, style }
    }
}

/// Paragraph alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the start edge for the text direction.
    #[default]
    Start,
    /// Center each line.
    Center,
    /// Align to the end edge for the text direction.
    End,
}

/// Opaque handle to font data supplied by the application.
///
/// Two handles are equal when they refer to the same blob and face index.
#[derive(Clone)]
pub struct FontHandle(FontData);

impl FontHandle {
    /// Wraps loaded font data.
    pub fn new(font: FontData) -> Self {
        Self(font)
    }

    /// Borrows the underlying font data.
    pub fn font_data(&self) -> &FontData {
        &self.0
    }
}

impl From<FontData> for FontHandle {
    fn from(font: FontData) -> Self {
        Self(font)
    }
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.data.id() == other.0.data.id() && self.0.index == other.0.index
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("blob", &self.0.data.id())
            .field("index", &self.0.index)
            .finish()
    }
}
