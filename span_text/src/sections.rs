// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-attribute shorthands on [`SpanBuilder`].
//!
//! Each attribute kind gets the same six entry points: append a styled section, style a
//! target, style the whole text, style an explicit range, and insert a styled section after a
//! target or at an offset. They all forward to the generic methods on [`SpanBuilder`].
//!
//! The color shorthands match targets regardless of case unless the [`Target`] sets its own
//! case sensitivity. All other kinds match case-sensitively.

use alloc::sync::Arc;
use core::ops::Range;

use peniko::Color;

use crate::{Attribute, Error, FontHandle, MaskFilter, SpanBuilder, Target, TypefaceStyle};

macro_rules! section_methods {
    ($(
        $what:literal {
            add: $add:ident,
            set: $set:ident,
            set_all: $set_all:ident,
            set_in: $set_in:ident,
            insert: $insert:ident,
            insert_at: $insert_at:ident,
            case_sensitive: $case_sensitive:literal,
            ($($arg:ident: $ty:ty),*) => $attribute:expr
        }
    )*) => {
        impl SpanBuilder {
            $(
                #[doc = concat!("Appends `text` with ", $what, ".")]
                pub fn $add(&mut self, text: &str $(, $arg: $ty)*) -> Result<&mut Self, Error> {
                    self.add_styled_section(text, $attribute)
                }

                #[doc = concat!("Applies ", $what, " to the occurrences of `target`.")]
                pub fn $set<'t>(
                    &mut self,
                    target: impl Into<Target<'t>>
                    $(, $arg: $ty)*
                ) -> Result<&mut Self, Error> {
                    let target: Target<'t> = target.into();
                    self.set_attribute($attribute, target.or_case_sensitive($case_sensitive))
                }

                #[doc = concat!("Applies ", $what, " to the whole current text.")]
                pub fn $set_all(&mut self $(, $arg: $ty)*) -> Result<&mut Self, Error> {
                    self.set_attribute_all($attribute)
                }

                #[doc = concat!("Applies ", $what, " to an explicit byte range.")]
                pub fn $set_in(
                    &mut self,
                    range: Range<usize>
                    $(, $arg: $ty)*
                ) -> Result<&mut Self, Error> {
                    self.set_attribute_in($attribute, range)
                }

                #[doc = concat!("Inserts `text` with ", $what, " after the occurrences of `target`.")]
                pub fn $insert<'t>(
                    &mut self,
                    text: &str,
                    target: impl Into<Target<'t>>
                    $(, $arg: $ty)*
                ) -> Result<&mut Self, Error> {
                    let target: Target<'t> = target.into();
                    self.insert_styled_section(
                        text,
                        $attribute,
                        target.or_case_sensitive($case_sensitive),
                    )
                }

                #[doc = concat!("Inserts `text` with ", $what, " at byte `offset`.")]
                pub fn $insert_at(
                    &mut self,
                    text: &str,
                    offset: usize
                    $(, $arg: $ty)*
                ) -> Result<&mut Self, Error> {
                    self.insert_styled_section_at(text, $attribute, offset)
                }
            )*
        }
    };
}

section_methods! {
    "a text color" {
        add: add_fore_color_section,
        set: set_fore_color_section,
        set_all: set_fore_color,
        set_in: set_fore_color_in,
        insert: insert_fore_color_section,
        insert_at: insert_fore_color_section_at,
        case_sensitive: false,
        (color: Color) => Attribute::ForegroundColor(color)
    }
    "a background color" {
        add: add_back_color_section,
        set: set_back_color_section,
        set_all: set_back_color,
        set_in: set_back_color_in,
        insert: insert_back_color_section,
        insert_at: insert_back_color_section_at,
        case_sensitive: false,
        (color: Color) => Attribute::BackgroundColor(color)
    }
    "subscript" {
        add: add_subscript_section,
        set: set_subscript_section,
        set_all: set_subscript,
        set_in: set_subscript_in,
        insert: insert_subscript_section,
        insert_at: insert_subscript_section_at,
        case_sensitive: true,
        () => Attribute::Subscript
    }
    "superscript" {
        add: add_superscript_section,
        set: set_superscript_section,
        set_all: set_superscript,
        set_in: set_superscript_in,
        insert: insert_superscript_section,
        insert_at: insert_superscript_section_at,
        case_sensitive: true,
        () => Attribute::Superscript
    }
    "an underline" {
        add: add_underline_section,
        set: set_underline_section,
        set_all: set_underline,
        set_in: set_underline_in,
        insert: insert_underline_section,
        insert_at: insert_underline_section_at,
        case_sensitive: true,
        () => Attribute::Underline
    }
    "a strikethrough" {
        add: add_strikethrough_section,
        set: set_strikethrough_section,
        set_all: set_strikethrough,
        set_in: set_strikethrough_in,
        insert: insert_strikethrough_section,
        insert_at: insert_strikethrough_section_at,
        case_sensitive: true,
        () => Attribute::Strikethrough
    }
    "an absolute text size in pixels" {
        add: add_absolute_size_section,
        set: set_absolute_size_section,
        set_all: set_absolute_size,
        set_in: set_absolute_size_in,
        insert: insert_absolute_size_section,
        insert_at: insert_absolute_size_section_at,
        case_sensitive: true,
        (size: f32) => Attribute::AbsoluteSize(size)
    }
    "a text size relative to the surrounding size" {
        add: add_relative_size_section,
        set: set_relative_size_section,
        set_all: set_relative_size,
        set_in: set_relative_size_in,
        insert: insert_relative_size_section,
        insert_at: insert_relative_size_section_at,
        case_sensitive: true,
        (scale: f32) => Attribute::RelativeSize(scale)
    }
    "a hyperlink" {
        add: add_url_section,
        set: set_url_section,
        set_all: set_url,
        set_in: set_url_in,
        insert: insert_url_section,
        insert_at: insert_url_section_at,
        case_sensitive: true,
        (url: &str) => Attribute::Hyperlink(Arc::from(url))
    }
    "a bold or italic style" {
        add: add_style_section,
        set: set_style_section,
        set_all: set_style,
        set_in: set_style_in,
        insert: insert_style_section,
        insert_at: insert_style_section_at,
        case_sensitive: true,
        (style: TypefaceStyle) => Attribute::Style(style)
    }
    "a named font family" {
        add: add_font_family_section,
        set: set_font_family_section,
        set_all: set_font_family,
        set_in: set_font_family_in,
        insert: insert_font_family_section,
        insert_at: insert_font_family_section_at,
        case_sensitive: true,
        (family: &str) => Attribute::FontFamily(Arc::from(family))
    }
    "a specific font" {
        add: add_font_section,
        set: set_font_section,
        set_all: set_font,
        set_in: set_font_in,
        insert: insert_font_section,
        insert_at: insert_font_section_at,
        case_sensitive: true,
        (font: FontHandle) => Attribute::Font(font)
    }
    "a blur or emboss mask" {
        add: add_mask_section,
        set: set_mask_section,
        set_all: set_mask,
        set_in: set_mask_in,
        insert: insert_mask_section,
        insert_at: insert_mask_section_at,
        case_sensitive: true,
        (mask: MaskFilter) => Attribute::Mask(mask)
    }
}
