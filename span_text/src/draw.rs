// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of overlapping attributes into per-run paint state.

use alloc::sync::Arc;
use core::ops::Range;

use peniko::Color;
use peniko::color::palette::css;

use crate::{
    Alignment, Attribute, AttributeSegments, FontHandle, MaskFilter, SpannedText, TypefaceStyle,
};

/// Baseline placement of a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalPosition {
    /// On the line's baseline.
    #[default]
    Baseline,
    /// Lowered below the baseline.
    Subscript,
    /// Raised above the baseline.
    Superscript,
}

/// The paint state of a run of text.
///
/// A renderer supplies a base state (its default color, size and link color) and every
/// attribute active over a run updates it in turn.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawState {
    /// Text color.
    pub color: Color,
    /// Color used for links and clickable text, if the renderer has one.
    pub link_color: Option<Color>,
    /// Fill behind the text.
    pub background: Option<Color>,
    /// Draw an underline.
    pub underline: bool,
    /// Draw a strikethrough.
    pub strikethrough: bool,
    /// Baseline placement.
    pub position: VerticalPosition,
    /// Text size in pixels.
    pub text_size: f32,
    /// Bold/italic style.
    pub style: TypefaceStyle,
    /// Named font family.
    pub family: Option<Arc<str>>,
    /// Specific font, taking precedence over `family`.
    pub font: Option<FontHandle>,
    /// Mask applied to glyph coverage.
    pub mask: Option<MaskFilter>,
    /// Link target.
    pub link: Option<Arc<str>>,
    /// The run has a click handler.
    pub clickable: bool,
    /// Paragraph alignment.
    pub alignment: Alignment,
}

impl DrawState {
    /// Creates a plain state with the given color and size.
    pub fn new(color: Color, text_size: f32) -> Self {
        Self {
            color,
            link_color: None,
            background: None,
            underline: false,
            strikethrough: false,
            position: VerticalPosition::Baseline,
            text_size,
            style: TypefaceStyle::Normal,
            family: None,
            font: None,
            mask: None,
            link: None,
            clickable: false,
            alignment: Alignment::Start,
        }
    }

    /// Returns this state with a link color.
    #[must_use]
    pub fn with_link_color(mut self, link_color: Color) -> Self {
        self.link_color = Some(link_color);
        self
    }

    fn apply_link_color(&mut self) {
        if let Some(link_color) = self.link_color {
            self.color = link_color;
        }
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::new(css::BLACK, 16.0)
    }
}

impl Attribute {
    /// Applies this attribute to `state`.
    ///
    /// Most attributes overwrite the field they control. Sizes compose: a relative size
    /// scales whatever size is current. Styles combine, so bold over italic is bold italic.
    /// Image attributes leave the state alone; the image replaces the glyph.
    pub fn update_draw_state(&self, state: &mut DrawState) {
        match self {
            Self::ForegroundColor(color) => state.color = *color,
            Self::BackgroundColor(color) => state.background = Some(*color),
            Self::Underline => state.underline = true,
            Self::Strikethrough => state.strikethrough = true,
            Self::Subscript => state.position = VerticalPosition::Subscript,
            Self::Superscript => state.position = VerticalPosition::Superscript,
            Self::AbsoluteSize(size) => state.text_size = *size,
            Self::RelativeSize(scale) => state.text_size *= *scale,
            Self::Style(style) => state.style = combine_styles(state.style, *style),
            Self::FontFamily(family) => state.family = Some(family.clone()),
            Self::Font(font) => state.font = Some(font.clone()),
            Self::Mask(mask) => state.mask = Some(*mask),
            Self::Hyperlink(url) => {
                state.link = Some(url.clone());
                state.apply_link_color();
                state.underline = true;
            }
            Self::Alignment(alignment) => state.alignment = *alignment,
            Self::Click(_) => {
                state.clickable = true;
                state.apply_link_color();
                state.underline = false;
            }
            Self::Image(_) => {}
        }
    }
}

fn combine_styles(current: TypefaceStyle, applied: TypefaceStyle) -> TypefaceStyle {
    match (
        current.is_bold() || applied.is_bold(),
        current.is_italic() || applied.is_italic(),
    ) {
        (false, false) => TypefaceStyle::Normal,
        (true, false) => TypefaceStyle::Bold,
        (false, true) => TypefaceStyle::Italic,
        (true, true) => TypefaceStyle::BoldItalic,
    }
}

/// A resolved run of text with uniform paint state.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRun {
    /// The byte range in the text.
    pub range: Range<usize>,
    /// The paint state for this range.
    pub state: DrawState,
}

/// An iterator over resolved draw runs, one per attribute segment.
#[derive(Debug)]
pub struct DrawRuns<'a> {
    segments: AttributeSegments<'static, 'a>,
    base: DrawState,
}

impl<'a> DrawRuns<'a> {
    pub(crate) fn new(text: &'a SpannedText, base: DrawState) -> Self {
        Self {
            segments: AttributeSegments::new(text),
            base,
        }
    }

    /// Merges adjacent runs with equal state.
    pub fn coalesced(self) -> CoalescedDrawRuns<'a> {
        CoalescedDrawRuns {
            inner: self,
            pending: None,
        }
    }
}

impl Iterator for DrawRuns<'_> {
    type Item = DrawRun;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.segments.next()?;
        let mut state = self.base.clone();
        for span in &self.segments.active_spans() {
            span.attribute().update_draw_state(&mut state);
        }
        Some(DrawRun { range, state })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }
}

/// An iterator over coalesced draw runs.
#[derive(Debug)]
pub struct CoalescedDrawRuns<'a> {
    inner: DrawRuns<'a>,
    pending: Option<DrawRun>,
}

impl Iterator for CoalescedDrawRuns<'_> {
    type Item = DrawRun;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.state == run.state {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }

        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawState, VerticalPosition};
    use crate::{Attribute, ClickHandler, TypefaceStyle};
    use alloc::sync::Arc;
    use peniko::color::palette::css;

    #[test]
    fn sizes_compose() {
        let mut state = DrawState::new(css::BLACK, 10.0);
        Attribute::RelativeSize(2.0).update_draw_state(&mut state);
        assert_eq!(state.text_size, 20.0);
        Attribute::AbsoluteSize(12.0).update_draw_state(&mut state);
        Attribute::RelativeSize(0.5).update_draw_state(&mut state);
        assert_eq!(state.text_size, 6.0);
    }

    #[test]
    fn later_color_wins() {
        let mut state = DrawState::default();
        Attribute::ForegroundColor(css::RED).update_draw_state(&mut state);
        Attribute::ForegroundColor(css::BLUE).update_draw_state(&mut state);
        assert_eq!(state.color, css::BLUE);
    }

    #[test]
    fn styles_combine() {
        let mut state = DrawState::default();
        Attribute::Style(TypefaceStyle::Bold).update_draw_state(&mut state);
        Attribute::Style(TypefaceStyle::Italic).update_draw_state(&mut state);
        assert_eq!(state.style, TypefaceStyle::BoldItalic);
    }

    #[test]
    fn hyperlink_underlines_in_link_color() {
        let mut state = DrawState::default().with_link_color(css::BLUE);
        Attribute::Hyperlink(Arc::from("https://example.com")).update_draw_state(&mut state);
        assert!(state.underline);
        assert_eq!(state.color, css::BLUE);
        assert_eq!(state.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn click_clears_underline() {
        let mut state = DrawState::default().with_link_color(css::GREEN);
        Attribute::Underline.update_draw_state(&mut state);
        Attribute::Click(ClickHandler::new(|_| {})).update_draw_state(&mut state);
        assert!(!state.underline);
        assert!(state.clickable);
        assert_eq!(state.color, css::GREEN);
    }

    #[test]
    fn click_without_link_color_keeps_color() {
        let mut state = DrawState::default();
        Attribute::ForegroundColor(css::RED).update_draw_state(&mut state);
        Attribute::Click(ClickHandler::new(|_| {})).update_draw_state(&mut state);
        assert_eq!(state.color, css::RED);
    }

    #[test]
    fn last_vertical_position_wins() {
        let mut state = DrawState::default();
        Attribute::Subscript.update_draw_state(&mut state);
        Attribute::Superscript.update_draw_state(&mut state);
        assert_eq!(state.position, VerticalPosition::Superscript);
    }
}
