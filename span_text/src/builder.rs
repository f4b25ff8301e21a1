// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use core::ops::Range;

use log::{debug, trace};

use crate::attribute_range::validate_range;
use crate::{
    Alignment, Attribute, AttributeRange, BuilderConfig, ClickHandler, Endpoint, Error,
    Inclusivity, InlineImage, SpannedText, Target,
};

/// Builds a [`SpannedText`] one call at a time.
///
/// Every call mutates the builder immediately and returns `Ok(&mut Self)`, so calls chain with
/// `?`. Targets that do not occur, empty sections and insert offsets at or past the end of the
/// text are silently skipped. Once [`finalize`](Self::finalize) has run, every call returns an
/// [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState) error.
///
/// ## Offsets
///
/// Offsets are byte indices into the UTF-8 text. Ranges always refer to the text as it was
/// when they were created: inserting text does not move ranges that already exist. Issue
/// insertions left to right if earlier ranges must stay attached to the same characters.
///
/// ## Example
///
/// ```
/// use peniko::color::palette::css;
/// use span_text::{SpanBuilder, Target};
///
/// # fn main() -> Result<(), span_text::Error> {
/// let mut builder = SpanBuilder::new();
/// builder
///     .add_section("I agree to the ")?
///     .add_fore_color_section("Terms of Service", css::BLUE)?
///     .set_underline_section(Target::new("terms").ignore_case())?;
/// let text = builder.finalize()?;
///
/// assert_eq!(text.as_str(), "I agree to the Terms of Service");
/// assert_eq!(text.ranges().len(), 2);
/// assert_eq!(text.ranges()[1].range(), 15..20);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SpanBuilder {
    text: String,
    ranges: Vec<AttributeRange>,
    config: BuilderConfig,
    finalized: bool,
}

impl SpanBuilder {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Returns `true` once [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> Result<&str, Error> {
        self.check()?;
        Ok(&self.text)
    }

    /// The length of the accumulated text in bytes.
    pub fn len(&self) -> Result<usize, Error> {
        self.check()?;
        Ok(self.text.len())
    }

    /// Returns `true` if no text has been added yet.
    pub fn is_empty(&self) -> Result<bool, Error> {
        self.check()?;
        Ok(self.text.is_empty())
    }

    /// The ranges created so far, in creation order.
    pub fn ranges(&self) -> Result<&[AttributeRange], Error> {
        self.check()?;
        Ok(&self.ranges)
    }

    /// Appends plain text.
    pub fn add_section(&mut self, text: &str) -> Result<&mut Self, Error> {
        self.check()?;
        self.text.push_str(text);
        Ok(self)
    }

    /// Appends `text` and applies `attribute` to exactly the appended bytes.
    ///
    /// Empty `text` is a no-op.
    pub fn add_styled_section(
        &mut self,
        text: &str,
        attribute: Attribute,
    ) -> Result<&mut Self, Error> {
        let inclusivity = self.config.inclusivity;
        self.add_styled_section_with(text, attribute, inclusivity)
    }

    /// Like [`add_styled_section`](Self::add_styled_section), recording `inclusivity` on the
    /// new range.
    pub fn add_styled_section_with(
        &mut self,
        text: &str,
        attribute: Attribute,
        inclusivity: Inclusivity,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        if let Some(range) = self.append(text) {
            self.push_range(range, attribute, inclusivity);
        }
        Ok(self)
    }

    /// Appends `text` with a visual `attribute` and a separate click range over the same bytes.
    ///
    /// Keeping the two ranges apart lets the style and the interaction be removed
    /// independently. A click range never adds an underline of its own.
    pub fn add_clickable_section(
        &mut self,
        text: &str,
        attribute: Attribute,
        handler: ClickHandler,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        if let Some(range) = self.append(text) {
            let inclusivity = self.config.inclusivity;
            self.push_range(range.clone(), attribute, inclusivity);
            self.push_range(range, Attribute::Click(handler), Inclusivity::ExclusiveExclusive);
        }
        Ok(self)
    }

    /// Applies `attribute` over the occurrences of `target` in the current text.
    ///
    /// The text is not changed. A target that does not occur is a no-op.
    pub fn set_attribute<'t>(
        &mut self,
        attribute: Attribute,
        target: impl Into<Target<'t>>,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        let target = target.into();
        let matches = target.locate_in(&self.text);
        if matches.is_empty() {
            debug!("set: target {:?} not found", target.text());
        }
        for range in matches {
            self.push_range(range, attribute.clone(), self.config.inclusivity);
        }
        Ok(self)
    }

    /// Applies `attribute` over the whole current text.
    ///
    /// On empty text this records an inert zero-width range.
    pub fn set_attribute_all(&mut self, attribute: Attribute) -> Result<&mut Self, Error> {
        self.check()?;
        self.push_range(0..self.text.len(), attribute, self.config.inclusivity);
        Ok(self)
    }

    /// Applies `attribute` over an explicit byte `range`.
    ///
    /// Returns an error if `range` is reversed, out of bounds, or splits a character.
    pub fn set_attribute_in(
        &mut self,
        attribute: Attribute,
        range: Range<usize>,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        validate_range(&self.text, &range)?;
        self.push_range(range, attribute, self.config.inclusivity);
        Ok(self)
    }

    /// Applies a paragraph alignment over the whole current text.
    pub fn set_alignment(&mut self, alignment: Alignment) -> Result<&mut Self, Error> {
        self.set_attribute_all(Attribute::Alignment(alignment))
    }

    /// Inserts `text` right after each occurrence of `target` and styles the inserted bytes.
    ///
    /// Occurrences are located before anything is inserted. With [`MatchPolicy::All`] the
    /// later insertions therefore use offsets from before the earlier ones; an offset that has
    /// drifted onto the middle of a character is skipped.
    ///
    /// Nothing is inserted after an occurrence that ends the text.
    ///
    /// [`MatchPolicy::All`]: crate::MatchPolicy::All
    pub fn insert_styled_section<'t>(
        &mut self,
        text: &str,
        attribute: Attribute,
        target: impl Into<Target<'t>>,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        if text.is_empty() {
            debug!("insert: empty section");
            return Ok(self);
        }
        let target = target.into();
        let matches = target.locate_in(&self.text);
        if matches.is_empty() {
            debug!("insert: target {:?} not found", target.text());
        }
        for found in matches {
            let offset = found.end;
            if offset >= self.text.len() {
                debug!("insert: offset {offset} is not before the end of the text");
                continue;
            }
            if !self.text.is_char_boundary(offset) {
                debug!("insert: stale offset {offset} splits a character");
                continue;
            }
            self.insert(offset, text, attribute.clone());
        }
        Ok(self)
    }

    /// Inserts `text` at byte `offset` and styles the inserted bytes.
    ///
    /// An `offset` at or past the end of the text is a no-op; append with
    /// [`add_styled_section`](Self::add_styled_section) instead. Returns an error if `offset`
    /// splits a character.
    pub fn insert_styled_section_at(
        &mut self,
        text: &str,
        attribute: Attribute,
        offset: usize,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        if text.is_empty() {
            debug!("insert: empty section");
            return Ok(self);
        }
        if offset >= self.text.len() {
            debug!(
                "insert: offset {offset} is not before the end of the text (len {})",
                self.text.len()
            );
            return Ok(self);
        }
        self.check_boundary(offset)?;
        self.insert(offset, text, attribute);
        Ok(self)
    }

    /// Appends an image placeholder.
    pub fn add_image(&mut self, image: InlineImage) -> Result<&mut Self, Error> {
        self.check()?;
        let offset = self.text.len();
        self.insert_placeholder(offset, image);
        Ok(self)
    }

    /// Inserts an image placeholder right after each occurrence of `target`.
    ///
    /// Unlike text insertion, an occurrence that ends the text gets its image appended.
    pub fn insert_image<'t>(
        &mut self,
        image: InlineImage,
        target: impl Into<Target<'t>>,
    ) -> Result<&mut Self, Error> {
        self.check()?;
        let target = target.into();
        let matches = target.locate_in(&self.text);
        if matches.is_empty() {
            debug!("image: target {:?} not found", target.text());
        }
        for found in matches {
            let offset = found.end;
            if offset > self.text.len() || !self.text.is_char_boundary(offset) {
                debug!("image: stale offset {offset}");
                continue;
            }
            self.insert_placeholder(offset, image.clone());
        }
        Ok(self)
    }

    /// Inserts an image placeholder at byte `offset`.
    ///
    /// `offset` may equal the text length. Past the end it is a no-op. Returns an error if
    /// `offset` splits a character.
    pub fn insert_image_at(&mut self, image: InlineImage, offset: usize) -> Result<&mut Self, Error> {
        self.check()?;
        if offset > self.text.len() {
            debug!(
                "image: offset {offset} past the end of the text (len {})",
                self.text.len()
            );
            return Ok(self);
        }
        self.check_boundary(offset)?;
        self.insert_placeholder(offset, image);
        Ok(self)
    }

    /// Removes every range overlapping the occurrences of `target`. The text is untouched.
    pub fn remove_spans<'t>(&mut self, target: impl Into<Target<'t>>) -> Result<&mut Self, Error> {
        self.check()?;
        let target = target.into();
        for range in target.locate_in(&self.text) {
            self.remove_overlapping(&range);
        }
        Ok(self)
    }

    /// Removes every range overlapping an explicit byte `range`. The text is untouched.
    pub fn remove_spans_in(&mut self, range: Range<usize>) -> Result<&mut Self, Error> {
        self.check()?;
        validate_range(&self.text, &range)?;
        self.remove_overlapping(&range);
        Ok(self)
    }

    /// Removes every range overlapping the first occurrence of `section` at or after byte
    /// `from`.
    ///
    /// A `from` inside a character starts the search at the next character.
    pub fn remove_spans_from(&mut self, section: &str, from: usize) -> Result<&mut Self, Error> {
        self.check()?;
        if section.is_empty() {
            return Ok(self);
        }
        let Some(start) = (from..=self.text.len())
            .find(|&ix| self.text.is_char_boundary(ix))
            .and_then(|from| self.text[from..].find(section).map(|ix| from + ix))
        else {
            debug!("remove: {section:?} not found from {from}");
            return Ok(self);
        };
        self.remove_overlapping(&(start..start + section.len()));
        Ok(self)
    }

    /// Removes all ranges. The text is untouched.
    pub fn clear_spans(&mut self) -> Result<&mut Self, Error> {
        self.check()?;
        self.ranges.clear();
        Ok(self)
    }

    /// Produces the finished text and invalidates the builder.
    ///
    /// The builder's buffers move into the result. Any later call on this builder, including
    /// another `finalize`, returns an [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState)
    /// error.
    pub fn finalize(&mut self) -> Result<SpannedText, Error> {
        self.check()?;
        self.finalized = true;
        let text = mem::take(&mut self.text);
        let ranges = mem::take(&mut self.ranges);
        debug!("finalized {} bytes with {} ranges", text.len(), ranges.len());
        Ok(SpannedText::new(text, ranges))
    }

    fn check(&self) -> Result<(), Error> {
        if self.finalized {
            Err(Error::finalized())
        } else {
            Ok(())
        }
    }

    fn check_boundary(&self, offset: usize) -> Result<(), Error> {
        if self.text.is_char_boundary(offset) {
            Ok(())
        } else {
            Err(Error::not_on_char_boundary(
                &self.text,
                offset..offset,
                Endpoint::Start,
                offset,
            ))
        }
    }

    /// Appends `text`, returning the range it now occupies, or `None` if it was empty.
    fn append(&mut self, text: &str) -> Option<Range<usize>> {
        if text.is_empty() {
            debug!("add: empty section");
            return None;
        }
        let start = self.text.len();
        self.text.push_str(text);
        Some(start..self.text.len())
    }

    fn insert(&mut self, offset: usize, text: &str, attribute: Attribute) {
        self.text.insert_str(offset, text);
        self.push_range(
            offset..offset + text.len(),
            attribute,
            self.config.inclusivity,
        );
    }

    fn insert_placeholder(&mut self, offset: usize, image: InlineImage) {
        let placeholder = self.config.image_placeholder;
        self.text.insert(offset, placeholder);
        self.push_range(
            offset..offset + placeholder.len_utf8(),
            Attribute::Image(image),
            Inclusivity::ExclusiveExclusive,
        );
    }

    fn push_range(&mut self, range: Range<usize>, attribute: Attribute, inclusivity: Inclusivity) {
        trace!("range {range:?}: {attribute:?}");
        self.ranges
            .push(AttributeRange::new(range, attribute, inclusivity));
    }

    fn remove_overlapping(&mut self, range: &Range<usize>) {
        let before = self.ranges.len();
        self.ranges.retain(|r| !r.overlaps(range));
        trace!(
            "removed {} ranges over {range:?}",
            before - self.ranges.len()
        );
    }
}
