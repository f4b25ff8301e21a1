// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample texts shared by several test modules.

use std::cell::RefCell;
use std::rc::Rc;

use linebender_resource_handle::{Blob, FontData};
use peniko::color::palette::css;
use span_text::{
    Alignment, Attribute, BlurStyle, ClickHandler, Error, FontHandle, ImageSource, InlineImage,
    MaskFilter, SpanBuilder, SpannedText, TypefaceStyle,
};

/// A consent line with several quoted documents.
pub(crate) const CONSENT: &str = "我同意《中国移动认证服务条款》、 《用户服务协议》、 《用户隐私协议》、 《个人信息保护政策》、 《关注中央人民广播电视》并授权XXXXXXX使用您的本机号码，您的反馈是我们最大的帮助";

/// [`CONSENT`] with a formula after the first phrase.
pub(crate) const CONSENT_WITH_FORMULA: &str = "我同意logn(xy)《中国移动认证服务条款》、 《用户服务协议》、 《用户隐私协议》、 《个人信息保护政策》、 《关注中央人民广播电视》并授权XXXXXXX使用您的本机号码，您的反馈是我们最大的帮助";

pub(crate) const URL: &str = "https://example.com/terms";

/// The documents that get click handlers in [`consent`].
pub(crate) const DOCUMENTS: [&str; 4] = [
    "《中国移动认证服务条款》",
    "《用户服务协议》",
    "《用户隐私协议》",
    "《个人信息保护政策》",
];

/// Runs `f` on a fresh builder and finalizes it.
pub(crate) fn build(
    f: impl FnOnce(&mut SpanBuilder) -> Result<&mut SpanBuilder, Error>,
) -> SpannedText {
    let mut builder = SpanBuilder::new();
    f(&mut builder).expect("building should succeed");
    builder.finalize().expect("first finalize should succeed")
}

pub(crate) fn apple() -> InlineImage {
    InlineImage::centered(ImageSource::Resource(1), 24.0, 24.0)
}

pub(crate) fn test_font() -> FontHandle {
    FontHandle::new(FontData::new(Blob::from(vec![0_u8; 16]), 0))
}

/// Existing text decorated through substring targets.
pub(crate) fn decorated() -> SpannedText {
    build(|b| {
        b.add_section(CONSENT_WITH_FORMULA)?
            .set_subscript_section("logn")?
            .set_superscript_section("(xy)")?
            .set_underline_section("我同意")?
            .set_strikethrough_section("我同意")?
            .set_absolute_size_section("中国", 10.0)?
            .set_relative_size_section("移动", 2.0)?
            .set_style_section("条款", TypefaceStyle::BoldItalic)?
            .set_url_section("服", URL)?
            .set_font_section("隐私", test_font())?
            .set_mask_section("个人", MaskFilter::blur(10.0, BlurStyle::Solid))?
            .set_fore_color_section("隐私", css::RED)?
            .set_back_color_section("信息", css::GREEN)?
            .insert_image(apple(), "保护")?
            .set_alignment(Alignment::Center)
    })
}

/// Styled sections inserted into existing text, left to right.
pub(crate) fn inserted() -> SpannedText {
    build(|b| {
        b.add_section(CONSENT)?
            .insert_underline_section_at("下划线", 3)?
            .insert_subscript_section("logn", "中国")?
            .insert_superscript_section("(xy)", "移动")?
            .insert_strikethrough_section("删除线", "条款")?
            .insert_url_section("URL", "信息", URL)?
            .insert_back_color_section("后置背景", "广播", css::MAGENTA)
    })
}

/// A consent line assembled from clickable sections.
///
/// Returns the text and the log that click handlers append the clicked section to.
pub(crate) fn consent() -> (SpannedText, Rc<RefCell<Vec<String>>>) {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let handler = {
        let clicks = clicks.clone();
        ClickHandler::new(move |event| clicks.borrow_mut().push(event.section().to_owned()))
    };
    let colors = [css::BLUE, css::RED, css::YELLOW, css::GREEN];
    let text = build(|b| {
        b.add_section("我同意")?
            .add_fore_color_section("", css::RED)?;
        for (document, color) in DOCUMENTS.iter().zip(colors) {
            b.add_clickable_section(
                document,
                Attribute::ForegroundColor(color),
                handler.clone(),
            )?
            .add_section("、 ")?;
        }
        b.add_subscript_section("logn")?
            .add_superscript_section("(xy)")?
            .add_underline_section("并授权")?
            .add_image(apple())?
            .add_strikethrough_section("XXXXXXX")?
            .add_absolute_size_section("使用", 10.0)?
            .add_relative_size_section("您的", 2.0)?
            .add_url_section("本机", URL)?
            .add_style_section("号码", TypefaceStyle::BoldItalic)?
            .add_font_family_section("，您的", "serif")?
            .add_mask_section(
                "反馈是我们最大的帮助",
                MaskFilter::blur(10.0, BlurStyle::Solid),
            )?
            .add_image(apple())
    });
    (text, clicks)
}
