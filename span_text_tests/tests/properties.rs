// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;
use span_text::{ErrorKind, SpanBuilder, SpannedText, Target};

use crate::util::assert_ranges_in_bounds;
use crate::util::samples::{apple, build, consent, decorated, inserted};

fn samples() -> Vec<(&'static str, SpannedText)> {
    vec![
        ("decorated", decorated()),
        ("inserted", inserted()),
        ("consent", consent().0),
    ]
}

#[test]
fn properties_ranges_within_text() {
    for (case, text) in samples() {
        assert_ranges_in_bounds(&text, case);
    }
}

#[test]
fn properties_length_is_sum_of_sections() {
    let pieces = ["我同意", "terms", "", "、 ", "政策"];
    let mut builder = SpanBuilder::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i % 2 == 0 {
            builder.add_section(piece).unwrap();
        } else {
            builder.add_underline_section(piece).unwrap();
        }
    }
    builder.add_image(apple()).unwrap();
    let text = builder.finalize().unwrap();
    let expected: usize = pieces.iter().map(|p| p.len()).sum::<usize>() + 1;
    assert_eq!(text.len(), expected);
}

#[test]
fn properties_removal_keeps_text() {
    for (case, text) in samples() {
        let (string, ranges) = text.into_parts();
        let mut builder = SpanBuilder::new();
        builder.add_section(&string).unwrap();
        for range in &ranges {
            builder
                .set_attribute_in(range.attribute().clone(), range.range())
                .unwrap();
        }
        builder
            .remove_spans(Target::new("我").all())
            .unwrap()
            .clear_spans()
            .unwrap();
        assert_eq!(builder.as_str().unwrap(), string, "text changed with {case}");
        assert!(builder.ranges().unwrap().is_empty());
    }
}

#[test]
fn properties_clear_twice_is_clear_once() {
    let mut once = SpanBuilder::new();
    once.add_underline_section("abc").unwrap().clear_spans().unwrap();
    let mut twice = SpanBuilder::new();
    twice
        .add_underline_section("abc")
        .unwrap()
        .clear_spans()
        .unwrap()
        .clear_spans()
        .unwrap();
    assert_eq!(once.finalize().unwrap(), twice.finalize().unwrap());
}

#[test]
fn properties_case_insensitive_last() {
    let text = build(|b| {
        b.add_section("AbcABC")?
            .set_underline_section(Target::new("abc").ignore_case())
    });
    assert_eq!(text.ranges()[0].range(), 3..6);
}

#[test]
fn properties_all_matches_do_not_overlap() {
    let text = build(|b| {
        b.add_section("aaa")?
            .set_underline_section(Target::new("aa").all())
    });
    let ranges: Vec<_> = text.ranges().iter().map(|r| r.range()).collect();
    assert_eq!(ranges, [0..2]);
}

#[test]
fn properties_insert_after_match() {
    let text = build(|b| {
        b.add_section("hello world")?
            .insert_fore_color_section("!", "hello", css::RED)
    });
    assert_eq!(text.as_str(), "hello! world");
    assert_eq!(text.ranges()[0].range(), 5..6);
}

#[test]
fn properties_empty_section_chains() {
    let text = build(|b| {
        b.add_section("a")?
            .add_fore_color_section("", css::RED)?
            .add_section("b")
    });
    assert_eq!(text.as_str(), "ab");
    assert!(text.ranges().is_empty());
}

#[test]
fn properties_finalized_builder_rejects_calls() {
    let mut builder = SpanBuilder::new();
    builder.add_underline_section("kept").unwrap();
    let text = builder.finalize().unwrap();

    let results = [
        builder.add_section("x").map(|_| ()),
        builder.set_underline().map(|_| ()),
        builder.set_underline_section("kept").map(|_| ()),
        builder.insert_underline_section_at("x", 0).map(|_| ()),
        builder.add_image(apple()).map(|_| ()),
        builder.remove_spans_in(0..0).map(|_| ()),
        builder.clear_spans().map(|_| ()),
        builder.finalize().map(|_| ()),
        builder.len().map(|_| ()),
    ];
    for result in results {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidState);
    }

    assert_eq!(text.as_str(), "kept");
    assert_eq!(text.ranges().len(), 1);
}
