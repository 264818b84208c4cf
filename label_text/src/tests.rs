// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    compose, AttributeOverrides, Composer, Font, HighlightOverride, MatchMode, ResolvedAttributes,
    StyleSpec, StyledText, VerticalAlignment,
};
use alloc::vec::Vec;
use core::ops::Range;
use peniko::color::palette;

/// Reference implementation of run flattening.
///
/// Walks every character and asks [`StyledText::attributes_at`] which attributes win there,
/// merging neighbors with identical winners. `runs()` must agree with it.
fn reference_runs(text: &StyledText) -> Vec<(Range<usize>, Option<ResolvedAttributes>)> {
    let mut out: Vec<(Range<usize>, Option<ResolvedAttributes>)> = Vec::new();
    for (index, ch) in text.as_str().char_indices() {
        let attributes = text.attributes_at(index).cloned();
        let end = index + ch.len_utf8();
        match out.last_mut() {
            Some((range, last)) if *last == attributes => range.end = end,
            _ => out.push((index..end, attributes)),
        }
    }
    out
}

fn flattened(text: &StyledText) -> Vec<(Range<usize>, Option<ResolvedAttributes>)> {
    text.runs()
        .map(|run| (run.range, run.attributes.cloned()))
        .collect()
}

fn base() -> StyleSpec {
    StyleSpec::new()
        .font(Font::new("ObjectSans-Regular", 15.0))
        .color(palette::css::GRAY)
        .character_spacing(1.0)
        .line_height(20.0)
        .vertical_alignment(VerticalAlignment::Top)
}

#[test]
fn runs_match_reference() {
    let red = AttributeOverrides::new().color(palette::css::RED);
    let big = AttributeOverrides::new().font(Font::new("ObjectSans-Bold", 20.0));
    let cases: [(&str, Vec<HighlightOverride>); 4] = [
        ("Hello world", Vec::new()),
        (
            "Hello wörld, hello again",
            alloc::vec![
                HighlightOverride::new("wörld", red.clone()),
                HighlightOverride::new("hello", big.clone()),
            ],
        ),
        (
            "overlap",
            alloc::vec![
                HighlightOverride::new("overl", red.clone()),
                HighlightOverride::new("rla", big),
            ],
        ),
        (
            "😀 emoji 😀",
            alloc::vec![HighlightOverride::new("😀", red)],
        ),
    ];
    for (text, overrides) in &cases {
        let composer = Composer::new().match_mode(MatchMode::All);
        let styled = composer.compose(text, &base(), overrides);
        assert_eq!(flattened(&styled), reference_runs(&styled), "runs for {text:?}");
    }
}

#[test]
fn overlapping_overrides_resolve_to_last_applied() {
    let styled = compose(
        "overlap",
        &base(),
        &[
            HighlightOverride::new("overl", AttributeOverrides::new().color(palette::css::RED)),
            HighlightOverride::new("rla", AttributeOverrides::new().color(palette::css::BLUE)),
        ],
    );
    let colors: Vec<_> = styled
        .runs()
        .map(|run| (run.range, run.attributes.and_then(|a| a.color)))
        .collect();
    assert_eq!(
        colors,
        [
            (0..3, Some(palette::css::RED)),
            (3..6, Some(palette::css::BLUE)),
            (6..7, Some(palette::css::GRAY)),
        ]
    );
}

#[test]
fn two_adjacent_overrides_stay_independent() {
    let styled = compose(
        "ab",
        &base(),
        &[
            HighlightOverride::new("a", AttributeOverrides::new().color(palette::css::RED)),
            HighlightOverride::new("b", AttributeOverrides::new().baseline_offset(2.0)),
        ],
    );
    let runs = flattened(&styled);
    assert_eq!(runs.len(), 2);

    let a = runs[0].1.as_ref().unwrap();
    assert_eq!(a.color, Some(palette::css::RED));
    assert_eq!(a.baseline_offset, Some(10.0));

    let b = runs[1].1.as_ref().unwrap();
    assert_eq!(b.color, Some(palette::css::GRAY));
    assert_eq!(b.baseline_offset, Some(2.0));
}

#[test]
fn composition_is_fresh_each_call() {
    let overrides = [HighlightOverride::new(
        "b",
        AttributeOverrides::new().tracking(5.0),
    )];
    let first = compose("abc", &base(), &overrides);
    let second = compose("abc", &base(), &overrides);
    assert_eq!(first, second);
}
