// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers to assert truths about styled text.

use core::ops::Range;

use label_text::peniko::Color;
use label_text::StyledText;

/// Assert that the runs of `text` tile it: contiguous, non-empty and ending at its length.
pub(crate) fn assert_runs_cover(text: &StyledText) {
    let mut end = 0;
    for run in text.runs() {
        assert_eq!(run.range.start, end, "gap before run {:?}", run.range);
        assert!(!run.range.is_empty(), "empty run at {}", run.range.start);
        end = run.range.end;
    }
    assert_eq!(end, text.len(), "runs stop short of the text");
}

/// Collect the color of every run.
pub(crate) fn run_colors(text: &StyledText) -> Vec<(Range<usize>, Option<Color>)> {
    text.runs()
        .map(|run| (run.range, run.attributes.and_then(|attrs| attrs.color)))
        .collect()
}
