// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for size estimation against a deterministic measurer.

use crate::util::exact_measurer;
use label_text::metrics::MetricsEstimator;
use label_text::peniko::kurbo::Size;
use label_text::{compose, Font, StyleSpec};
use label_text_dev::{samples, FixedAdvanceMeasurer, Recording};

#[test]
fn metrics_size_within_line_budget() {
    let style = StyleSpec::new().line_height(20.0);
    let text = compose(samples::GREETING, &style, &[]);
    let mut measurer = Recording::new(FixedAdvanceMeasurer::new());

    let size = MetricsEstimator::new(&mut measurer)
        .size(&text, &style, 100.0, 2)
        .unwrap();

    assert_eq!(measurer.bounds(), [Size::new(100.0, 40.0)]);
    assert_eq!(size.height, 40.0);
    // 11 characters of 8.5 fit in 100.
    assert_eq!(size.width, 93.5);
}

#[test]
fn metrics_unlimited_lines() {
    let style = StyleSpec::new().line_height(20.0);
    let text = compose(samples::GREETING, &style, &[]);
    let mut measurer = Recording::new(FixedAdvanceMeasurer::new());

    let height = MetricsEstimator::new(&mut measurer)
        .height(&text, &style, 100.0, 0)
        .unwrap();

    assert!(measurer.last_bounds().unwrap().height.is_infinite());
    // The three paragraphs wrap into 2, 3 and 3 lines.
    assert_eq!(height, 160.0);
}

#[test]
fn metrics_natural_line_height_without_explicit() {
    let style = StyleSpec::new().font(Font::new("Inter", 20.0));
    let text = compose(samples::GREETING, &style, &[]);
    let mut measurer = Recording::new(exact_measurer());
    let mut estimator = MetricsEstimator::new(&mut measurer);

    assert_eq!(estimator.line_height(&style), 30.0);
    assert_eq!(estimator.label_height(&style, 3), 90.0);
    let size = estimator.size(&text, &style, 200.0, 3).unwrap();

    assert_eq!(measurer.bounds(), [Size::new(200.0, 90.0)]);
    assert_eq!(size.height, 90.0);
}

#[test]
fn metrics_width_is_unbounded() {
    let style = StyleSpec::new().line_height(20.0);
    let text = compose(samples::SHORT, &style, &[]);
    let mut measurer = Recording::new(FixedAdvanceMeasurer::new());

    let width = MetricsEstimator::new(&mut measurer)
        .width(&text, &style, 1)
        .unwrap();

    assert_eq!(width, 42.5);
    let bounds = measurer.last_bounds().unwrap();
    assert!(bounds.width.is_infinite());
    assert_eq!(bounds.height, 20.0);
}

#[test]
fn metrics_spacing_reaches_measurer() {
    let style = StyleSpec::new()
        .line_height(20.0)
        .line_spacing(2.0)
        .paragraph_spacing(6.0);
    let text = compose("ab\ncd", &style, &[]);
    let mut measurer = FixedAdvanceMeasurer::new();

    let height = MetricsEstimator::new(&mut measurer)
        .height(&text, &style, 100.0, 0)
        .unwrap();

    assert_eq!(height, 48.0);
}
