// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;

pub(crate) use asserts::{assert_runs_cover, run_colors};

use label_text::peniko::color::palette;
use label_text::peniko::Color;
use label_text::{AttributeOverrides, Font, HighlightOverride, StyleSpec, VerticalAlignment};
use label_text_dev::FixedAdvanceMeasurer;

/// The base style most tests compose with: 20pt lines anchored to the top.
pub(crate) fn base_style() -> StyleSpec {
    StyleSpec::new()
        .font(Font::new("ObjectSans-Regular", 15.0))
        .color(palette::css::GRAY)
        .line_height(20.0)
        .vertical_alignment(VerticalAlignment::Top)
}

/// An override that only recolors `target`.
pub(crate) fn recolor(target: &str, color: Color) -> HighlightOverride {
    HighlightOverride::new(target, AttributeOverrides::new().color(color))
}

/// A measurer whose natural line heights are exact: one and a half times the font size.
pub(crate) fn exact_measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer {
        advance_factor: 0.5,
        line_height_factor: 1.5,
    }
}
