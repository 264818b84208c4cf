// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Label Text Dev
//!
//! Utilities for developing and testing `label_text` without a font backend:
//!
//! - [`FixedAdvanceMeasurer`], a deterministic [`TextMeasurer`] where every character advances
//!   by a fixed fraction of its font size.
//! - [`Recording`], a wrapper that records every measurement box forwarded to a measurer.
//! - [`samples`], shared text samples.

use core::convert::Infallible;
use core::ops::Range;

use label_text::peniko::kurbo::Size;
use label_text::{Font, ResolvedAttributes, StyledText, TextMeasurer};

/// Shared text samples.
pub mod samples {
    /// Three short paragraphs.
    pub const GREETING: &str =
        "Greetings there!\nThis is a demonstration.\nHopefully, it will help you.";

    /// Two lines of design copy.
    pub const DESIGN: &str =
        "Created to help match the label with\nwhatever the designer created";

    /// A single word that never wraps at the usual test widths.
    pub const SHORT: &str = "Label";
}

/// Font size assumed when text carries no font, matching the usual platform label default.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// A deterministic measurer for tests.
///
/// Every character advances by `font_size * advance_factor + tracking`. Lines break before the
/// character that would overflow the width, and at `\n`. Each line is as tall as the pinned line
/// height at its start, or the natural line height of its font. Only whole lines that fit the
/// measurement box are counted.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Character advance as a fraction of the font size.
    pub advance_factor: f32,
    /// Natural line height as a fraction of the font size.
    pub line_height_factor: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_factor: 0.5,
            line_height_factor: 1.2,
        }
    }
}

/// A line produced by [`FixedAdvanceMeasurer::break_lines`].
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// The byte range of the line, excluding any trailing `\n`.
    pub range: Range<usize>,
    /// The advance width of the line.
    pub width: f64,
    /// Whether the line ends at a `\n`.
    pub ends_paragraph: bool,
}

impl FixedAdvanceMeasurer {
    /// Creates a measurer with the default factors.
    pub fn new() -> Self {
        Self::default()
    }

    fn font_size(attributes: Option<&ResolvedAttributes>) -> f32 {
        attributes
            .and_then(|attrs| attrs.font.as_ref())
            .map_or(DEFAULT_FONT_SIZE, |font| font.size)
    }

    /// The advance of one character styled with `attributes`.
    pub fn advance(&self, attributes: Option<&ResolvedAttributes>) -> f64 {
        let tracking = attributes.and_then(|attrs| attrs.tracking).unwrap_or(0.0);
        f64::from(Self::font_size(attributes) * self.advance_factor + tracking)
    }

    /// Breaks `text` into lines no wider than `max_width`.
    ///
    /// A line always holds at least one character, even if that character overflows.
    pub fn break_lines(&self, text: &StyledText, max_width: f64) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut width = 0.0;
        for run in text.runs() {
            let advance = self.advance(run.attributes);
            for (offset, ch) in text.as_str()[run.range.clone()].char_indices() {
                let index = run.range.start + offset;
                if ch == '\n' {
                    lines.push(Line {
                        range: start..index,
                        width,
                        ends_paragraph: true,
                    });
                    start = index + 1;
                    width = 0.0;
                    continue;
                }
                if index > start && width + advance > max_width {
                    lines.push(Line {
                        range: start..index,
                        width,
                        ends_paragraph: false,
                    });
                    start = index;
                    width = 0.0;
                }
                width += advance;
            }
        }
        if start < text.len() {
            lines.push(Line {
                range: start..text.len(),
                width,
                ends_paragraph: false,
            });
        }
        lines
    }

    fn line_height(&mut self, attributes: Option<&ResolvedAttributes>) -> f64 {
        let pinned = attributes.and_then(|attrs| attrs.paragraph.pinned_line_height());
        let font = attributes.and_then(|attrs| attrs.font.as_ref());
        f64::from(pinned.unwrap_or_else(|| self.natural_line_height(font)))
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    type Error = Infallible;

    fn natural_line_height(&mut self, font: Option<&Font>) -> f32 {
        font.map_or(DEFAULT_FONT_SIZE, |font| font.size) * self.line_height_factor
    }

    fn fit(&mut self, text: &StyledText, bounds: Size) -> Result<Size, Self::Error> {
        let lines = self.break_lines(text, bounds.width);
        let mut width: f64 = 0.0;
        let mut height = 0.0;
        let mut gap = 0.0;
        let mut fitted = 0;
        for line in &lines {
            let attributes = text.attributes_at(line.range.start);
            let next = height + gap + self.line_height(attributes);
            if next > bounds.height {
                break;
            }
            height = next;
            width = width.max(line.width);
            fitted += 1;

            let paragraph = attributes.map(|attrs| &attrs.paragraph);
            gap = f64::from(paragraph.and_then(|p| p.line_spacing).unwrap_or(0.0));
            if line.ends_paragraph {
                gap += f64::from(paragraph.and_then(|p| p.paragraph_spacing).unwrap_or(0.0));
            }
        }
        log::trace!("fitted {fitted} of {} lines into {bounds:?}", lines.len());
        Ok(Size::new(width.min(bounds.width), height))
    }
}

/// Wraps a measurer and records every measurement box it is asked to fit into.
#[derive(Clone, Debug, Default)]
pub struct Recording<M> {
    inner: M,
    bounds: Vec<Size>,
}

impl<M> Recording<M> {
    /// Wraps `inner`.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            bounds: Vec::new(),
        }
    }

    /// The boxes passed to [`TextMeasurer::fit`], oldest first.
    pub fn bounds(&self) -> &[Size] {
        &self.bounds
    }

    /// The most recent box passed to [`TextMeasurer::fit`].
    pub fn last_bounds(&self) -> Option<Size> {
        self.bounds.last().copied()
    }

    /// Unwraps the inner measurer.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for Recording<M> {
    type Error = M::Error;

    fn natural_line_height(&mut self, font: Option<&Font>) -> f32 {
        self.inner.natural_line_height(font)
    }

    fn fit(&mut self, text: &StyledText, bounds: Size) -> Result<Size, Self::Error> {
        self.bounds.push(bounds);
        self.inner.fit(text, bounds)
    }
}
