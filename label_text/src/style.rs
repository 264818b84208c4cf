// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative style a label is configured with.
//!
//! A [`StyleSpec`] is plain data. It is mutated in place by its owner and re-resolved with
//! [`StyleSpec::resolve`] whenever the text or any property changes; nothing is cached.
//!
//! Lengths are in the same unit as the font size (points on most platforms).

use alloc::sync::Arc;

use peniko::Color;

/// A reference to a font, by family name and size.
///
/// Loading the font and reading its metrics is up to the host's
/// [`TextMeasurer`](crate::TextMeasurer).
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The family (or full face) name the host resolves.
    pub family: Arc<str>,
    /// The point size.
    pub size: f32,
}

impl Font {
    /// Creates a font reference.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Horizontal alignment of lines within the label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left edge.
    Left,
    /// Centered.
    Center,
    /// Right edge.
    Right,
    /// Both edges, except for the last line of a paragraph.
    Justified,
    /// The leading edge for the script of the text.
    #[default]
    Natural,
}

/// What happens to text that does not fit on a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Cut off at the edge.
    Clip,
    /// Elide the start of the line.
    TruncateHead,
    /// Elide the end of the line.
    #[default]
    TruncateTail,
    /// Elide the middle of the line.
    TruncateMiddle,
}

/// Where glyphs sit inside a line box that is taller than the font's natural line height.
///
/// Only takes effect when an explicit line height is set; see
/// [`ResolvedAttributes::baseline_offset`](crate::ResolvedAttributes::baseline_offset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Raise the baseline by half the line height.
    Top,
    /// Raise the baseline by a quarter of the line height.
    Middle,
    /// Leave the baseline where the renderer puts it.
    #[default]
    Bottom,
}

/// The style properties of a label.
///
/// Every optional property is left out of the resolved attributes when unset; none of them
/// default to zero.
///
/// ```
/// use label_text::{Alignment, Font, StyleSpec};
///
/// let spec = StyleSpec::new()
///     .font(Font::new("Inter", 15.0))
///     .alignment(Alignment::Center)
///     .character_spacing(4.0)
///     .line_height(20.0);
///
/// assert_eq!(spec.explicit_line_height, Some(20.0));
/// assert_eq!(spec.effective_line_height(18.0), 20.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSpec {
    /// The font, if the host has one to offer.
    pub font: Option<Font>,
    /// The foreground color.
    pub color: Option<Color>,
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Line break policy.
    pub line_break_mode: LineBreakMode,
    /// Extra space between characters (tracking).
    pub character_spacing: Option<f32>,
    /// Extra space between wrapped lines.
    pub line_spacing: Option<f32>,
    /// Extra space after paragraph breaks.
    pub paragraph_spacing: Option<f32>,
    /// The line height set by the caller.
    ///
    /// When `None`, the font's natural line height is used wherever a line height is needed,
    /// and no baseline offset is produced.
    pub explicit_line_height: Option<f32>,
    /// Vertical anchoring inside the line box.
    pub vertical_alignment: VerticalAlignment,
}

impl StyleSpec {
    /// Creates a spec with every optional property unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font.
    #[inline]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the foreground color.
    #[inline]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the horizontal alignment.
    #[inline]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the line break policy.
    #[inline]
    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    /// Sets the tracking.
    #[inline]
    pub fn character_spacing(mut self, spacing: f32) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    /// Sets the space between wrapped lines.
    #[inline]
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Sets the space after paragraph breaks.
    #[inline]
    pub fn paragraph_spacing(mut self, spacing: f32) -> Self {
        self.paragraph_spacing = Some(spacing);
        self
    }

    /// Sets an explicit line height.
    #[inline]
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.explicit_line_height = Some(line_height);
        self
    }

    /// Sets the vertical alignment.
    #[inline]
    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// The line height to lay out with: the explicit one if set, else `natural`.
    ///
    /// `natural` is the font's natural line height as reported by the host.
    #[inline]
    pub fn effective_line_height(&self, natural: f32) -> f32 {
        self.explicit_line_height.unwrap_or(natural)
    }
}
