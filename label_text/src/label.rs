// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::kurbo::Size;

use crate::{
    Composer, HighlightOverride, MetricsEstimator, ResolvedAttributes, StyleSpec, StyledText,
    TextMeasurer, VerticalAlignment,
};

/// Receives the styled text a [`Label`] compiles, for layout and drawing.
pub trait StyledTextSink {
    /// Replaces the displayed text. `None` clears it.
    fn set_styled_text(&mut self, text: Option<&StyledText>);
}

/// The state a host view keeps for a styled label.
///
/// A label owns its [`StyleSpec`], its text and the [`StyledText`] compiled from them. Every
/// change through the setters recompiles the styled text wholesale. Highlight overrides passed
/// to [`Label::set_highlighted_text`] are used for that one compilation only; a later style or
/// text change recompiles from the base style alone.
///
/// Cloning a label copies its whole configuration.
///
/// ```
/// use label_text::peniko::color::palette;
/// use label_text::{Label, StyleSpec, VerticalAlignment};
///
/// let mut label = Label::new(StyleSpec::new().color(palette::css::BLACK).line_height(20.0));
/// label.set_text("Greetings there!");
/// label.set_vertical_alignment(VerticalAlignment::Middle);
///
/// let compiled = label.compiled().unwrap();
/// assert_eq!(compiled.attributes_at(0).unwrap().baseline_offset, Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    style: StyleSpec,
    text: Option<Arc<str>>,
    max_lines: u32,
    width: f64,
    composer: Composer,
    compiled: Option<StyledText>,
}

impl Default for Label {
    fn default() -> Self {
        Self::new(StyleSpec::default())
    }
}

impl Label {
    /// Creates a label with no text, showing a single line.
    pub fn new(style: StyleSpec) -> Self {
        Self {
            style,
            text: None,
            max_lines: 1,
            width: 0.0,
            composer: Composer::default(),
            compiled: None,
        }
    }

    /// The style.
    #[inline]
    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Replaces the style and recompiles.
    pub fn set_style(&mut self, style: StyleSpec) {
        self.style = style;
        self.recompile();
    }

    /// Edits the style in place and recompiles.
    pub fn update_style(&mut self, edit: impl FnOnce(&mut StyleSpec)) {
        edit(&mut self.style);
        self.recompile();
    }

    /// Sets the vertical alignment and recompiles.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.update_style(|style| style.vertical_alignment = alignment);
    }

    /// Imports resolved attributes into the style (see [`StyleSpec::set_from`]) and recompiles.
    pub fn set_attributes(&mut self, attributes: &ResolvedAttributes) {
        self.update_style(|style| style.set_from(attributes));
    }

    /// The text, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the text and recompiles.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) {
        self.text = Some(text.into());
        self.recompile();
    }

    /// Removes the text and the compiled styled text.
    pub fn clear_text(&mut self) {
        self.text = None;
        self.compiled = None;
    }

    /// Sets the text and compiles it with `overrides` layered over the base style.
    pub fn set_highlighted_text(
        &mut self,
        text: impl Into<Arc<str>>,
        overrides: &[HighlightOverride],
    ) {
        let text = text.into();
        self.compiled = Some(self.composer.compose(&text, &self.style, overrides));
        self.text = Some(text);
    }

    /// Returns `true` when there is no text or the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty)
    }

    /// The maximum number of lines; `0` means unlimited.
    #[inline]
    pub fn max_lines(&self) -> u32 {
        self.max_lines
    }

    /// Sets the maximum number of lines; `0` means unlimited.
    #[inline]
    pub fn set_max_lines(&mut self, max_lines: u32) {
        self.max_lines = max_lines;
    }

    /// The width the label is laid out at.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the width the label is laid out at.
    #[inline]
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// The composition settings.
    #[inline]
    pub fn composer(&self) -> Composer {
        self.composer
    }

    /// Replaces the composition settings and recompiles.
    pub fn set_composer(&mut self, composer: Composer) {
        self.composer = composer;
        self.recompile();
    }

    /// The current compiled styled text, if the label has text.
    #[inline]
    pub fn compiled(&self) -> Option<&StyledText> {
        self.compiled.as_ref()
    }

    /// Hands the compiled styled text to `sink`.
    pub fn present(&self, sink: &mut impl StyledTextSink) {
        sink.set_styled_text(self.compiled.as_ref());
    }

    /// The fitted size of the label's text at `width`, within its line budget.
    pub fn size_for_width<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &mut M,
        width: f64,
    ) -> Result<Size, M::Error> {
        let empty;
        let text = match &self.compiled {
            Some(compiled) => compiled,
            None => {
                empty = StyledText::new("");
                &empty
            }
        };
        MetricsEstimator::new(measurer).size(text, &self.style, width, self.max_lines)
    }

    /// The fitted height of the label's text at `width`.
    pub fn height_for_width<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &mut M,
        width: f64,
    ) -> Result<f64, M::Error> {
        Ok(self.size_for_width(measurer, width)?.height)
    }

    /// The fitted height of the label's text at its own width.
    pub fn fitted_height<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &mut M,
    ) -> Result<f64, M::Error> {
        self.height_for_width(measurer, self.width)
    }

    /// The intrinsic width of the label's text.
    pub fn fitted_width<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &mut M,
    ) -> Result<f64, M::Error> {
        Ok(self.size_for_width(measurer, f64::INFINITY)?.width)
    }

    /// The height of `max_lines` lines; `0.0` when the line count is unlimited.
    pub fn label_height<M: TextMeasurer + ?Sized>(&self, measurer: &mut M) -> f64 {
        MetricsEstimator::new(measurer).label_height(&self.style, self.max_lines)
    }

    fn recompile(&mut self) {
        self.compiled = self
            .text
            .as_deref()
            .map(|text| self.composer.compose(text, &self.style, &[]));
    }
}
