// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size estimation through an external [`TextMeasurer`].
//!
//! The estimator never lays out glyphs. It works out the measurement box for a label and
//! forwards it to the measurer, returning the fitted size unmodified.
//!
//! The box's height is capped at `effective_line_height * max_lines` (unbounded when
//! `max_lines == 0`). Without the cap, a renderer flowing text naturally can overshoot a
//! pinned custom line height.

use peniko::kurbo::Size;

use crate::{Font, StyleSpec, StyledText};

/// The host's text measurement backend.
///
/// Implementations must be deterministic for fixed inputs. Any threading requirements of the
/// host apply as-is: the estimator calls the measurer on the thread it is called from.
pub trait TextMeasurer {
    /// Error reported by the backend. It is propagated unchanged.
    type Error;

    /// The natural single-line height of `font`, or of the host's default font when `None`.
    fn natural_line_height(&mut self, font: Option<&Font>) -> f32;

    /// The size `text` occupies when fitted into `bounds`.
    fn fit(&mut self, text: &StyledText, bounds: Size) -> Result<Size, Self::Error>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    type Error = M::Error;

    fn natural_line_height(&mut self, font: Option<&Font>) -> f32 {
        (**self).natural_line_height(font)
    }

    fn fit(&mut self, text: &StyledText, bounds: Size) -> Result<Size, Self::Error> {
        (**self).fit(text, bounds)
    }
}

/// The measurement box for a label `for_width` wide showing at most `max_lines` lines.
///
/// `natural_line_height` is only used when `spec` has no explicit line height.
pub fn measurement_bounds(
    spec: &StyleSpec,
    natural_line_height: f32,
    for_width: f64,
    max_lines: u32,
) -> Size {
    let max_height = if max_lines == 0 {
        f64::INFINITY
    } else {
        f64::from(spec.effective_line_height(natural_line_height)) * f64::from(max_lines)
    };
    Size::new(for_width, max_height)
}

/// Sizes styled text using a [`TextMeasurer`].
///
/// ```
/// use label_text::metrics::MetricsEstimator;
/// use label_text::peniko::kurbo::Size;
/// use label_text::{compose, Font, StyleSpec, StyledText, TextMeasurer};
///
/// /// Reports the box it is given.
/// struct Echo;
///
/// impl TextMeasurer for Echo {
///     type Error = core::convert::Infallible;
///
///     fn natural_line_height(&mut self, font: Option<&Font>) -> f32 {
///         font.map_or(17.0, |font| font.size * 1.2)
///     }
///
///     fn fit(&mut self, _: &StyledText, bounds: Size) -> Result<Size, Self::Error> {
///         Ok(bounds)
///     }
/// }
///
/// let spec = StyleSpec::new().line_height(20.0);
/// let text = compose("Hello", &spec, &[]);
/// let mut measurer = Echo;
/// let mut estimator = MetricsEstimator::new(&mut measurer);
///
/// let size = estimator.size(&text, &spec, 100.0, 2).unwrap();
/// assert_eq!(size, Size::new(100.0, 40.0));
/// ```
#[derive(Debug)]
pub struct MetricsEstimator<'m, M: TextMeasurer + ?Sized> {
    measurer: &'m mut M,
}

impl<'m, M: TextMeasurer + ?Sized> MetricsEstimator<'m, M> {
    /// Creates an estimator backed by `measurer`.
    #[inline]
    pub fn new(measurer: &'m mut M) -> Self {
        Self { measurer }
    }

    /// The line height `spec` lays out with: explicit if set, else the font's natural height.
    pub fn line_height(&mut self, spec: &StyleSpec) -> f32 {
        match spec.explicit_line_height {
            Some(height) => height,
            None => self.measurer.natural_line_height(spec.font.as_ref()),
        }
    }

    /// The height of `max_lines` lines of `spec`; `0.0` when `max_lines == 0`.
    pub fn label_height(&mut self, spec: &StyleSpec, max_lines: u32) -> f64 {
        f64::from(self.line_height(spec)) * f64::from(max_lines)
    }

    /// The measurement box for `for_width` and `max_lines`.
    pub fn bounds(&mut self, spec: &StyleSpec, for_width: f64, max_lines: u32) -> Size {
        let line_height = self.line_height(spec);
        measurement_bounds(spec, line_height, for_width, max_lines)
    }

    /// The fitted size of `text` in a box `for_width` wide and at most `max_lines` tall.
    ///
    /// `max_lines == 0` leaves the height unbounded.
    pub fn size(
        &mut self,
        text: &StyledText,
        spec: &StyleSpec,
        for_width: f64,
        max_lines: u32,
    ) -> Result<Size, M::Error> {
        let bounds = self.bounds(spec, for_width, max_lines);
        log::trace!("measuring {} bytes in {bounds:?}", text.len());
        self.measurer.fit(text, bounds)
    }

    /// The intrinsic width of `text`: its fitted width with unbounded width.
    pub fn width(
        &mut self,
        text: &StyledText,
        spec: &StyleSpec,
        max_lines: u32,
    ) -> Result<f64, M::Error> {
        Ok(self.size(text, spec, f64::INFINITY, max_lines)?.width)
    }

    /// The fitted height of `text` for `for_width`.
    pub fn height(
        &mut self,
        text: &StyledText,
        spec: &StyleSpec,
        for_width: f64,
        max_lines: u32,
    ) -> Result<f64, M::Error> {
        Ok(self.size(text, spec, for_width, max_lines)?.height)
    }
}
