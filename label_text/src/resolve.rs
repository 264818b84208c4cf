// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of a [`StyleSpec`] into canonical [`ResolvedAttributes`].
//!
//! Resolution is a pure function of the style. Properties it leaves unset are absent from
//! the result; nothing is substituted.
//!
//! ## Baseline offset
//!
//! Renderers generally anchor glyphs to the bottom of a line box. When an explicit line height
//! makes the box taller than the font, top and middle anchoring is approximated by raising the
//! baseline:
//!
//! | [`VerticalAlignment`] | baseline offset     |
//! |-----------------------|---------------------|
//! | `Top`                 | `line_height / 2`   |
//! | `Middle`              | `line_height / 4`   |
//! | `Bottom`              | `0`                 |
//!
//! No offset is produced without an explicit line height.
//!
//! ## Line height pin
//!
//! An explicit line height is pinned by setting both paragraph bounds to
//! `line_height ∓ LINE_HEIGHT_EPSILON`, so the renderer neither grows nor shrinks the line.

use peniko::Color;

use crate::style::{Alignment, Font, LineBreakMode, StyleSpec, VerticalAlignment};

/// Half-width of the line height pin.
pub const LINE_HEIGHT_EPSILON: f32 = 0.01;

/// Resolves `spec` into its canonical attributes.
///
/// Equivalent to [`StyleSpec::resolve`].
#[inline]
pub fn resolve(spec: &StyleSpec) -> ResolvedAttributes {
    spec.resolve()
}

/// Paragraph-level attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphAttributes {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Line break policy.
    pub line_break_mode: LineBreakMode,
    /// Lower bound on the line height; `None` leaves it to the renderer.
    pub min_line_height: Option<f32>,
    /// Upper bound on the line height; `None` leaves it to the renderer.
    pub max_line_height: Option<f32>,
    /// Extra space between wrapped lines.
    pub line_spacing: Option<f32>,
    /// Extra space after paragraph breaks.
    pub paragraph_spacing: Option<f32>,
}

impl ParagraphAttributes {
    /// The line height both bounds pin to, if both are set.
    pub fn pinned_line_height(&self) -> Option<f32> {
        match (self.min_line_height, self.max_line_height) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        }
    }
}

/// The canonical attribute set for a range of text.
///
/// This is a closed record: merging an [`AttributeOverrides`] on top of it is a field-by-field
/// replacement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedAttributes {
    /// The font.
    pub font: Option<Font>,
    /// The foreground color.
    pub color: Option<Color>,
    /// Tracking.
    pub tracking: Option<f32>,
    /// Baseline shift within the line box. Only present when an explicit line height was set.
    pub baseline_offset: Option<f32>,
    /// Paragraph attributes. Always present.
    pub paragraph: ParagraphAttributes,
}

impl ResolvedAttributes {
    /// Returns a copy of these attributes with every field set in `overrides` replaced.
    ///
    /// The paragraph record is replaced as a whole when `overrides` carries one.
    #[must_use]
    pub fn merged(&self, overrides: &AttributeOverrides) -> Self {
        let mut merged = self.clone();
        merged.merge(overrides);
        merged
    }

    /// Replaces every field set in `overrides`, in place.
    pub fn merge(&mut self, overrides: &AttributeOverrides) {
        if let Some(font) = &overrides.font {
            self.font = Some(font.clone());
        }
        if let Some(color) = overrides.color {
            self.color = Some(color);
        }
        if let Some(tracking) = overrides.tracking {
            self.tracking = Some(tracking);
        }
        if let Some(offset) = overrides.baseline_offset {
            self.baseline_offset = Some(offset);
        }
        if let Some(paragraph) = &overrides.paragraph {
            self.paragraph = paragraph.clone();
        }
    }

    /// Builds a spec from these attributes; see [`StyleSpec::set_from`].
    pub fn to_spec(&self) -> StyleSpec {
        let mut spec = StyleSpec::new();
        spec.set_from(self);
        spec
    }
}

/// A partial attribute set layered over [`ResolvedAttributes`].
///
/// ```
/// use label_text::peniko::color::palette;
/// use label_text::{AttributeOverrides, StyleSpec};
///
/// let base = StyleSpec::new().color(palette::css::BLACK).character_spacing(2.0).resolve();
/// let merged = base.merged(&AttributeOverrides::new().color(palette::css::RED));
///
/// assert_eq!(merged.color, Some(palette::css::RED));
/// assert_eq!(merged.tracking, Some(2.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeOverrides {
    /// Replacement font.
    pub font: Option<Font>,
    /// Replacement foreground color.
    pub color: Option<Color>,
    /// Replacement tracking.
    pub tracking: Option<f32>,
    /// Replacement baseline offset.
    pub baseline_offset: Option<f32>,
    /// Replacement paragraph attributes.
    pub paragraph: Option<ParagraphAttributes>,
}

impl AttributeOverrides {
    /// Creates an empty override set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the font.
    #[inline]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Overrides the foreground color.
    #[inline]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Overrides the tracking.
    #[inline]
    pub fn tracking(mut self, tracking: f32) -> Self {
        self.tracking = Some(tracking);
        self
    }

    /// Overrides the baseline offset.
    #[inline]
    pub fn baseline_offset(mut self, offset: f32) -> Self {
        self.baseline_offset = Some(offset);
        self
    }

    /// Overrides the paragraph attributes.
    #[inline]
    pub fn paragraph(mut self, paragraph: ParagraphAttributes) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.color.is_none()
            && self.tracking.is_none()
            && self.baseline_offset.is_none()
            && self.paragraph.is_none()
    }
}

impl From<ResolvedAttributes> for AttributeOverrides {
    fn from(attributes: ResolvedAttributes) -> Self {
        Self {
            font: attributes.font,
            color: attributes.color,
            tracking: attributes.tracking,
            baseline_offset: attributes.baseline_offset,
            paragraph: Some(attributes.paragraph),
        }
    }
}

impl StyleSpec {
    /// Resolves this spec into its canonical attributes.
    pub fn resolve(&self) -> ResolvedAttributes {
        let line_height = self.explicit_line_height;
        let baseline_offset = line_height.map(|height| match self.vertical_alignment {
            VerticalAlignment::Top => height / 2.0,
            VerticalAlignment::Middle => height / 4.0,
            VerticalAlignment::Bottom => 0.0,
        });

        ResolvedAttributes {
            font: self.font.clone(),
            color: self.color,
            tracking: self.character_spacing,
            baseline_offset,
            paragraph: ParagraphAttributes {
                alignment: self.alignment,
                line_break_mode: self.line_break_mode,
                min_line_height: line_height.map(|height| height - LINE_HEIGHT_EPSILON),
                max_line_height: line_height.map(|height| height + LINE_HEIGHT_EPSILON),
                line_spacing: self.line_spacing,
                paragraph_spacing: self.paragraph_spacing,
            },
        }
    }

    /// Imports resolved attributes back into this spec.
    ///
    /// Font, color and tracking are copied when present. The paragraph record always carries
    /// alignment, line break mode and spacing; the explicit line height is recovered as
    /// `min_line_height + LINE_HEIGHT_EPSILON`, or cleared when the minimum is unset.
    ///
    /// The baseline offset is not imported: several line height and alignment pairs produce
    /// the same offset, so [`StyleSpec::vertical_alignment`] is left untouched.
    pub fn set_from(&mut self, attributes: &ResolvedAttributes) {
        if let Some(font) = &attributes.font {
            self.font = Some(font.clone());
        }
        if let Some(color) = attributes.color {
            self.color = Some(color);
        }
        if let Some(tracking) = attributes.tracking {
            self.character_spacing = Some(tracking);
        }
        let paragraph = &attributes.paragraph;
        self.alignment = paragraph.alignment;
        self.line_break_mode = paragraph.line_break_mode;
        self.explicit_line_height = paragraph
            .min_line_height
            .map(|min| min + LINE_HEIGHT_EPSILON);
        self.line_spacing = paragraph.line_spacing;
        self.paragraph_spacing = paragraph.paragraph_spacing;
    }
}

impl From<&ResolvedAttributes> for StyleSpec {
    fn from(attributes: &ResolvedAttributes) -> Self {
        attributes.to_spec()
    }
}
