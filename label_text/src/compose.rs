// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of base-styled text with highlight overrides.
//!
//! The base style is resolved once and applied to the whole text. Each override is then
//! located with the [`matcher`](crate::matcher) and, when found, the base attributes merged
//! with the override's attributes are applied to the matched range. Overrides never compound:
//! every override is merged onto a fresh copy of the base, so one override's attributes never
//! leak into another's range.
//!
//! An override without a target stops composition under the default
//! [`MissingTargetPolicy::Abort`]: it and every override after it are dropped. Use
//! [`Composer::missing_target_policy`] to skip such overrides instead.

use alloc::string::String;

use crate::{matcher, AttributeOverrides, StyleSpec, StyledText, TextRange};

/// A substring of the text to restyle, and how to restyle it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightOverride {
    /// The literal substring to find. `None` or empty means "no target".
    pub target: Option<String>,
    /// Attributes layered on top of the base attributes over the matched range.
    pub attributes: AttributeOverrides,
}

impl HighlightOverride {
    /// Creates an override for `target`.
    pub fn new(target: impl Into<String>, attributes: AttributeOverrides) -> Self {
        Self {
            target: Some(target.into()),
            attributes,
        }
    }

    /// Creates an override with no target.
    pub fn untargeted(attributes: AttributeOverrides) -> Self {
        Self {
            target: None,
            attributes,
        }
    }

    /// Returns the target, if it is present and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|target| !target.is_empty())
    }
}

/// What to do with an override whose target is missing or empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissingTargetPolicy {
    /// Stop composing: the remaining overrides are not applied.
    #[default]
    Abort,
    /// Ignore this override and carry on with the next.
    Skip,
}

/// Which occurrences of a target an override applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Only the leftmost occurrence.
    #[default]
    First,
    /// Every non-overlapping occurrence.
    All,
}

/// Composition settings.
///
/// The default composer is what [`compose`] uses.
///
/// ```
/// use label_text::peniko::color::palette;
/// use label_text::{AttributeOverrides, Composer, HighlightOverride, MatchMode, StyleSpec};
///
/// let composer = Composer::new().match_mode(MatchMode::All);
/// let red = AttributeOverrides::new().color(palette::css::RED);
/// let styled = composer.compose("la la la", &StyleSpec::new(), &[HighlightOverride::new("la", red)]);
///
/// // The base segment plus one per occurrence.
/// assert_eq!(styled.segments_len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    missing_target: MissingTargetPolicy,
    match_mode: MatchMode,
}

impl Composer {
    /// Creates a composer with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for overrides without a target.
    #[inline]
    pub fn missing_target_policy(mut self, policy: MissingTargetPolicy) -> Self {
        self.missing_target = policy;
        self
    }

    /// Sets which occurrences of a target are restyled.
    #[inline]
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Composes `text` styled with `base` and layered with `overrides`, in order.
    pub fn compose(
        &self,
        text: &str,
        base: &StyleSpec,
        overrides: &[HighlightOverride],
    ) -> StyledText {
        let base = base.resolve();
        let mut styled = StyledText::new(text);
        styled.apply(TextRange::full(text), base.clone());

        for (index, highlight) in overrides.iter().enumerate() {
            let Some(target) = highlight.target() else {
                match self.missing_target {
                    MissingTargetPolicy::Abort => {
                        log::debug!(
                            "override {index} has no target; dropping it and {} after it",
                            overrides.len() - index - 1
                        );
                        break;
                    }
                    MissingTargetPolicy::Skip => {
                        log::debug!("override {index} has no target; skipping it");
                        continue;
                    }
                }
            };

            let mut found = matcher::matches(text, target).peekable();
            if found.peek().is_none() {
                log::debug!("override {index}: {target:?} not found");
                continue;
            }
            let merged = base.merged(&highlight.attributes);
            let limit = match self.match_mode {
                MatchMode::First => 1,
                MatchMode::All => usize::MAX,
            };
            for range in found.take(limit) {
                log::trace!("override {index}: applying to {:?}", range.as_range());
                styled.apply(range, merged.clone());
            }
        }
        styled
    }
}

/// Composes `text` styled with `base` and layered with `overrides`, using the default
/// [`Composer`].
///
/// Each override restyles the first occurrence of its target. Overrides whose target does not
/// occur are skipped; the first override without a target ends composition.
///
/// ```
/// use label_text::peniko::color::palette;
/// use label_text::{compose, AttributeOverrides, HighlightOverride, StyleSpec};
///
/// let base = StyleSpec::new().color(palette::css::BLACK);
/// let red = AttributeOverrides::new().color(palette::css::RED);
/// let styled = compose("Hello world", &base, &[HighlightOverride::new("world", red)]);
///
/// let colors: Vec<_> = styled
///     .runs()
///     .map(|run| (run.range, run.attributes.and_then(|a| a.color)))
///     .collect();
/// assert_eq!(
///     colors,
///     [(0..6, Some(palette::css::BLACK)), (6..11, Some(palette::css::RED))]
/// );
/// ```
pub fn compose(text: &str, base: &StyleSpec, overrides: &[HighlightOverride]) -> StyledText {
    Composer::default().compose(text, base, overrides)
}
