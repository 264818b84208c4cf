// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::text_range::validate_range;
use crate::{Error, ResolvedAttributes, TextRange};

/// A range of text and the attributes applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The byte range the attributes cover.
    pub range: TextRange,
    /// The attributes.
    pub attributes: ResolvedAttributes,
}

/// Text with layered attribute segments.
///
/// Segments are kept in the order they were applied. Where segments overlap, the one applied
/// last takes precedence. A composed label has one segment spanning the whole text followed by
/// one segment per applied override.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    text: Arc<str>,
    segments: SmallVec<[Segment; 4]>,
}

impl StyledText {
    /// Creates a `StyledText` with no segments.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            segments: SmallVec::new(),
        }
    }

    /// Returns the text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns a shared handle to the text.
    #[inline]
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `attributes` to a validated `range`.
    #[inline]
    pub fn apply(&mut self, range: TextRange, attributes: ResolvedAttributes) {
        debug_assert!(
            range.end() <= self.text.len(),
            "range {:?} was validated against different text",
            range.as_range()
        );
        self.segments.push(Segment { range, attributes });
    }

    /// Applies `attributes` to the byte `range`, validating it first.
    pub fn apply_bytes(
        &mut self,
        range: Range<usize>,
        attributes: ResolvedAttributes,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.apply(TextRange::new_unchecked(range.start, range.end), attributes);
        Ok(())
    }

    /// Applies `attributes` to a range of UTF-16 code unit offsets, validating it first.
    pub fn apply_utf16(
        &mut self,
        range: Range<usize>,
        attributes: ResolvedAttributes,
    ) -> Result<(), Error> {
        let range = TextRange::from_utf16(&self.text, range)?;
        self.apply(range, attributes);
        Ok(())
    }

    /// Validates a byte `range` against this text.
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Returns the segments in the order they were applied.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segments_len(&self) -> usize {
        self.segments.len()
    }

    /// Removes every segment, keeping the text.
    #[inline]
    pub fn clear_segments(&mut self) {
        self.segments.clear();
    }

    /// Iterates the segments with their ranges converted to UTF-16 code units.
    pub fn segments_utf16(
        &self,
    ) -> impl Iterator<Item = (Range<usize>, &ResolvedAttributes)> + '_ {
        self.segments
            .iter()
            .map(|segment| (segment.range.to_utf16(&self.text), &segment.attributes))
    }

    /// Returns the attributes in effect at byte `index`, if any segment covers it.
    pub fn attributes_at(&self, index: usize) -> Option<&ResolvedAttributes> {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.range.contains(index))
            .map(|segment| &segment.attributes)
    }

    /// Returns the flattened runs of this text.
    ///
    /// Runs are contiguous, non-overlapping and cover the whole text. Each run carries the
    /// attributes of the last segment covering it, or `None` where no segment applies.
    pub fn runs(&self) -> Runs<'_> {
        Runs::new(self)
    }

    /// Index of the last-applied segment covering all of `start..end`.
    fn winning_segment(&self, start: usize, end: usize) -> Option<usize> {
        self.segments.iter().rposition(|segment| {
            !segment.range.is_empty()
                && segment.range.start() <= start
                && segment.range.end() >= end
        })
    }
}

/// A flattened run of [`StyledText`].
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a> {
    /// The byte range of the run.
    pub range: Range<usize>,
    /// The winning attributes, if any segment covers the run.
    pub attributes: Option<&'a ResolvedAttributes>,
}

/// Iterator over the runs of a [`StyledText`], created by [`StyledText::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    styled: &'a StyledText,
    boundaries: Vec<usize>,
    index: usize,
}

impl<'a> Runs<'a> {
    fn new(styled: &'a StyledText) -> Self {
        // Each segment contributes up to two boundaries, plus the implicit 0/len.
        let mut boundaries = Vec::with_capacity(2 + styled.segments.len() * 2);
        boundaries.push(0);
        boundaries.push(styled.len());
        for segment in &styled.segments {
            boundaries.push(segment.range.start());
            boundaries.push(segment.range.end());
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            styled,
            boundaries,
            index: 0,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.boundaries.get(self.index)?;
        let mut end = *self.boundaries.get(self.index + 1)?;
        let winner = self.styled.winning_segment(start, end);
        self.index += 1;
        // Coalesce neighbors won by the same segment.
        while let Some(&next) = self.boundaries.get(self.index + 1) {
            if self.styled.winning_segment(end, next) != winner {
                break;
            }
            end = next;
            self.index += 1;
        }
        Some(Run {
            range: start..end,
            attributes: winner.map(|ix| &self.styled.segments[ix].attributes),
        })
    }
}

impl core::iter::FusedIterator for Runs<'_> {}

#[cfg(test)]
mod tests {
    use super::StyledText;
    use crate::{ErrorKind, ResolvedAttributes, StyleSpec, TextRange};
    use alloc::vec::Vec;
    use peniko::color::palette;

    fn colored(color: peniko::Color) -> ResolvedAttributes {
        StyleSpec::new().color(color).resolve()
    }

    #[test]
    fn later_segments_win() {
        let mut text = StyledText::new("Hello world");
        text.apply(TextRange::full("Hello world"), colored(palette::css::BLACK));
        text.apply_bytes(6..11, colored(palette::css::RED)).unwrap();

        let color_at = |index| text.attributes_at(index).and_then(|attrs| attrs.color);
        assert_eq!(color_at(0), Some(palette::css::BLACK));
        assert_eq!(color_at(5), Some(palette::css::BLACK));
        assert_eq!(color_at(6), Some(palette::css::RED));
        assert_eq!(color_at(10), Some(palette::css::RED));
        assert_eq!(text.attributes_at(11), None);
    }

    #[test]
    fn attributes_past_the_end_are_absent() {
        let mut text = StyledText::new("abc");
        text.apply(TextRange::full("abc"), colored(palette::css::BLACK));
        assert!(text.attributes_at(2).is_some());
        assert_eq!(text.attributes_at(3), None);
        assert_eq!(text.attributes_at(usize::MAX), None);
    }

    #[test]
    fn validated_ranges_and_cleared_segments() {
        let mut text = StyledText::new("naïve");
        let range = text.range(2..4).unwrap();
        assert!(range.contains(2) && range.contains(3));
        assert!(!range.contains(4));
        assert_eq!(
            text.range(2..3).unwrap_err().kind(),
            ErrorKind::NotOnCharBoundary
        );

        text.apply(range, colored(palette::css::RED));
        let shared = alloc::sync::Arc::clone(text.text());
        text.clear_segments();
        assert_eq!(text.segments_len(), 0);
        assert_eq!(text.attributes_at(2), None);
        assert_eq!(&*shared, "naïve");
        assert_eq!(text.as_str(), "naïve");
    }

    #[test]
    fn runs_cover_text_and_coalesce() {
        let mut text = StyledText::new("abcdef");
        text.apply(TextRange::full("abcdef"), colored(palette::css::BLACK));
        text.apply_bytes(2..4, colored(palette::css::RED)).unwrap();

        let runs: Vec<_> = text.runs().map(|run| run.range).collect();
        assert_eq!(runs, [0..2, 2..4, 4..6]);

        let mut plain = StyledText::new("abcdef");
        plain.apply(TextRange::full("abcdef"), colored(palette::css::BLACK));
        // An empty segment adds boundaries but must not split the run.
        plain.apply_bytes(3..3, colored(palette::css::RED)).unwrap();
        let runs: Vec<_> = plain.runs().map(|run| run.range).collect();
        assert_eq!(runs, [0..6]);
    }

    #[test]
    fn runs_without_segments_are_unstyled() {
        let text = StyledText::new("abc");
        let runs: Vec<_> = text.runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range, 0..3);
        assert_eq!(runs[0].attributes, None);

        assert_eq!(StyledText::new("").runs().count(), 0);
    }

    #[test]
    fn utf16_segments_for_native_backends() {
        let mut text = StyledText::new("😀 hi");
        text.apply_utf16(3..5, colored(palette::css::RED)).unwrap();
        let segment = &text.segments()[0];
        assert_eq!(segment.range.as_range(), 5..7);
        let utf16: Vec<_> = text.segments_utf16().map(|(range, _)| range).collect();
        assert_eq!(utf16, [3..5]);
    }

    #[test]
    fn rejects_invalid_ranges() {
        let mut text = StyledText::new("éclair");
        let err = text
            .apply_bytes(1..3, ResolvedAttributes::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = text
            .apply_utf16(0..9, ResolvedAttributes::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(text.segments_len(), 0);
    }
}
