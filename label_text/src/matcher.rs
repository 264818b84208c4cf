// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Literal substring search.
//!
//! Matching is exact and case-sensitive. The needle is never interpreted as a pattern, so
//! characters such as `.` or `*` match only themselves. Occurrences are reported left to right
//! and never overlap: after a match, the search resumes at its end.
//!
//! An empty needle matches nothing.
//!
//! Matches always start and end on `char` boundaries but may split a grapheme cluster: `e`
//! matches the first half of `e\u{301}`.

use alloc::vec::Vec;
use core::str::MatchIndices;

use crate::TextRange;

/// Returns an iterator over every occurrence of `needle` in `haystack`.
///
/// ```
/// use label_text::matcher::matches;
///
/// let ranges: Vec<_> = matches("a.b a.b", "a.b").map(|r| r.as_range()).collect();
/// assert_eq!(ranges, [0..3, 4..7]);
/// ```
#[inline]
pub fn matches<'h, 'n>(haystack: &'h str, needle: &'n str) -> Matches<'h, 'n> {
    Matches {
        inner: (!needle.is_empty()).then(|| haystack.match_indices(needle)),
    }
}

/// Returns all non-overlapping occurrences of `needle` in `haystack`, in order.
pub fn find_all(haystack: &str, needle: &str) -> Vec<TextRange> {
    matches(haystack, needle).collect()
}

/// Returns the first occurrence of `needle` in `haystack`.
pub fn find_first(haystack: &str, needle: &str) -> Option<TextRange> {
    matches(haystack, needle).next()
}

/// Iterator over the occurrences of a needle, created by [`matches`].
#[derive(Clone, Debug)]
pub struct Matches<'h, 'n> {
    inner: Option<MatchIndices<'h, &'n str>>,
}

impl Iterator for Matches<'_, '_> {
    type Item = TextRange;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, matched) = self.inner.as_mut()?.next()?;
        // Matches begin and end on character boundaries of the haystack.
        Some(TextRange::new_unchecked(start, start + matched.len()))
    }
}

impl core::iter::FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::{find_all, find_first};
    use alloc::vec::Vec;
    use core::ops::Range;

    fn ranges(haystack: &str, needle: &str) -> Vec<Range<usize>> {
        find_all(haystack, needle)
            .into_iter()
            .map(|r| r.as_range())
            .collect()
    }

    #[test]
    fn finds_every_occurrence_in_order() {
        assert_eq!(ranges("one two one two one", "one"), [0..3, 8..11, 16..19]);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(ranges("aaaa", "aa"), [0..2, 2..4]);
        assert_eq!(ranges("aaa", "aa"), [0..2]);
    }

    #[test]
    fn empty_needle_or_no_match_is_empty() {
        assert!(find_all("abc", "").is_empty());
        assert!(find_all("", "").is_empty());
        assert!(find_all("abc", "d").is_empty());
        assert_eq!(find_first("abc", ""), None);
    }

    #[test]
    fn pattern_characters_are_literal() {
        assert_eq!(ranges("price: $5.00 (approx)", "$5.00"), [7..12]);
        assert_eq!(ranges("a+b ab", "a+b"), [0..3]);
        assert!(find_all("abc", ".").is_empty());
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(ranges("Hello hello", "hello"), [6..11]);
    }

    #[test]
    fn non_ascii_ranges_are_byte_offsets() {
        let text = "héllo wörld wörld";
        let found = find_all(text, "wörld");
        assert_eq!(found.len(), 2);
        for range in &found {
            assert_eq!(&text[range.as_range()], "wörld");
        }
        assert_eq!(found[0].to_utf16(text), 6..11);
    }

    #[test]
    fn find_first_returns_leftmost() {
        let first = find_first("xyxy", "y").unwrap();
        assert_eq!(first.as_range(), 1..2);
    }

    #[test]
    fn combining_marks_are_not_joined() {
        let text = "cafe\u{301} e";
        let ranges: Vec<_> = find_all(text, "e").iter().map(|r| r.as_range()).collect();
        assert_eq!(ranges, [3..4, 7..8]);
    }
}
