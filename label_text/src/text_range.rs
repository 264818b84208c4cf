// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{BoundaryInfo, Endpoint, Error, IndexUnit};

/// A validated byte range into a UTF-8 text buffer.
///
/// Carries the invariants segment application relies on:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 character boundaries
///
/// A `TextRange` does not record which text it was validated against. Only reuse it with the
/// same text content.
///
/// ## Example
///
/// ```
/// use label_text::TextRange;
///
/// let text = "naïve café";
/// let range = TextRange::new(text, 7..12).unwrap();
/// assert_eq!(&text[range.as_range()], "café");
/// assert_eq!(range.to_utf16(text), 6..10);
/// assert_eq!(TextRange::from_utf16(text, 6..10).unwrap(), range);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Returns the range covering all of `text`.
    #[must_use]
    #[inline]
    pub fn full(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants, such as the
    /// results of a substring search.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Validates a range of UTF-16 code unit offsets and converts it to bytes.
    ///
    /// Offsets that fall between the two halves of a surrogate pair are rejected with
    /// [`ErrorKind::NotOnCharBoundary`](crate::ErrorKind::NotOnCharBoundary).
    pub fn from_utf16(text: &str, range: Range<usize>) -> Result<Self, Error> {
        let len = text.encode_utf16().count();
        if range.start > range.end {
            return Err(Error::invalid_range(
                IndexUnit::Utf16,
                range.start,
                range.end,
                len,
            ));
        }
        if range.end > len {
            return Err(Error::invalid_bounds(
                IndexUnit::Utf16,
                range.start,
                range.end,
                len,
            ));
        }
        let locate = |which: Endpoint, index: usize| match locate_utf16(text, index) {
            Utf16Position::Boundary(byte) => Ok(byte),
            Utf16Position::Inside {
                char_start,
                char_end,
            } => Err(Error::not_on_char_boundary(
                IndexUnit::Utf16,
                range.start,
                range.end,
                len,
                BoundaryInfo {
                    which,
                    index,
                    char_start,
                    char_end,
                },
            )),
            Utf16Position::OutOfBounds => Err(Error::invalid_bounds(
                IndexUnit::Utf16,
                range.start,
                range.end,
                len,
            )),
        };
        let start = locate(Endpoint::Start, range.start)?;
        let end = locate(Endpoint::End, range.end)?;
        Ok(Self { start, end })
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no text.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the byte `index` lies inside this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Converts this range to UTF-16 code unit offsets within `text`.
    ///
    /// # Panics
    ///
    /// Panics if this range was not validated against `text`.
    #[must_use]
    pub fn to_utf16(self, text: &str) -> Range<usize> {
        let start = text[..self.start].encode_utf16().count();
        let end = start + text[self.start..self.end].encode_utf16().count();
        start..end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[inline]
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(
            IndexUnit::Utf8,
            range.start,
            range.end,
            len,
        ));
    }
    if range.start > len || range.end > len {
        return Err(Error::invalid_bounds(
            IndexUnit::Utf8,
            range.start,
            range.end,
            len,
        ));
    }
    for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(index) {
            let (char_start, char_end) = enclosing_char_span(text, index);
            return Err(Error::not_on_char_boundary(
                IndexUnit::Utf8,
                range.start,
                range.end,
                len,
                BoundaryInfo {
                    which,
                    index,
                    char_start,
                    char_end,
                },
            ));
        }
    }
    Ok(())
}

/// Byte span of the character containing `index`, which must be in bounds.
fn enclosing_char_span(text: &str, index: usize) -> (usize, usize) {
    let mut start = index;
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = index;
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    (start, end)
}

enum Utf16Position {
    Boundary(usize),
    Inside { char_start: usize, char_end: usize },
    OutOfBounds,
}

fn locate_utf16(text: &str, offset: usize) -> Utf16Position {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units == offset {
            return Utf16Position::Boundary(byte);
        }
        let next = units + ch.len_utf16();
        if offset < next {
            return Utf16Position::Inside {
                char_start: units,
                char_end: next,
            };
        }
        units = next;
    }
    if units == offset {
        Utf16Position::Boundary(text.len())
    } else {
        Utf16Position::OutOfBounds
    }
}
