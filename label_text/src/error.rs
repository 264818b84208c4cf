// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a caller-provided range cannot address a text buffer.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range, the text length, the unit
/// the offsets were expressed in and, for boundary failures, the enclosing character span.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    unit: IndexUnit,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The unit `start`, `end` and `len` are expressed in.
    pub fn unit(&self) -> IndexUnit {
        self.unit
    }

    /// The start offset of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset (exclusive) of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length of the text, in [`Error::unit`]s, at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn invalid_range(unit: IndexUnit, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            unit,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(unit: IndexUnit, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            unit,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary(
        unit: IndexUnit,
        start: usize,
        end: usize,
        len: usize,
        boundary: BoundaryInfo,
    ) -> Self {
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            unit,
            start,
            end,
            len,
            boundary: Some(boundary),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let unit = self.unit.name();
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "{unit} range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => write!(
                f,
                "invalid {unit} range {}..{}: start > end",
                self.start, self.end
            ),
            ErrorKind::NotOnCharBoundary => match self.boundary {
                Some(b) => {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "{unit} range {}..{}: {which} index {} not on a character boundary (char {}..{})",
                        self.start, self.end, b.index, b.char_start, b.char_end
                    )
                }
                None => write!(
                    f,
                    "{unit} range {}..{} not on a character boundary",
                    self.start, self.end
                ),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` fell inside a character: inside a UTF-8 sequence for byte
    /// offsets, or between the halves of a surrogate pair for UTF-16 offsets.
    NotOnCharBoundary,
}

/// The unit a range was expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexUnit {
    /// UTF-8 byte offsets, the native unit of this crate.
    Utf8,

    /// UTF-16 code unit offsets, as used by many platform text systems.
    Utf16,
}

impl IndexUnit {
    fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "byte",
            Self::Utf16 => "UTF-16",
        }
    }
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnCharBoundary`].
/// All offsets are in the error's [`IndexUnit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending index.
    pub index: usize,

    /// The start of the enclosing character.
    pub char_start: usize,

    /// The end (exclusive) of the enclosing character.
    pub char_end: usize,
}
