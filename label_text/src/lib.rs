// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label Text turns a small set of declarative label style properties into layered,
//! range-addressed styled text for an external text renderer.
//!
//! - [`style`] defines the [`StyleSpec`] a label is configured with.
//! - [`resolve`] turns a spec into canonical [`ResolvedAttributes`], including the baseline
//!   offset used to fake vertical anchoring and the line height pin.
//! - [`matcher`] finds literal substrings.
//! - [`compose`] layers highlight overrides on top of the base attributes to build a
//!   [`StyledText`].
//! - [`metrics`] sizes styled text through a [`TextMeasurer`], clamping the measurement box to
//!   the label's line budget.
//! - [`Label`] ties these together the way a host view would hold them.
//!
//! Glyph layout, font loading and drawing are not done here. They belong to the
//! [`TextMeasurer`] and [`StyledTextSink`] collaborators supplied by the host.
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards to `peniko/std` and `log/std`.
//! - `libm`: Forwards to `peniko/libm` for `no_std` targets.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and lie on character boundaries. Backends
//! that address text in UTF-16 code units can convert with [`TextRange::to_utf16`] or iterate
//! [`StyledText::segments_utf16`].
//!
//! ## Example
//!
//! ```
//! use label_text::peniko::color::palette;
//! use label_text::{AttributeOverrides, HighlightOverride, StyleSpec, VerticalAlignment};
//!
//! let spec = StyleSpec::new()
//!     .color(palette::css::BLACK)
//!     .line_height(20.0)
//!     .vertical_alignment(VerticalAlignment::Top);
//!
//! let overrides = [HighlightOverride::new(
//!     "world",
//!     AttributeOverrides::new().color(palette::css::RED),
//! )];
//! let styled = label_text::compose("Hello world", &spec, &overrides);
//!
//! assert_eq!(styled.segments_len(), 2);
//! let world = styled.attributes_at(6).unwrap();
//! assert_eq!(world.color, Some(palette::css::RED));
//! assert_eq!(world.baseline_offset, Some(10.0));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("label_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko;

pub mod compose;
pub mod matcher;
pub mod metrics;
pub mod resolve;
pub mod style;

mod error;
mod label;
mod styled_text;
mod text_range;

#[cfg(test)]
mod tests;

pub use crate::compose::{compose, Composer, HighlightOverride, MatchMode, MissingTargetPolicy};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind, IndexUnit};
pub use crate::label::{Label, StyledTextSink};
pub use crate::matcher::{find_all, find_first, matches, Matches};
pub use crate::metrics::{MetricsEstimator, TextMeasurer};
pub use crate::resolve::{
    resolve, AttributeOverrides, ParagraphAttributes, ResolvedAttributes, LINE_HEIGHT_EPSILON,
};
pub use crate::style::{Alignment, Font, LineBreakMode, StyleSpec, VerticalAlignment};
pub use crate::styled_text::{Run, Runs, Segment, StyledText};
pub use crate::text_range::TextRange;
