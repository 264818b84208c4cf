// Copyright 2026 the Label Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `label_text`.
//!
//! - The `util` module contains shared helpers needed by different test modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, which makes shared helpers easy to reach.
//! - Put new tests into the module for their topic (compose, label, matcher, metrics). Tests
//!   for bugs should go into `issues.rs`.
//! - Start test names with their topic, e.g. `metrics_size_within_line_budget`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::float_cmp, reason = "measurements here are exact by construction")]

mod metrics;
mod util;
