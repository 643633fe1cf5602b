// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how jobs get their numbers.
//!
//! Everything bottoms out in one cosine similarity over token frequencies.
//! On top of it sit two weighting schemes that must not be merged: the
//! integer, truncate-per-field aggregator used for search-term relevance, and
//! the float, round-once formula used for personal relevancy.

mod core;
pub mod ranking;
pub mod relevance;
pub mod weighted;

pub use core::*;
