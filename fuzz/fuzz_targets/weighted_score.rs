// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the weighted field aggregator.
//!
//! Weight sets that do not sum to 100 must be rejected with the sum they
//! carried; sets that do must score within 0..=100.

#![no_main]

use arbitrary::Arbitrary;
use jobsift::{weighted_score, SiftError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WeightedInput {
    fields: Vec<(String, u8)>,
    term: String,
}

fuzz_target!(|input: WeightedInput| {
    let fields: Vec<(&str, u32)> = input
        .fields
        .iter()
        .take(8)
        .map(|(text, weight)| (text.as_str(), u32::from(*weight)))
        .collect();
    let sum: u32 = fields.iter().map(|&(_, w)| w).sum();

    match weighted_score(&fields, &input.term) {
        Ok(score) => {
            assert_eq!(sum, 100, "accepted weights summing to {}", sum);
            assert!(score <= 100, "aggregated score {} out of range", score);
        }
        Err(SiftError::InvalidWeights { sum: reported }) => {
            assert_ne!(sum, 100, "rejected weights that sum to 100");
            assert_eq!(reported, sum, "reported sum differs from actual");
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
