// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cosine similarity.
//!
//! Arbitrary text on both sides must never panic, and the score must stay in
//! 0..=100, be symmetric and ignore case.

#![no_main]

use arbitrary::Arbitrary;
use jobsift::{cosine_score, is_blank};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CosineInput {
    a: String,
    b: String,
}

fuzz_target!(|input: CosineInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(500).collect();
    let b: String = input.b.chars().take(500).collect();

    let score = cosine_score(&a, &b);

    // INVARIANT 1: bounded
    assert!(score <= 100, "score {} out of range for a={:?} b={:?}", score, a, b);

    // INVARIANT 2: symmetric
    assert_eq!(score, cosine_score(&b, &a), "asymmetric for a={:?} b={:?}", a, b);

    // INVARIANT 3: blank input scores zero
    if is_blank(&a) || is_blank(&b) {
        assert_eq!(score, 0, "blank input scored {} for a={:?} b={:?}", score, a, b);
    }

    // INVARIANT 4: non-blank text matches itself exactly
    if !is_blank(&a) {
        assert_eq!(cosine_score(&a, &a), 100, "self-match below 100 for a={:?}", a);
    }
});
