// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine similarity between two free-text documents.
//!
//! Each document becomes a term-frequency vector over its tokens (see
//! [`crate::tokens`]); the score is the cosine of the angle between the two
//! vectors, scaled to 0..=100 and rounded half-up.
//!
//! ```text
//! dot   = Σ freqA(t)·freqB(t)
//! normA = sqrt(Σ freqA(t)²)
//! normB = sqrt(Σ freqB(t)²)
//! score = round(dot / (normA·normB) · 100)
//! ```
//!
//! # Key Invariant: guard before compute
//!
//! A blank operand scores 0 and never reaches the division. A non-blank
//! operand always has at least one token, so its norm is at least 1 and the
//! denominator cannot be zero. Keep the blank check in front of the math.
//!
//! Frequencies are summed as integers, so `dot`, `normA²` and `normB²` are
//! exact regardless of token order. Only the last division and the square
//! roots touch floating point, which is what makes the score symmetric.

use std::collections::HashMap;

use crate::contracts::check_similarity_score;
use crate::utils::{is_blank, tokens};

/// Highest value any similarity score can take.
pub const MAX_SCORE: u32 = 100;

/// Token → frequency map for one document.
///
/// Build it once and score it against many other vectors when one side of
/// the comparison stays fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    freqs: HashMap<String, u32>,
}

impl TermVector {
    /// Tokenize a document. Blank text gives an empty vector.
    pub fn new(text: &str) -> Self {
        let mut freqs: HashMap<String, u32> = HashMap::new();
        for token in tokens(text) {
            *freqs.entry(token).or_insert(0) += 1;
        }
        Self { freqs }
    }

    /// No tokens at all (the document was blank).
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Number of distinct tokens.
    pub fn distinct_terms(&self) -> usize {
        self.freqs.len()
    }

    /// Frequency of a (lowercase) token, 0 when absent.
    pub fn frequency(&self, token: &str) -> u32 {
        self.freqs.get(token).copied().unwrap_or(0)
    }

    /// Σ freq², the squared norm.
    fn squared_norm(&self) -> u64 {
        self.freqs.values().map(|&f| u64::from(f) * u64::from(f)).sum()
    }

    /// Σ freqA·freqB. Tokens present on only one side contribute 0, so it
    /// suffices to walk the smaller map.
    fn dot(&self, other: &TermVector) -> u64 {
        let (small, large) = if self.freqs.len() <= other.freqs.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .freqs
            .iter()
            .map(|(token, &f)| u64::from(f) * u64::from(large.frequency(token)))
            .sum()
    }

    /// Cosine score against another vector, 0..=100.
    ///
    /// Returns 0 when either vector is empty.
    pub fn cosine(&self, other: &TermVector) -> u32 {
        // INVARIANT: GUARD_BEFORE_COMPUTE
        // Empty vectors have a zero norm. Bail before dividing.
        if self.is_empty() || other.is_empty() {
            return 0;
        }

        let dot = self.dot(other) as f64;
        let norm_a = (self.squared_norm() as f64).sqrt();
        let norm_b = (other.squared_norm() as f64).sqrt();

        // f64::round rounds half away from zero; every operand here is
        // non-negative, so that is half-up.
        let score = (dot / (norm_a * norm_b) * 100.0).round() as u32;

        // sqrt(n)·sqrt(n) can land a hair under n, nudging a perfect match to
        // 100.000…01 before rounding. Rounding already absorbs it; the clamp
        // keeps the range contract airtight.
        let score = score.min(MAX_SCORE);
        check_similarity_score(score);
        score
    }
}

/// Cosine similarity of two documents, 0..=100.
///
/// Either operand blank (empty or whitespace only) scores 0.
///
/// ```
/// use jobsift::cosine_score;
///
/// assert_eq!(cosine_score("golang backend engineer", "backend engineer wanted"), 67);
/// assert_eq!(cosine_score("", "anything"), 0);
/// ```
pub fn cosine_score(text_a: &str, text_b: &str) -> u32 {
    if is_blank(text_a) || is_blank(text_b) {
        return 0;
    }
    TermVector::new(text_a).cosine(&TermVector::new(text_b))
}
