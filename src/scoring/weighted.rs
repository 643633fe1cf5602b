// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-field scores with integer percentage weights.
//!
//! Each field is cosine-scored against the match term, multiplied by its
//! weight and divided by 100 **per field**, with integer truncation, before
//! the contributions are summed:
//!
//! ```text
//! score = Σ (cosine(field_i, term) · w_i / 100)      // each term truncated
//! ```
//!
//! Truncating each term loses up to one point per field, so a four-field set
//! can come out as much as three points below the exact weighted mean. That
//! loss is part of the scoring behaviour and is pinned by tests; do not fold
//! it into a single division at the end.
//!
//! Personal relevancy (see [`super::relevance`]) uses float weights and
//! rounds once instead. The two policies are deliberately separate.

use tracing::warn;

use super::core::TermVector;
use crate::contracts::{check_similarity_score, check_weights_sum};
use crate::error::{Result, SiftError};

/// Weights in a field set must add up to exactly this.
pub const WEIGHT_TOTAL: u32 = 100;

/// An ordered list of `(document, weight)` pairs whose weights sum to 100.
///
/// The sum is checked once, in [`FieldWeights::new`]; scoring a constructed
/// set cannot fail. Duplicate documents are kept as separate entries, each
/// with its own weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWeights<'a> {
    fields: Vec<(&'a str, u32)>,
}

impl<'a> FieldWeights<'a> {
    /// Validate a field set. Fails with [`SiftError::InvalidWeights`] unless
    /// the weights sum to exactly 100; nothing is normalized.
    pub fn new(fields: Vec<(&'a str, u32)>) -> Result<Self> {
        let sum = weight_sum(&fields);
        if sum != u64::from(WEIGHT_TOTAL) {
            warn!(sum, fields = fields.len(), "rejecting field weights");
            return Err(SiftError::InvalidWeights {
                sum: sum.min(u64::from(u32::MAX)) as u32,
            });
        }
        Ok(Self { fields })
    }

    /// Construct from weights already known to sum to 100 (compile-time tables).
    pub(crate) fn from_trusted(fields: Vec<(&'a str, u32)>) -> Self {
        check_weights_sum(weight_sum(&fields));
        Self { fields }
    }

    pub fn fields(&self) -> &[(&'a str, u32)] {
        &self.fields
    }

    /// Score every field against `term` and sum the truncated contributions.
    pub fn score(&self, term: &str) -> u32 {
        let term = TermVector::new(term);
        self.score_vector(&term)
    }

    /// Same as [`score`](Self::score) with a pre-tokenized term.
    pub fn score_vector(&self, term: &TermVector) -> u32 {
        let total = self
            .fields
            .iter()
            .map(|&(field, weight)| truncated_contribution(TermVector::new(field).cosine(term), weight))
            .sum();
        check_similarity_score(total);
        total
    }
}

fn weight_sum(fields: &[(&str, u32)]) -> u64 {
    fields.iter().map(|&(_, w)| u64::from(w)).sum()
}

/// One field's share of the total: `score · weight / 100`, truncated.
#[inline]
pub fn truncated_contribution(score: u32, weight: u32) -> u32 {
    score * weight / WEIGHT_TOTAL
}

/// Validate `fields` and score them against `match_term` in one call.
///
/// ```
/// use jobsift::weighted_score;
///
/// let score = weighted_score(&[("rust engineer", 60), ("backend", 40)], "rust engineer").unwrap();
/// assert_eq!(score, 60);
///
/// assert!(weighted_score(&[("rust", 99)], "rust").is_err());
/// ```
pub fn weighted_score(fields: &[(&str, u32)], match_term: &str) -> Result<u32> {
    Ok(FieldWeights::new(fields.to_vec())?.score(match_term))
}
