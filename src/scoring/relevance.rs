// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Job relevance: how well a job matches a search term, and how well it
//! matches a particular seeker.
//!
//! These are two different formulas on purpose.
//!
//! | Score                | Built from                         | Rounding                    |
//! |----------------------|------------------------------------|-----------------------------|
//! | `job_search_score`   | 4 job fields vs. the term, weighted | integer, truncated per field |
//! | `personal_relevancy` | 4 seeker texts vs. the job string + compensation fit | float weights, one final round |
//!
//! # Compensation fit
//!
//! ```text
//! 5000 < e ≤ 1_000_000 and job > 0:  |e / job − 1| + 1     (integer division)
//! otherwise:                          100
//! ```
//!
//! A job compensation of 0 takes the `100` branch instead of dividing.
//! Note that the fit is *lower* for closer matches (an exact match gives 1)
//! and that it is not capped at 100: a seeker expecting 900,000 against a job
//! paying 1,000 gets a fit of 900. Personal relevancy is therefore not bounded
//! to 0..=100 the way the cosine-based scores are.

use serde::Serialize;
use tracing::trace;

use super::core::TermVector;
use super::weighted::FieldWeights;
use crate::types::{JobSnapshot, SeekerProfile};

// =============================================================================
// SEARCH-TERM WEIGHTS
// =============================================================================
// Must sum to 100 (checked at compile time in contracts.rs).

/// Weight of the job title in the search score.
pub const TITLE_WEIGHT: u32 = 50;

/// Weight of the space-joined keyword list.
pub const KEYWORDS_WEIGHT: u32 = 15;

/// Weight of the space-joined category list.
pub const CATEGORIES_WEIGHT: u32 = 15;

/// Weight of the free-text description.
pub const DESCRIPTION_WEIGHT: u32 = 20;

// =============================================================================
// PERSONAL RELEVANCY WEIGHTS
// =============================================================================

pub const RESUME_WEIGHT: f64 = 0.20;
pub const SEEKER_KEYWORDS_WEIGHT: f64 = 0.30;
pub const JOB_NAME_WEIGHT: f64 = 0.05;
pub const JOB_LEVEL_WEIGHT: f64 = 0.05;
pub const COMPENSATION_WEIGHT: f64 = 0.40;

/// Expected compensation must be strictly above this to count as stated.
pub const MIN_EXPECTED_COMPENSATION: u32 = 5_000;

/// Expected compensation must be at most this to count as stated.
pub const MAX_EXPECTED_COMPENSATION: u32 = 1_000_000;

/// Compensation fit when there is nothing to compare: no stated expectation,
/// or a job compensation of 0.
pub const COMPENSATION_FALLBACK_SCORE: u32 = 100;

/// Relevance of a job to a raw search term, 0..=100.
///
/// Title (50), keywords (15), categories (15) and description (20) are each
/// cosine-scored against the term and combined with per-field truncation.
pub fn job_search_score(job: &JobSnapshot, term: &str) -> u32 {
    job_search_score_vector(job, &TermVector::new(term))
}

/// [`job_search_score`] with the term tokenized once by the caller.
pub fn job_search_score_vector(job: &JobSnapshot, term: &TermVector) -> u32 {
    let keywords = job.keywords_joined(" ");
    let categories = job.categories_joined(" ");
    let weights = FieldWeights::from_trusted(vec![
        (job.title.as_str(), TITLE_WEIGHT),
        (keywords.as_str(), KEYWORDS_WEIGHT),
        (categories.as_str(), CATEGORIES_WEIGHT),
        (job.description.as_str(), DESCRIPTION_WEIGHT),
    ]);
    weights.score_vector(term)
}

/// The five parts of a personal relevancy score, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelevancyBreakdown {
    pub resume: u32,
    pub keywords: u32,
    pub job_name: u32,
    pub job_level: u32,
    pub compensation_fit: u32,
    pub total: u32,
}

/// Compensation fit for an expected and an offered compensation.
///
/// ```
/// use jobsift::compensation_fit;
///
/// assert_eq!(compensation_fit(60_000, 50_000), 1);   // 60000/50000 = 1 → |1−1|+1
/// assert_eq!(compensation_fit(150_000, 50_000), 3);  // 3 → |3−1|+1
/// assert_eq!(compensation_fit(20_000, 50_000), 2);   // 0 → |0−1|+1
/// assert_eq!(compensation_fit(4_000, 50_000), 100);  // no stated expectation
/// assert_eq!(compensation_fit(60_000, 0), 100);      // nothing to divide by
/// ```
pub fn compensation_fit(expected: u32, job_compensation: u32) -> u32 {
    let stated = expected > MIN_EXPECTED_COMPENSATION && expected <= MAX_EXPECTED_COMPENSATION;
    if !stated || job_compensation == 0 {
        return COMPENSATION_FALLBACK_SCORE;
    }
    (expected / job_compensation).abs_diff(1) + 1
}

/// Personal relevancy of a job to a seeker, with its components.
pub fn relevancy_breakdown(job: &JobSnapshot, seeker: &SeekerProfile) -> RelevancyBreakdown {
    let job_vector = TermVector::new(&job.job_string());

    let resume = TermVector::new(&seeker.resume).cosine(&job_vector);
    let keywords = TermVector::new(&seeker.keywords_joined(" ")).cosine(&job_vector);
    let job_name = TermVector::new(&seeker.current_job_name).cosine(&job_vector);
    let job_level = TermVector::new(&seeker.current_job_level).cosine(&job_vector);
    let compensation_fit = compensation_fit(seeker.expected_compensation, job.compensation);

    let weighted = f64::from(resume) * RESUME_WEIGHT
        + f64::from(keywords) * SEEKER_KEYWORDS_WEIGHT
        + f64::from(job_name) * JOB_NAME_WEIGHT
        + f64::from(job_level) * JOB_LEVEL_WEIGHT
        + f64::from(compensation_fit) * COMPENSATION_WEIGHT;
    let total = weighted.round() as u32;

    trace!(
        job = job.id,
        resume,
        keywords,
        job_name,
        job_level,
        compensation_fit,
        total,
        "personal relevancy"
    );

    RelevancyBreakdown {
        resume,
        keywords,
        job_name,
        job_level,
        compensation_fit,
        total,
    }
}

/// Personal relevancy of a job to a seeker.
///
/// Float weights, a single round at the end. Not clamped to 100; see the
/// module docs on compensation fit.
pub fn personal_relevancy(job: &JobSnapshot, seeker: &SeekerProfile) -> u32 {
    relevancy_breakdown(job, seeker).total
}
