//! Runtime contracts for the ranking invariants.
//!
//! Debug-mode assertions that verify the properties the rest of the crate
//! relies on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Name the invariant they protect in the panic message
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                         |
//! |-------------------------------|---------------------------------------------------|
//! | `check_similarity_score`      | cosine and aggregated scores stay in 0..=100      |
//! | `check_weights_sum`           | trusted field weight tables sum to 100            |
//! | `check_default_filter_band`   | retained jobs are advertised and at/above the band |
//! | `check_page_window`           | a page slice lies inside the list and holds ≤ 10  |
//!
//! # Usage
//!
//! ```ignore
//! use jobsift::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_similarity_score(score);
//!
//! // In release builds, this is a no-op
//! ```

use crate::scoring::relevance::{
    CATEGORIES_WEIGHT, COMPENSATION_WEIGHT, DESCRIPTION_WEIGHT, JOB_LEVEL_WEIGHT,
    JOB_NAME_WEIGHT, KEYWORDS_WEIGHT, RESUME_WEIGHT, SEEKER_KEYWORDS_WEIGHT, TITLE_WEIGHT,
};
use crate::scoring::weighted::WEIGHT_TOTAL;
use crate::search::pages::PAGE_SIZE;
use crate::search::ScoredJob;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the fixed weight tables are well-formed.
/// This is evaluated at compile time - if it fails, the crate won't build.
const _: () = {
    // INVARIANT: search weights sum to exactly 100
    assert!(
        TITLE_WEIGHT + KEYWORDS_WEIGHT + CATEGORIES_WEIGHT + DESCRIPTION_WEIGHT == WEIGHT_TOTAL
    );

    // INVARIANT: personal relevancy weights sum to 1.0
    const SUM: f64 = RESUME_WEIGHT
        + SEEKER_KEYWORDS_WEIGHT
        + JOB_NAME_WEIGHT
        + JOB_LEVEL_WEIGHT
        + COMPENSATION_WEIGHT;
    assert!(SUM > 0.999_999 && SUM < 1.000_001);

    assert!(PAGE_SIZE > 0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a cosine-derived score is within 0..=100.
///
/// # Panics (debug builds only)
/// Panics if `score > 100`.
#[inline]
pub fn check_similarity_score(score: u32) {
    debug_assert!(
        score <= 100,
        "Contract violation: similarity score {} outside 0..=100",
        score
    );
}

/// Check that a trusted weight table sums to 100.
///
/// User-supplied weight sets go through `FieldWeights::new`, which returns an
/// error instead; this guards the internal tables.
#[inline]
pub fn check_weights_sum(sum: u64) {
    debug_assert!(
        sum == u64::from(WEIGHT_TOTAL),
        "Contract violation: trusted field weights sum to {} (expected {})",
        sum,
        WEIGHT_TOTAL
    );
}

// ============================================================================
// PIPELINE CONTRACTS
// ============================================================================

/// Check the default filter's output: advertised only, every score ≥ band.
///
/// # Panics (debug builds only)
/// Panics on the first retained job that violates either condition.
#[inline]
pub fn check_default_filter_band(retained: &[ScoredJob], band: u32) {
    for (i, job) in retained.iter().enumerate() {
        debug_assert!(
            job.job.advertised,
            "Contract violation: default filter kept unadvertised job {} at position {}",
            job.job.id,
            i
        );
        debug_assert!(
            job.search_score >= band,
            "Contract violation: default filter kept job {} scoring {} below band {}",
            job.job.id,
            job.search_score,
            band
        );
    }
}

/// Check that a page window `[start, end)` is inside a list of `len` items.
///
/// # Panics (debug builds only)
/// Panics if the window is inverted, overruns the list, or exceeds a page.
#[inline]
pub fn check_page_window(start: usize, end: usize, len: usize) {
    debug_assert!(
        start <= end && end <= len,
        "Contract violation: page window [{}, {}) outside list of {}",
        start,
        end,
        len
    );
    debug_assert!(
        end - start <= PAGE_SIZE,
        "Contract violation: page window holds {} items (max {})",
        end.saturating_sub(start),
        PAGE_SIZE
    );
}
