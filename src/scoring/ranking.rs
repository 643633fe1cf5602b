// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how the working set gets ordered before paging.
//!
//! Every order is built the same way: a stable ascending sort on one key,
//! optionally followed by reversing the whole list. Reversal is what turns
//! "ascending" into "descending", and it also reverses the order of ties:
//!
//! ```text
//! input      [a:50, b:90, c:50]
//! ascending  [a:50, c:50, b:90]     stable, a before c
//! reversed   [b:90, c:50, a:50]     c now before a
//! ```
//!
//! A plain descending sort would keep `a` before `c`. Callers (and tests)
//! depend on the reversed tie order, so the descending orders are
//! implemented as ascending + reverse rather than with a flipped comparator.

use serde::{Deserialize, Serialize};

use crate::search::ScoredJob;

/// How to order the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// No user choice: search relevance, highest first (ascending + reverse).
    #[default]
    SearchRelevance,
    /// Personal relevancy, highest first (ascending + reverse).
    PersonalRelevancyDesc,
    /// Compensation, lowest first.
    CompensationAsc,
    /// Compensation, highest first (ascending + reverse).
    CompensationDesc,
}

impl SortOrder {
    /// Orders a user can pick from the sort menu, in menu order.
    pub const USER_CHOICES: [SortOrder; 3] = [
        SortOrder::PersonalRelevancyDesc,
        SortOrder::CompensationAsc,
        SortOrder::CompensationDesc,
    ];

    /// The ascending key this order sorts on.
    pub fn key(self, job: &ScoredJob) -> u32 {
        match self {
            SortOrder::SearchRelevance => job.search_score,
            SortOrder::PersonalRelevancyDesc => job.personal_relevancy,
            SortOrder::CompensationAsc | SortOrder::CompensationDesc => job.job.compensation,
        }
    }

    /// Whether the ascending sort is followed by a full reversal.
    pub fn reverses(self) -> bool {
        !matches!(self, SortOrder::CompensationAsc)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::SearchRelevance => "search relevance",
            SortOrder::PersonalRelevancyDesc => "personal relevancy, descending",
            SortOrder::CompensationAsc => "compensation, ascending",
            SortOrder::CompensationDesc => "compensation, descending",
        }
    }
}

/// Sort the working set in place.
///
/// Keys are read from the precomputed scores on each [`ScoredJob`]; nothing
/// is re-scored during the sort.
pub fn sort_jobs(jobs: &mut [ScoredJob], order: SortOrder) {
    jobs.sort_by_key(|job| order.key(job));
    if order.reverses() {
        jobs.reverse();
    }
}
