// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User-directed filters over the working set.
//!
//! | Kind              | Keeps jobs where              | Bound range      |
//! |-------------------|-------------------------------|------------------|
//! | `MinRelevancy`    | personal relevancy ≥ N        | 0..=100          |
//! | `MaxRelevancy`    | personal relevancy ≤ N        | 0..=100          |
//! | `MinCompensation` | compensation ≥ N              | 0..=1,000,000    |
//! | `MaxCompensation` | compensation ≤ N              | 0..=1,000,000    |
//!
//! Both comparisons are inclusive. Filters are pure predicates and compose by
//! repeated application (logical AND); relative order of survivors is kept.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ScoredJob;
use crate::error::ValidationError;
use crate::input::parse_bounded;

/// Upper bound accepted for a relevancy filter.
pub const MAX_RELEVANCY_BOUND: u32 = 100;

/// Upper bound accepted for a compensation filter.
pub const MAX_COMPENSATION_BOUND: u32 = 1_000_000;

/// Which filter to apply, before a bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    MinRelevancy,
    MaxRelevancy,
    MinCompensation,
    MaxCompensation,
}

impl FilterKind {
    /// All kinds, in menu order.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::MinRelevancy,
        FilterKind::MaxRelevancy,
        FilterKind::MinCompensation,
        FilterKind::MaxCompensation,
    ];

    /// Inclusive range a bound for this kind must fall in.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            FilterKind::MinRelevancy | FilterKind::MaxRelevancy => (0, MAX_RELEVANCY_BOUND),
            FilterKind::MinCompensation | FilterKind::MaxCompensation => (0, MAX_COMPENSATION_BOUND),
        }
    }

    /// Field name used in validation messages.
    pub fn field(self) -> &'static str {
        match self {
            FilterKind::MinRelevancy | FilterKind::MaxRelevancy => "relevancy",
            FilterKind::MinCompensation | FilterKind::MaxCompensation => "compensation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::MinRelevancy => "minimum personal relevancy",
            FilterKind::MaxRelevancy => "maximum personal relevancy",
            FilterKind::MinCompensation => "minimum compensation",
            FilterKind::MaxCompensation => "maximum compensation",
        }
    }

    /// Build a filter of this kind from a numeric bound.
    pub fn with_bound(self, value: u32) -> Result<UserFilter, ValidationError> {
        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field: self.field(),
                value: u64::from(value),
                min,
                max,
            });
        }
        Ok(match self {
            FilterKind::MinRelevancy => UserFilter::MinRelevancy(value),
            FilterKind::MaxRelevancy => UserFilter::MaxRelevancy(value),
            FilterKind::MinCompensation => UserFilter::MinCompensation(value),
            FilterKind::MaxCompensation => UserFilter::MaxCompensation(value),
        })
    }

    /// Build a filter of this kind from a raw user token.
    pub fn parse_bound(self, raw: &str) -> Result<UserFilter, ValidationError> {
        let (min, max) = self.bounds();
        let value = parse_bounded(raw, self.field(), min, max)?;
        self.with_bound(value)
    }
}

/// A filter with a validated bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "bound", rename_all = "kebab-case")]
pub enum UserFilter {
    MinRelevancy(u32),
    MaxRelevancy(u32),
    MinCompensation(u32),
    MaxCompensation(u32),
}

impl UserFilter {
    pub fn kind(self) -> FilterKind {
        match self {
            UserFilter::MinRelevancy(_) => FilterKind::MinRelevancy,
            UserFilter::MaxRelevancy(_) => FilterKind::MaxRelevancy,
            UserFilter::MinCompensation(_) => FilterKind::MinCompensation,
            UserFilter::MaxCompensation(_) => FilterKind::MaxCompensation,
        }
    }

    pub fn bound(self) -> u32 {
        match self {
            UserFilter::MinRelevancy(n)
            | UserFilter::MaxRelevancy(n)
            | UserFilter::MinCompensation(n)
            | UserFilter::MaxCompensation(n) => n,
        }
    }

    /// Whether `job` survives this filter.
    #[inline]
    pub fn matches(self, job: &ScoredJob) -> bool {
        match self {
            UserFilter::MinRelevancy(n) => job.personal_relevancy >= n,
            UserFilter::MaxRelevancy(n) => job.personal_relevancy <= n,
            UserFilter::MinCompensation(n) => job.job.compensation >= n,
            UserFilter::MaxCompensation(n) => job.job.compensation <= n,
        }
    }
}

/// Keep only the jobs that satisfy `filter`, preserving their order.
pub fn apply_filter(mut jobs: Vec<ScoredJob>, filter: UserFilter) -> Vec<ScoredJob> {
    let before = jobs.len();
    jobs.retain(|job| filter.matches(job));
    debug!(?filter, before, after = jobs.len(), "user filter");
    jobs
}
