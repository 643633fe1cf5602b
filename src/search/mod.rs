// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: from a raw corpus to a page of ranked jobs.
//!
//! ```text
//! corpus ──► default_filter ──► apply_filter × ≤4 ──► sort_jobs ──► paginate
//!              (score, band,      (AND-composed          (ascending      (10 per
//!               advertised,        bound predicates)      + reverse)      page)
//!               reverse)
//! ```
//!
//! Each stage is a plain function over owned or borrowed jobs, so the whole
//! flow can run without a session (the `rank` subcommand, benchmarks). The
//! [`session::SearchSession`] state machine strings the same functions
//! together for an interactive user and adds retry bookkeeping.
//!
//! Scores are computed exactly once, in [`default_filter`], and carried on
//! each [`ScoredJob`]. Later stages only read them.
//!
//! # Key Invariant
//!
//! Every job that leaves [`default_filter`] is advertised and scores at or
//! above `(max − min) / 2`, where max and min range over the *whole* corpus,
//! advertised or not. Nothing that was not in the corpus ever appears.

pub mod detail;
pub mod filter;
pub mod pages;
pub mod session;

pub use detail::JobDetail;
pub use filter::{apply_filter, FilterKind, UserFilter};
pub use pages::{paginate, total_pages, NavCommand, Page, RankedEntry, PAGE_SIZE};
pub use session::{DetailAction, RetryDecision, SearchSession, SessionEvent, Stage};

use serde::Serialize;
use tracing::debug;

use crate::contracts::check_default_filter_band;
use crate::scoring::relevance::{job_search_score_vector, personal_relevancy};
use crate::scoring::TermVector;
use crate::types::{JobSnapshot, SeekerProfile};

/// A job together with the two scores the pipeline ranks on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredJob {
    pub job: JobSnapshot,
    /// Relevance to the search term, 0..=100.
    pub search_score: u32,
    /// Relevance to the seeker (see [`crate::personal_relevancy`]).
    pub personal_relevancy: u32,
}

/// The default relevance band: half the spread between the best and worst
/// search score, using integer division. An empty slice gives 0.
///
/// ```
/// use jobsift::search::default_threshold;
///
/// assert_eq!(default_threshold(&[10, 50, 90]), 40);
/// assert_eq!(default_threshold(&[30, 30]), 0);
/// assert_eq!(default_threshold(&[0, 7]), 3);
/// ```
pub fn default_threshold(scores: &[u32]) -> u32 {
    match (scores.iter().max(), scores.iter().min()) {
        (Some(&max), Some(&min)) => (max - min) / 2,
        _ => 0,
    }
}

/// Score every job against `term`, keep the advertised jobs inside the
/// default band, and reverse what is kept.
///
/// Personal relevancy against `seeker` is computed for the retained jobs
/// only. The result may be empty; deciding whether to retry is up to the
/// caller.
pub fn default_filter(corpus: Vec<JobSnapshot>, term: &str, seeker: &SeekerProfile) -> Vec<ScoredJob> {
    let term_vector = TermVector::new(term);
    let scores: Vec<u32> = corpus
        .iter()
        .map(|job| job_search_score_vector(job, &term_vector))
        .collect();
    let band = default_threshold(&scores);

    let mut retained: Vec<ScoredJob> = corpus
        .into_iter()
        .zip(scores)
        .filter(|(job, score)| *score >= band && job.advertised)
        .map(|(job, search_score)| {
            let personal_relevancy = personal_relevancy(&job, seeker);
            ScoredJob {
                job,
                search_score,
                personal_relevancy,
            }
        })
        .collect();

    // INVARIANT: DEFAULT_FILTER_REVERSES
    // Retained jobs come back in reverse corpus order.
    retained.reverse();
    check_default_filter_band(&retained, band);

    debug!(band, retained = retained.len(), "default filter");
    retained
}
