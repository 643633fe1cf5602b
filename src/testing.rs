//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid duplication.

#![doc(hidden)]

use crate::search::ScoredJob;
use crate::types::{JobId, JobSnapshot, SeekerProfile};

/// Create an advertised job with only a title and compensation set.
///
/// Keywords, categories, description and level are left empty so a test
/// controls exactly which fields contribute to a score.
pub fn make_job(id: JobId, title: &str, compensation: u32) -> JobSnapshot {
    JobSnapshot {
        id,
        title: title.to_string(),
        compensation,
        advertised: true,
        ..JobSnapshot::default()
    }
}

/// Create a fully populated advertised job.
pub fn make_full_job(
    id: JobId,
    title: &str,
    keywords: &[&str],
    categories: &[&str],
    description: &str,
    compensation: u32,
) -> JobSnapshot {
    JobSnapshot {
        id,
        title: title.to_string(),
        company: format!("Company {}", id),
        description: description.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        compensation,
        job_level: "Mid".to_string(),
        work_type: "Full Time".to_string(),
        working_arrangement: "Remote".to_string(),
        location: Some("Melbourne".to_string()),
        date_listed: Some("2024-05-01".to_string()),
        advertised: true,
    }
}

/// Create a seeker with a résumé, keywords and expected compensation.
pub fn make_seeker(resume: &str, keywords: &[&str], expected_compensation: u32) -> SeekerProfile {
    SeekerProfile {
        resume: resume.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        expected_compensation,
        ..SeekerProfile::default()
    }
}

/// Create a scored job with explicit scores (no scoring is run).
///
/// The job is *not* advertised; set `job.advertised` when a test needs it.
pub fn scored(id: JobId, search_score: u32, personal_relevancy: u32, compensation: u32) -> ScoredJob {
    ScoredJob {
        job: JobSnapshot {
            id,
            title: format!("Job {}", id),
            compensation,
            ..JobSnapshot::default()
        },
        search_score,
        personal_relevancy,
    }
}

/// Create `n` scored jobs with ids `1..=n`.
pub fn scored_range(n: u32) -> Vec<ScoredJob> {
    (1..=n).map(|id| scored(id, id % 101, 0, id * 1_000)).collect()
}
