//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use jobsift::{JobSnapshot, ScoredJob, SeekerProfile};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from jobsift::testing
#[allow(unused_imports)]
pub use jobsift::testing::{make_full_job, make_job, make_seeker, scored, scored_range};

// ============================================================================
// CORPORA
// ============================================================================

/// A small mixed corpus: three backend roles, a chef, an unadvertised role.
pub fn sample_corpus() -> Vec<JobSnapshot> {
    let mut hidden = make_full_job(
        5,
        "Senior Backend Engineer",
        &["rust", "backend"],
        &["Software"],
        "Hidden listing",
        150_000,
    );
    hidden.advertised = false;

    vec![
        make_full_job(
            1,
            "Backend Engineer",
            &["golang", "backend"],
            &["Software", "IT"],
            "Build backend services in Go",
            90_000,
        ),
        make_full_job(
            2,
            "Pastry Chef",
            &["baking", "pastry"],
            &["Hospitality"],
            "Bake bread and pastries every morning",
            55_000,
        ),
        make_full_job(
            3,
            "Rust Backend Engineer",
            &["rust", "backend", "tokio"],
            &["Software"],
            "Write async backend engineer tooling",
            120_000,
        ),
        make_full_job(
            4,
            "Frontend Engineer",
            &["react", "typescript"],
            &["Software"],
            "Build web interfaces",
            80_000,
        ),
        hidden,
    ]
}

/// A seeker looking for backend work around 100k.
pub fn backend_seeker() -> SeekerProfile {
    SeekerProfile {
        resume: "backend engineer with rust and golang experience".to_string(),
        keywords: vec!["rust".to_string(), "backend".to_string()],
        current_job_name: "Backend Engineer".to_string(),
        current_job_level: "Mid".to_string(),
        expected_compensation: 100_000,
    }
}

/// `n` identical advertised jobs whose compensation is `id * 1000`.
pub fn uniform_corpus(n: u32) -> Vec<JobSnapshot> {
    (1..=n).map(|id| make_job(id, "rust engineer", id * 1_000)).collect()
}

// ============================================================================
// FILES
// ============================================================================

/// Write `jobs` as a JSON corpus file.
pub fn corpus_file(jobs: &[JobSnapshot]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    let json = serde_json::to_string(jobs).expect("serialize corpus");
    file.write_all(json.as_bytes()).expect("write corpus");
    file
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(jobs: &[ScoredJob]) -> Vec<u32> {
    jobs.iter().map(|j| j.job.id).collect()
}
