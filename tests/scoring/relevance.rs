//! Search score and personal relevancy on realistic jobs.

use crate::common::{backend_seeker, make_full_job, make_job, sample_corpus};
use jobsift::{
    compensation_fit, cosine_score, job_search_score, personal_relevancy, relevancy_breakdown,
    SeekerProfile, COMPENSATION_FALLBACK_SCORE,
};

#[test]
fn test_search_score_weights_fields() {
    let job = make_full_job(1, "rust", &["rust"], &["cooking"], "cooking", 0);
    // title 100·50/100 + keywords 100·15/100 = 65
    assert_eq!(job_search_score(&job, "rust"), 65);
}

#[test]
fn test_search_score_joins_lists_with_spaces() {
    let job = make_full_job(1, "x", &["backend", "engineer"], &[], "", 0);
    // keywords document is "backend engineer" → 100 · 15/100
    assert_eq!(job_search_score(&job, "engineer backend"), 15);
}

#[test]
fn test_search_score_ranks_the_sample_corpus() {
    let corpus = sample_corpus();
    let scores: Vec<u32> = corpus.iter().map(|j| job_search_score(j, "backend engineer")).collect();
    // Exact title match beats a partial one; the chef scores nothing.
    assert!(scores[0] > scores[2]);
    assert_eq!(scores[1], 0);
    assert!(scores.iter().all(|&s| s <= 100));
}

#[test]
fn test_compensation_fit_scenario() {
    assert_eq!(compensation_fit(60_000, 50_000), 1);
}

#[test]
fn test_zero_job_compensation_uses_fallback() {
    let job = make_job(1, "rust", 0);
    let seeker = SeekerProfile {
        expected_compensation: 60_000,
        ..SeekerProfile::default()
    };
    let b = relevancy_breakdown(&job, &seeker);
    assert_eq!(b.compensation_fit, COMPENSATION_FALLBACK_SCORE);
    assert_eq!(b.total, 40);
}

#[test]
fn test_breakdown_components_use_job_string() {
    let job = &sample_corpus()[2];
    let seeker = backend_seeker();
    let b = relevancy_breakdown(job, &seeker);
    let job_string = job.job_string();
    assert_eq!(b.resume, cosine_score(&seeker.resume, &job_string));
    assert_eq!(b.keywords, cosine_score("rust backend", &job_string));
    assert_eq!(b.job_name, cosine_score("Backend Engineer", &job_string));
    assert_eq!(b.job_level, cosine_score("Mid", &job_string));
    // 100_000 / 120_000 = 0 → |0 − 1| + 1
    assert_eq!(b.compensation_fit, 2);
    assert_eq!(personal_relevancy(job, &seeker), b.total);
}

#[test]
fn test_personal_relevancy_formula() {
    let job = &sample_corpus()[0];
    let seeker = backend_seeker();
    let b = relevancy_breakdown(job, &seeker);
    let expected = (f64::from(b.resume) * 0.2
        + f64::from(b.keywords) * 0.3
        + f64::from(b.job_name) * 0.05
        + f64::from(b.job_level) * 0.05
        + f64::from(b.compensation_fit) * 0.4)
        .round() as u32;
    assert_eq!(b.total, expected);
}

#[test]
fn test_personal_relevancy_can_exceed_100() {
    // Fit is uncapped: 1_000_000 / 1 → 1_000_000, times 0.4.
    let job = make_job(1, "rust", 1);
    let seeker = SeekerProfile {
        expected_compensation: 1_000_000,
        ..SeekerProfile::default()
    };
    assert_eq!(personal_relevancy(&job, &seeker), 400_000);
}
