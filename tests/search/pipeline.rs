//! Stateless pipeline stages over realistic corpora.

use crate::common::{backend_seeker, ids, make_job, sample_corpus, scored};
use jobsift::{
    apply_filter, default_filter, default_threshold, job_search_score, sort_jobs, SeekerProfile,
    SortOrder, UserFilter,
};

#[test]
fn test_three_job_scenario() {
    // Jobs whose search scores against "a" are exactly 10, 50 and 90.
    // Description "a b c d" has cosine 50 with "a" → 50·20/100 = 10.
    let mut low = make_job(1, "x", 0);
    low.description = "a b c d".to_string();
    let mid = make_job(2, "a", 0);
    let mut high = make_job(3, "a", 0);
    high.keywords = vec!["a".to_string()];
    high.categories = vec!["a".to_string()];
    high.description = "a b c d".to_string();

    let corpus = vec![low, mid, high];
    let scores: Vec<u32> = corpus.iter().map(|j| job_search_score(j, "a")).collect();
    assert_eq!(scores, [10, 50, 90]);
    assert_eq!(default_threshold(&scores), 40);

    let kept = default_filter(corpus, "a", &SeekerProfile::default());
    assert_eq!(ids(&kept), [3, 2]);
    assert_eq!(kept[0].search_score, 90);
    assert_eq!(kept[1].search_score, 50);
}

#[test]
fn test_sample_corpus_default_filter() {
    let kept = default_filter(sample_corpus(), "backend engineer", &backend_seeker());
    // The chef (0) and the unadvertised senior role are gone.
    assert!(!ids(&kept).contains(&2));
    assert!(!ids(&kept).contains(&5));
    assert!(kept.iter().all(|j| j.job.advertised));
    // Retained order is reversed corpus order.
    let mut sorted = ids(&kept);
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids(&kept), sorted);
}

#[test]
fn test_filter_then_sort() {
    let kept = default_filter(sample_corpus(), "engineer", &backend_seeker());
    let kept = apply_filter(kept, UserFilter::MinCompensation(85_000));
    let mut kept = apply_filter(kept, UserFilter::MaxCompensation(125_000));
    sort_jobs(&mut kept, SortOrder::CompensationDesc);
    assert_eq!(ids(&kept), [3, 1]);
}

#[test]
fn test_default_sort_reverses_ties() {
    let mut jobs = vec![scored(1, 40, 0, 0), scored(2, 40, 0, 0), scored(3, 70, 0, 0)];
    sort_jobs(&mut jobs, SortOrder::SearchRelevance);
    // True descending sort would give [3, 1, 2].
    assert_eq!(ids(&jobs), [3, 2, 1]);
}

#[test]
fn test_personal_relevancy_sort_uses_precomputed_scores() {
    let mut jobs = vec![scored(1, 0, 10, 0), scored(2, 0, 400, 0), scored(3, 0, 50, 0)];
    sort_jobs(&mut jobs, SortOrder::PersonalRelevancyDesc);
    assert_eq!(ids(&jobs), [2, 3, 1]);
}

#[test]
fn test_relevancy_filters_compose() {
    let jobs = vec![scored(1, 0, 10, 0), scored(2, 0, 50, 0), scored(3, 0, 90, 0)];
    let jobs = apply_filter(jobs, UserFilter::MinRelevancy(20));
    let jobs = apply_filter(jobs, UserFilter::MaxRelevancy(80));
    assert_eq!(ids(&jobs), [2]);
}
