//! Pipeline property tests.
//!
//! - The default filter never fabricates jobs and honors its band
//! - User filters only ever remove jobs and compose as AND
//! - Sorting is a permutation; descending orders are ascending + reverse
//! - Pages tile the list exactly

use jobsift::{
    apply_filter, default_filter, default_threshold, job_search_score, paginate, sort_jobs,
    total_pages, JobSnapshot, ScoredJob, SeekerProfile, SortOrder, UserFilter, PAGE_SIZE,
};
use proptest::prelude::*;

use crate::common::{make_full_job, scored};

// ============================================================================
// STRATEGIES
// ============================================================================

const VOCAB: &[&str] = &["rust", "go", "backend", "engineer", "chef", "senior", "data", "web"];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..5).prop_map(|w| w.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<JobSnapshot>> {
    prop::collection::vec(
        (text_strategy(), text_strategy(), any::<bool>(), 0u32..300_000),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, advertised, comp))| {
                let mut job = make_full_job(i as u32, &title, &["rust"], &["IT"], &description, comp);
                job.advertised = advertised;
                job
            })
            .collect()
    })
}

fn scored_strategy() -> impl Strategy<Value = Vec<ScoredJob>> {
    prop::collection::vec((0u32..=100, 0u32..=200, 0u32..200_000), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (s, p, c))| scored(i as u32, s, p, c))
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = UserFilter> {
    prop_oneof![
        (0u32..=100).prop_map(UserFilter::MinRelevancy),
        (0u32..=100).prop_map(UserFilter::MaxRelevancy),
        (0u32..=1_000_000).prop_map(UserFilter::MinCompensation),
        (0u32..=1_000_000).prop_map(UserFilter::MaxCompensation),
    ]
}

fn order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::SearchRelevance),
        Just(SortOrder::PersonalRelevancyDesc),
        Just(SortOrder::CompensationAsc),
        Just(SortOrder::CompensationDesc),
    ]
}

fn ids(jobs: &[ScoredJob]) -> Vec<u32> {
    jobs.iter().map(|j| j.job.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_default_filter_band_and_no_fabrication(corpus in corpus_strategy(), term in text_strategy()) {
        let scores: Vec<u32> = corpus.iter().map(|j| job_search_score(j, &term)).collect();
        let band = default_threshold(&scores);
        let expected: Vec<u32> = corpus
            .iter()
            .zip(&scores)
            .filter(|(j, s)| j.advertised && **s >= band)
            .map(|(j, _)| j.id)
            .rev()
            .collect();

        let kept = default_filter(corpus, &term, &SeekerProfile::default());
        prop_assert_eq!(ids(&kept), expected);
    }

    #[test]
    fn prop_filters_compose_as_and(jobs in scored_strategy(), f in filter_strategy(), g in filter_strategy()) {
        let both = apply_filter(apply_filter(jobs.clone(), f), g);
        let expected: Vec<u32> = jobs
            .iter()
            .filter(|j| f.matches(j) && g.matches(j))
            .map(|j| j.job.id)
            .collect();
        prop_assert_eq!(ids(&both), expected);
    }

    #[test]
    fn prop_sort_is_a_permutation(mut jobs in scored_strategy(), order in order_strategy()) {
        let mut before = ids(&jobs);
        sort_jobs(&mut jobs, order);
        let mut after = ids(&jobs);
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_descending_is_reversed_ascending(jobs in scored_strategy()) {
        let mut asc = jobs.clone();
        sort_jobs(&mut asc, SortOrder::CompensationAsc);
        let mut desc = jobs;
        sort_jobs(&mut desc, SortOrder::CompensationDesc);
        asc.reverse();
        prop_assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn prop_pages_tile_list(jobs in scored_strategy()) {
        let total = total_pages(jobs.len());
        let mut seen = Vec::new();
        for index in 0..total {
            let page = paginate(&jobs, index);
            prop_assert!(page.entries.len() <= PAGE_SIZE);
            if index + 1 < total {
                prop_assert_eq!(page.entries.len(), PAGE_SIZE);
            }
            seen.extend(page.entries.iter().map(|e| e.job.id));
        }
        prop_assert_eq!(seen, ids(&jobs));
        if jobs.len() % PAGE_SIZE != 0 {
            prop_assert_eq!(paginate(&jobs, total - 1).entries.len(), jobs.len() % PAGE_SIZE);
        }
    }
}
