//! Scoring property tests.
//!
//! - Cosine is symmetric, bounded, case- and order-insensitive
//! - Self-similarity is exactly 100
//! - Weight sets that do not sum to 100 always fail
//! - Per-field truncation never beats a single final truncation

use jobsift::{compensation_fit, cosine_score, weighted_score, FieldWeights, COMPENSATION_FALLBACK_SCORE};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,5}").unwrap()
}

/// Space-separated words, sometimes with extra spaces.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((word_strategy(), 1usize..3), 1..10).prop_map(|words| {
        words
            .into_iter()
            .map(|(w, spaces)| format!("{}{}", w, " ".repeat(spaces)))
            .collect()
    })
}

/// Four weights summing to 100.
fn weights_strategy() -> impl Strategy<Value = [u32; 4]> {
    (0u32..=100, 0u32..=100, 0u32..=100).prop_map(|(a, b, c)| {
        let mut cuts = [a, b, c];
        cuts.sort_unstable();
        [cuts[0], cuts[1] - cuts[0], cuts[2] - cuts[1], 100 - cuts[2]]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cosine_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(cosine_score(&a, &b), cosine_score(&b, &a));
    }

    #[test]
    fn prop_cosine_self_is_100(a in text_strategy()) {
        prop_assert_eq!(cosine_score(&a, &a), 100);
    }

    #[test]
    fn prop_cosine_in_range(a in text_strategy(), b in text_strategy()) {
        prop_assert!(cosine_score(&a, &b) <= 100);
    }

    #[test]
    fn prop_cosine_token_order_irrelevant(a in text_strategy(), b in text_strategy()) {
        let mut words: Vec<&str> = a.split(' ').collect();
        words.reverse();
        let reversed = words.join(" ");
        prop_assert_eq!(cosine_score(&a, &b), cosine_score(&reversed, &b));
    }

    #[test]
    fn prop_cosine_case_insensitive(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(cosine_score(&a.to_uppercase(), &b), cosine_score(&a, &b));
    }

    #[test]
    fn prop_blank_scores_zero(spaces in 0usize..6, b in text_strategy()) {
        prop_assert_eq!(cosine_score(&" ".repeat(spaces), &b), 0);
    }

    #[test]
    fn prop_bad_weight_sums_fail(w in prop::collection::vec(0u32..60, 1..5), term in text_strategy()) {
        prop_assume!(w.iter().sum::<u32>() != 100);
        let fields: Vec<(&str, u32)> = w.iter().map(|&w| ("rust engineer", w)).collect();
        prop_assert!(weighted_score(&fields, &term).is_err());
    }

    #[test]
    fn prop_truncation_bounded(
        weights in weights_strategy(),
        fields in prop::collection::vec(text_strategy(), 4),
        term in text_strategy(),
    ) {
        let pairs: Vec<(&str, u32)> = fields.iter().map(String::as_str).zip(weights).collect();
        let per_term = FieldWeights::new(pairs.clone()).unwrap().score(&term);
        let exact: u32 = pairs.iter().map(|&(f, w)| cosine_score(f, &term) * w).sum::<u32>() / 100;
        prop_assert!(per_term <= exact);
        prop_assert!(exact - per_term <= 3);
        prop_assert!(per_term <= 100);
    }

    #[test]
    fn prop_compensation_fit_band(expected in 0u32..2_000_000, job in 0u32..2_000_000) {
        let fit = compensation_fit(expected, job);
        let stated = expected > 5_000 && expected <= 1_000_000;
        if !stated || job == 0 {
            prop_assert_eq!(fit, COMPENSATION_FALLBACK_SCORE);
        } else {
            prop_assert!(fit >= 1);
            prop_assert_eq!(fit, (expected / job).abs_diff(1) + 1);
        }
    }
}
