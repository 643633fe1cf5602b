//! Weighted aggregation: the weight-sum contract and per-field truncation.

use jobsift::{weighted_score, FieldWeights, SiftError};

#[test]
fn test_sum_99_or_101_fails() {
    assert!(matches!(
        weighted_score(&[("rust", 60), ("go", 39)], "rust"),
        Err(SiftError::InvalidWeights { sum: 99 })
    ));
    assert!(matches!(
        weighted_score(&[("rust", 60), ("go", 41)], "rust"),
        Err(SiftError::InvalidWeights { sum: 101 })
    ));
}

#[test]
fn test_weights_are_not_normalized() {
    // 50 + 50 + 50 would normalize to thirds; it must fail instead.
    assert!(FieldWeights::new(vec![("a", 50), ("b", 50), ("c", 50)]).is_err());
}

#[test]
fn test_per_field_truncation_loses_points() {
    // Four fields scoring 67 each:
    //   per term  67·50/100=33 + 67·15/100=10 + 10 + 67·20/100=13 = 66
    //   single    67·100/100 = 67
    let text = "golang backend engineer";
    let score = weighted_score(
        &[(text, 50), (text, 15), (text, 15), (text, 20)],
        "backend engineer wanted",
    )
    .unwrap();
    assert_eq!(score, 66);
}

#[test]
fn test_validated_set_scores_many_terms() {
    let weights = FieldWeights::new(vec![("rust engineer", 70), ("backend", 30)]).unwrap();
    assert_eq!(weights.score("rust engineer"), 70);
    assert_eq!(weights.score("backend"), 30);
    assert_eq!(weights.score("chef"), 0);
    assert_eq!(weights.score(""), 0);
}

#[test]
fn test_error_message_names_the_sum() {
    let err = weighted_score(&[("a", 10)], "a").unwrap_err();
    assert_eq!(err.to_string(), "field weights must sum to 100, got 10");
}
