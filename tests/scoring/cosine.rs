//! Cosine similarity: worked examples and edge cases.

use jobsift::{cosine_score, TermVector};

#[test]
fn test_worked_example() {
    // shared {backend, engineer}: dot 2, norms √3·√3 → 2/3 → 67
    assert_eq!(cosine_score("golang backend engineer", "backend engineer wanted"), 67);
}

#[test]
fn test_blank_operands_score_zero() {
    assert_eq!(cosine_score("", "anything"), 0);
    assert_eq!(cosine_score("  ", "x"), 0);
    assert_eq!(cosine_score("x", "\t \n"), 0);
    assert_eq!(cosine_score("", ""), 0);
}

#[test]
fn test_disjoint_texts_score_zero() {
    assert_eq!(cosine_score("rust tokio", "pastry chef"), 0);
}

#[test]
fn test_order_and_case_do_not_matter() {
    assert_eq!(cosine_score("Backend Engineer", "engineer backend"), 100);
    assert_eq!(
        cosine_score("senior rust engineer", "ENGINEER rust"),
        cosine_score("rust engineer senior", "rust engineer")
    );
}

#[test]
fn test_repeated_tokens_weigh_more() {
    // A = {rust:2}, B = {rust:1, go:1}: 2/(2·√2) → 71
    assert_eq!(cosine_score("rust rust", "rust go"), 71);
    // A = {rust:1}, B = {rust:1, go:1}: 1/√2 → 71 as well
    assert_eq!(cosine_score("rust", "rust go"), 71);
    // A = {rust:3, go:1}, B = {rust:1, go:1}: 4/(√10·√2) → 89
    assert_eq!(cosine_score("rust rust rust go", "rust go"), 89);
}

#[test]
fn test_only_spaces_separate_tokens() {
    // "rust,go" is one token; no punctuation splitting.
    assert_eq!(cosine_score("rust,go", "rust go"), 0);
    // Extra spaces collapse.
    assert_eq!(cosine_score("  rust    go  ", "rust go"), 100);
}

#[test]
fn test_term_vector_matches_free_function() {
    let job = TermVector::new("Senior Rust Backend Engineer");
    for other in ["rust", "backend engineer", "chef", "rust rust senior"] {
        assert_eq!(job.cosine(&TermVector::new(other)), cosine_score("Senior Rust Backend Engineer", other));
    }
}

#[test]
fn test_term_vector_counts() {
    let v = TermVector::new("Rust rust  GO");
    assert_eq!(v.distinct_terms(), 2);
    assert_eq!(v.frequency("rust"), 2);
    assert_eq!(v.frequency("go"), 1);
    assert_eq!(v.frequency("java"), 0);
    assert!(TermVector::new("   ").is_empty());
}
