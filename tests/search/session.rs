//! Search session scenarios end to end.

use crate::common::{backend_seeker, sample_corpus, uniform_corpus};
use jobsift::{
    DetailAction, EmptyReason, FilterKind, InMemoryCorpus, NavCommand, RetryDecision,
    SearchSession, SeekerProfile, SessionConfig, SessionEvent, SiftError, SortOrder, Stage,
    ValidationError,
};

fn session_with(seeker: SeekerProfile) -> SearchSession {
    SearchSession::new(seeker, SessionConfig::default())
}

#[test]
fn test_seeker_search_to_application() {
    let corpus = InMemoryCorpus::new(sample_corpus());
    let mut s = session_with(backend_seeker());

    let event = s.submit_term("Backend Engineer", &corpus).unwrap();
    assert_eq!(event, SessionEvent::Results { count: 2 });
    s.apply_filter_input(FilterKind::MinCompensation, "100000").unwrap();
    s.finish_filtering().unwrap();
    s.sort(SortOrder::PersonalRelevancyDesc).unwrap();

    let page = s.current_page().unwrap();
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].job.id, 3);

    s.navigate_input("1").unwrap();
    let detail = s.selected_detail().unwrap();
    assert_eq!(detail.get("Title"), Some("Rust Backend Engineer"));
    assert_eq!(detail.get("Compensation"), Some("$120,000"));
    assert_eq!(detail.get("Keywords"), Some("rust, backend, tokio"));

    assert_eq!(s.detail_action(DetailAction::Apply).unwrap(), SessionEvent::Apply { job_id: 3 });
    assert_eq!(s.stage(), Stage::Paginate);
}

#[test]
fn test_no_match_retry_with_new_term() {
    let corpus = InMemoryCorpus::new(vec![]);
    let mut s = session_with(SeekerProfile::default());
    assert_eq!(
        s.submit_term("astronaut", &corpus).unwrap(),
        SessionEvent::Empty {
            reason: EmptyReason::NoMatches
        }
    );
    s.resolve_empty(RetryDecision::Retry).unwrap();

    let corpus = InMemoryCorpus::new(uniform_corpus(3));
    assert_eq!(s.submit_term("rust", &corpus).unwrap(), SessionEvent::Results { count: 3 });
}

#[test]
fn test_filters_remove_everything() {
    let corpus = InMemoryCorpus::new(uniform_corpus(5));
    let mut s = session_with(SeekerProfile::default());
    s.submit_term("rust", &corpus).unwrap();
    let event = s.apply_filter_input(FilterKind::MaxCompensation, "500").unwrap();
    assert_eq!(
        event,
        SessionEvent::Empty {
            reason: EmptyReason::FiltersExcludedAll
        }
    );
    assert!(s.apply_filter_input(FilterKind::MinCompensation, "1").is_err());
    s.resolve_empty(RetryDecision::Abort).unwrap();
    assert!(s.is_finished());
}

#[test]
fn test_bad_bounds_reprompt_without_state_change() {
    let corpus = InMemoryCorpus::new(uniform_corpus(5));
    let mut s = session_with(SeekerProfile::default());
    s.submit_term("rust", &corpus).unwrap();

    for raw in ["-5", "abc", "1000001"] {
        let err = s.apply_filter_input(FilterKind::MaxCompensation, raw).unwrap_err();
        assert!(matches!(err, SiftError::Validation(_)), "{raw}: {err}");
    }
    assert_eq!(s.working_set().len(), 5);
    assert!(s.filters().is_empty());
    assert_eq!(s.stage(), Stage::UserFilter);

    assert!(matches!(
        s.apply_filter_input(FilterKind::MaxCompensation, "2000000"),
        Err(SiftError::RetriesExhausted { attempts: 4 })
    ));
}

#[test]
fn test_out_of_range_message() {
    let corpus = InMemoryCorpus::new(uniform_corpus(5));
    let mut s = session_with(SeekerProfile::default());
    s.submit_term("rust", &corpus).unwrap();
    let err = s.apply_filter_input(FilterKind::MinRelevancy, "150").unwrap_err();
    assert!(matches!(
        err,
        SiftError::Validation(ValidationError::OutOfRange { value: 150, .. })
    ));
    assert_eq!(
        err.to_string(),
        "invalid input: relevancy must be between 0 and 100, got 150"
    );
}

#[test]
fn test_walk_every_page_and_come_back() {
    let corpus = InMemoryCorpus::new(uniform_corpus(25));
    let mut s = session_with(SeekerProfile::default());
    s.submit_term("rust", &corpus).unwrap();
    s.finish_filtering().unwrap();
    s.sort(SortOrder::CompensationAsc).unwrap();

    let mut seen = Vec::new();
    loop {
        let page = s.current_page().unwrap();
        seen.extend(page.entries.iter().map(|e| e.job.id));
        if !page.has_next {
            break;
        }
        s.navigate(NavCommand::Next).unwrap();
    }
    assert_eq!(seen, (1..=25).collect::<Vec<_>>());

    s.navigate(NavCommand::Previous).unwrap();
    assert_eq!(s.current_page().unwrap().page_index, 1);
    assert_eq!(s.navigate(NavCommand::Back).unwrap(), SessionEvent::NewSearch);
    assert_eq!(s.stage(), Stage::CollectTerm);
}

#[test]
fn test_stage_guards() {
    let corpus = InMemoryCorpus::new(uniform_corpus(3));
    let mut s = session_with(SeekerProfile::default());
    assert!(matches!(
        s.finish_filtering(),
        Err(SiftError::InvalidTransition { .. })
    ));
    s.submit_term("rust", &corpus).unwrap();
    assert!(matches!(
        s.submit_term("rust", &corpus),
        Err(SiftError::InvalidTransition { .. })
    ));
    assert!(matches!(
        s.detail_action(DetailAction::Back),
        Err(SiftError::InvalidTransition { .. })
    ));
    assert_eq!(s.stage(), Stage::UserFilter);
}

#[test]
fn test_configured_filter_limit() {
    let corpus = InMemoryCorpus::new(uniform_corpus(3));
    let config = SessionConfig {
        max_filters: 1,
        max_invalid_attempts: 4,
    };
    let mut s = SearchSession::new(SeekerProfile::default(), config);
    s.submit_term("rust", &corpus).unwrap();
    s.apply_filter_input(FilterKind::MinCompensation, "0").unwrap();
    assert!(matches!(
        s.apply_filter_input(FilterKind::MinCompensation, "0"),
        Err(SiftError::Validation(ValidationError::FilterLimit { max: 1 }))
    ));
}
