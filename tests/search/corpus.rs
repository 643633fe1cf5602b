//! File-backed corpora and profiles.

use std::io::Write;

use crate::common::{corpus_file, sample_corpus};
use jobsift::{
    CorpusProvider, JsonCorpus, SearchSession, SeekerProfile, SessionConfig, SessionEvent,
    SiftError, Stage,
};
use tempfile::NamedTempFile;

#[test]
fn test_json_corpus_round_trips_snapshots() {
    let jobs = sample_corpus();
    let file = corpus_file(&jobs);
    let loaded = JsonCorpus::new(file.path()).fetch_all_advertisable_jobs().unwrap();
    assert_eq!(loaded, jobs);
}

#[test]
fn test_session_over_json_corpus() {
    let file = corpus_file(&sample_corpus());
    let corpus = JsonCorpus::new(file.path());
    let mut s = SearchSession::new(SeekerProfile::default(), SessionConfig::default());
    assert_eq!(s.submit_term("pastry", &corpus).unwrap(), SessionEvent::Results { count: 1 });
    assert_eq!(s.working_set()[0].job.id, 2);
}

#[test]
fn test_corpus_error_leaves_session_waiting_for_a_term() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = JsonCorpus::new(dir.path().join("missing.json"));
    let mut s = SearchSession::new(SeekerProfile::default(), SessionConfig::default());
    let err = s.submit_term("rust", &corpus).unwrap_err();
    assert!(matches!(err, SiftError::Io(_)));
    assert!(!err.is_recoverable());
    assert_eq!(s.stage(), Stage::CollectTerm);
}

#[test]
fn test_profile_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"resume": "pastry chef", "keywords": ["baking"], "currentJobLevel": "Senior",
            "expectedCompensation": 52000}}"#
    )
    .unwrap();
    let seeker = SeekerProfile::from_json_file(file.path()).unwrap();
    assert_eq!(seeker.resume, "pastry chef");
    assert_eq!(seeker.current_job_level, "Senior");
    assert_eq!(seeker.expected_compensation, 52_000);
}
