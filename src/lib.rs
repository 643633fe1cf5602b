//! Text-relevance ranking for job search.
//!
//! This crate turns free text (job postings, résumés, keyword lists, search
//! terms) into comparable 0..=100 similarity scores, combines them into a
//! search score and a personal relevancy per (job, seeker) pair, and drives a
//! filter → sort → paginate flow over a job corpus.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │  utils.rs    │────▶│ scoring/core.rs  │────▶│ scoring/weighted.rs│
//! │  (tokens,    │     │ (TermVector,     │     │ (FieldWeights,     │
//! │   is_blank)  │     │  cosine_score)   │     │  weighted_score)   │
//! └──────────────┘     └──────────────────┘     └────────────────────┘
//!                               │                         │
//!                               ▼                         ▼
//!                      ┌──────────────────────────────────────────┐
//!                      │           scoring/relevance.rs            │
//!                      │  (job_search_score, personal_relevancy,   │
//!                      │   compensation_fit)                       │
//!                      └──────────────────────────────────────────┘
//!                                          │
//!                                          ▼
//! ┌──────────────┐     ┌──────────────────────────────────────────┐
//! │  corpus.rs   │────▶│                search/                    │
//! │ (providers)  │     │ default_filter → filter → sort → pages    │
//! └──────────────┘     │ session (state machine), detail           │
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! # Module Map
//!
//! | Module              | Provides                                        |
//! |---------------------|-------------------------------------------------|
//! | `scoring`           | Cosine similarity, weighted aggregation, sorts  |
//! | `scoring::relevance`| Search score, personal relevancy, compensation fit |
//! | `search`            | Pipeline stages and the `SearchSession`         |
//! | `input`             | Raw token → typed value parsing                 |
//! | `corpus`            | `CorpusProvider` and its JSON/in-memory forms   |
//! | `config`            | TOML session and logging settings               |
//! | `contracts`         | Debug-build invariant checks                    |
//!
//! # Usage
//!
//! ```
//! use jobsift::{cosine_score, default_filter, paginate, sort_jobs, SeekerProfile, SortOrder};
//! use jobsift::JobSnapshot;
//!
//! assert_eq!(cosine_score("golang backend engineer", "backend engineer wanted"), 67);
//!
//! let corpus = vec![JobSnapshot {
//!     id: 1,
//!     title: "Backend Engineer".into(),
//!     advertised: true,
//!     ..JobSnapshot::default()
//! }];
//! let seeker = SeekerProfile::default();
//!
//! let mut jobs = default_filter(corpus, "backend engineer", &seeker);
//! sort_jobs(&mut jobs, SortOrder::SearchRelevance);
//! let page = paginate(&jobs, 0);
//! assert_eq!(page.entries[0].position, 1);
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod contracts;
pub mod corpus;
mod error;
pub mod input;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{Config, LoggingConfig, SessionConfig};
pub use corpus::{CorpusProvider, InMemoryCorpus, JsonCorpus};
pub use error::{EmptyReason, Result, SiftError, ValidationError};
pub use scoring::ranking::{sort_jobs, SortOrder};
pub use scoring::relevance::{
    compensation_fit, job_search_score, personal_relevancy, relevancy_breakdown,
    RelevancyBreakdown, COMPENSATION_FALLBACK_SCORE,
};
pub use scoring::weighted::{weighted_score, FieldWeights};
pub use scoring::{cosine_score, TermVector, MAX_SCORE};
pub use search::{
    apply_filter, default_filter, default_threshold, paginate, total_pages, DetailAction,
    FilterKind, JobDetail, NavCommand, Page, RankedEntry, RetryDecision, ScoredJob,
    SearchSession, SessionEvent, Stage, UserFilter, PAGE_SIZE,
};
pub use types::{JobId, JobSnapshot, SeekerProfile};
pub use utils::{format_compensation, is_blank, tokens};
