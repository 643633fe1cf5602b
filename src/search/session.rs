// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive search session.
//!
//! ```text
//!              submit_term
//! CollectTerm ────────────► (default filter) ──empty──► EmptyRetry ──Retry──► CollectTerm
//!      ▲                          │                        │
//!      │                          ▼                        └──Abort──► Finished
//!      │                     UserFilter ◄──┐
//!      │                       │   │ apply_filter (≤ max_filters) ──empty──► EmptyRetry
//!      │          finish_filtering └──┘
//!      │                       ▼
//!      │                     Sort ──sort──► Paginate ◄──next/previous──┐
//!      │                                    │  │  └─────────────────────┘
//!      └──────────────back──────────────────┘  ├──select──► Detail ──apply/back──► Paginate
//!                                              └──home────► Finished
//! ```
//!
//! Every action checks the current stage first. An action that does not
//! belong to the stage fails with [`SiftError::InvalidTransition`] and leaves
//! the session untouched.
//!
//! Raw-input actions (`*_input`) count consecutive validation failures in the
//! current stage. When the count reaches `max_invalid_attempts` the action
//! returns [`SiftError::RetriesExhausted`] instead of the validation error and
//! the count starts over; what to do next is the caller's call. A valid input,
//! or any stage change, resets the count.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::detail::JobDetail;
use super::filter::{apply_filter, FilterKind, UserFilter};
use super::pages::{paginate, NavCommand, Page};
use super::{default_filter, ScoredJob};
use crate::config::SessionConfig;
use crate::corpus::CorpusProvider;
use crate::error::{EmptyReason, Result, SiftError, ValidationError};
use crate::input::{parse_detail_action, parse_nav, parse_term};
use crate::scoring::ranking::{sort_jobs, SortOrder};
use crate::types::{JobId, SeekerProfile};

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for a search term.
    CollectTerm,
    /// A filter left nothing; waiting for retry-or-abort.
    EmptyRetry(EmptyReason),
    /// Results exist; the user may add filters.
    UserFilter,
    /// Filtering is done; waiting for a sort order.
    Sort,
    /// Showing a page of results.
    Paginate,
    /// Showing one job's details.
    Detail,
    /// The user left the search.
    Finished,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::CollectTerm => "collect-term",
            Stage::EmptyRetry(_) => "empty-retry",
            Stage::UserFilter => "user-filter",
            Stage::Sort => "sort",
            Stage::Paginate => "paginate",
            Stage::Detail => "detail",
            Stage::Finished => "finished",
        }
    }
}

/// Answer to an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Enter a new search term.
    Retry,
    /// Leave the search.
    Abort,
}

/// Choice in the detail sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Apply for the job. Submission itself happens outside the session.
    Apply,
    Back,
}

/// What an action did, for the caller to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The working set was (re)computed and is non-empty.
    Results { count: usize },
    /// A filter stage produced nothing; the session is in `EmptyRetry`.
    Empty { reason: EmptyReason },
    /// The working set was sorted; paging starts at page 0.
    Sorted { order: SortOrder },
    /// Moved to another page.
    PageChanged { page_index: usize },
    /// A job was opened.
    Selected { job_id: JobId },
    /// The user chose to apply for this job.
    Apply { job_id: JobId },
    /// Back on the results page.
    ReturnedToResults { page_index: usize },
    /// Waiting for a new search term.
    NewSearch,
    /// The search is over.
    Finished,
}

/// One user's search, from term entry to leaving the results.
#[derive(Debug, Clone)]
pub struct SearchSession {
    seeker: SeekerProfile,
    config: SessionConfig,
    stage: Stage,
    term: Option<String>,
    working: Vec<ScoredJob>,
    filters: Vec<UserFilter>,
    order: Option<SortOrder>,
    page_index: usize,
    selected: Option<usize>,
    invalid_attempts: u32,
}

impl SearchSession {
    pub fn new(seeker: SeekerProfile, config: SessionConfig) -> Self {
        Self {
            seeker,
            config,
            stage: Stage::CollectTerm,
            term: None,
            working: Vec::new(),
            filters: Vec::new(),
            order: None,
            page_index: 0,
            selected: None,
            invalid_attempts: 0,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn seeker(&self) -> &SeekerProfile {
        &self.seeker
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// The current working set, in its current order.
    pub fn working_set(&self) -> &[ScoredJob] {
        &self.working
    }

    pub fn filters(&self) -> &[UserFilter] {
        &self.filters
    }

    /// User filters still available in this search.
    pub fn filters_remaining(&self) -> u32 {
        self.config.max_filters.saturating_sub(self.filters.len() as u32)
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.order
    }

    pub fn invalid_attempts(&self) -> u32 {
        self.invalid_attempts
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// The page currently shown. Only available while paging.
    pub fn current_page(&self) -> Result<Page<'_>> {
        self.expect_stage("show a page", |s| s == Stage::Paginate)?;
        Ok(paginate(&self.working, self.page_index))
    }

    /// Detail record of the selected job. Only available in the detail view.
    pub fn selected_detail(&self) -> Result<JobDetail> {
        let job = self.selected_job()?;
        Ok(JobDetail::for_seeker(&job.job, job.personal_relevancy))
    }

    /// The selected job. Only available in the detail view.
    pub fn selected_job(&self) -> Result<&ScoredJob> {
        self.expect_stage("show details", |s| s == Stage::Detail)?;
        self.selected
            .and_then(|i| self.working.get(i))
            .ok_or(SiftError::InvalidTransition {
                action: "show details",
                stage: self.stage.name(),
            })
    }

    // ========================================================================
    // COLLECT TERM → DEFAULT FILTER
    // ========================================================================

    /// Validate a raw term, fetch the corpus and run the default filter.
    ///
    /// Corpus errors propagate unchanged and leave the session in
    /// `CollectTerm`.
    pub fn submit_term<C>(&mut self, raw: &str, corpus: &C) -> Result<SessionEvent>
    where
        C: CorpusProvider + ?Sized,
    {
        self.expect_stage("submit a search term", |s| s == Stage::CollectTerm)?;
        let term = match parse_term(raw) {
            Ok(term) => term,
            Err(err) => return Err(self.reject(err)),
        };

        let jobs = corpus.fetch_all_advertisable_jobs()?;
        let corpus_size = jobs.len();
        let retained = default_filter(jobs, &term, &self.seeker);
        info!(term = %term, corpus = corpus_size, retained = retained.len(), "search");

        self.term = Some(term);
        self.working = retained;
        self.filters.clear();
        self.order = None;
        self.page_index = 0;
        self.selected = None;

        if self.working.is_empty() {
            return Ok(self.enter_empty(EmptyReason::NoMatches));
        }
        self.set_stage(Stage::UserFilter);
        Ok(SessionEvent::Results {
            count: self.working.len(),
        })
    }

    /// Answer an empty result: search again or leave.
    pub fn resolve_empty(&mut self, decision: RetryDecision) -> Result<SessionEvent> {
        self.expect_stage("resolve an empty result", |s| matches!(s, Stage::EmptyRetry(_)))?;
        match decision {
            RetryDecision::Retry => Ok(self.restart()),
            RetryDecision::Abort => Ok(self.finish()),
        }
    }

    // ========================================================================
    // USER FILTERS
    // ========================================================================

    /// Apply one more user filter to the working set.
    pub fn apply_filter(&mut self, filter: UserFilter) -> Result<SessionEvent> {
        self.expect_stage("apply a filter", |s| s == Stage::UserFilter)?;
        if self.filters_remaining() == 0 {
            return Err(ValidationError::FilterLimit {
                max: self.config.max_filters,
            }
            .into());
        }

        let working = std::mem::take(&mut self.working);
        self.working = apply_filter(working, filter);
        self.filters.push(filter);
        self.invalid_attempts = 0;

        if self.working.is_empty() {
            return Ok(self.enter_empty(EmptyReason::FiltersExcludedAll));
        }
        Ok(SessionEvent::Results {
            count: self.working.len(),
        })
    }

    /// [`apply_filter`](Self::apply_filter) with a raw bound typed by the user.
    pub fn apply_filter_input(&mut self, kind: FilterKind, raw_bound: &str) -> Result<SessionEvent> {
        self.expect_stage("apply a filter", |s| s == Stage::UserFilter)?;
        match kind.parse_bound(raw_bound) {
            Ok(filter) => self.apply_filter(filter),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Stop filtering and move on to sorting.
    pub fn finish_filtering(&mut self) -> Result<SessionEvent> {
        self.expect_stage("finish filtering", |s| s == Stage::UserFilter)?;
        debug!(filters = self.filters.len(), remaining = self.working.len(), "filters applied");
        self.set_stage(Stage::Sort);
        Ok(SessionEvent::Results {
            count: self.working.len(),
        })
    }

    // ========================================================================
    // SORT → PAGINATE
    // ========================================================================

    /// Sort the working set and show the first page.
    ///
    /// [`SortOrder::SearchRelevance`] is the order used when the user
    /// declines to choose one.
    pub fn sort(&mut self, order: SortOrder) -> Result<SessionEvent> {
        self.expect_stage("sort", |s| s == Stage::Sort)?;
        sort_jobs(&mut self.working, order);
        debug!(order = order.label(), "sorted");
        self.order = Some(order);
        self.page_index = 0;
        self.set_stage(Stage::Paginate);
        Ok(SessionEvent::Sorted { order })
    }

    /// Act on a navigation command from the current page.
    ///
    /// Commands the page does not offer (`next` on the last page, an item
    /// number from another page) are validation failures.
    pub fn navigate(&mut self, command: NavCommand) -> Result<SessionEvent> {
        let allowed = self.current_page()?.allows(command);
        if !allowed {
            let option = match command {
                NavCommand::Next => "next".to_string(),
                NavCommand::Previous => "previous".to_string(),
                NavCommand::Back => "back".to_string(),
                NavCommand::Home => "home".to_string(),
                NavCommand::Select(position) => position.to_string(),
            };
            return Err(self.reject(ValidationError::Unavailable { option }));
        }
        self.invalid_attempts = 0;

        match command {
            NavCommand::Next => {
                self.page_index += 1;
                Ok(SessionEvent::PageChanged {
                    page_index: self.page_index,
                })
            }
            NavCommand::Previous => {
                self.page_index -= 1;
                Ok(SessionEvent::PageChanged {
                    page_index: self.page_index,
                })
            }
            NavCommand::Back => Ok(self.restart()),
            NavCommand::Home => Ok(self.finish()),
            NavCommand::Select(position) => {
                let index = position - 1;
                let job_id = self.working[index].job.id;
                self.selected = Some(index);
                self.set_stage(Stage::Detail);
                Ok(SessionEvent::Selected { job_id })
            }
        }
    }

    /// [`navigate`](Self::navigate) with a raw token typed by the user.
    pub fn navigate_input(&mut self, raw: &str) -> Result<SessionEvent> {
        let parsed = parse_nav(raw, &self.current_page()?);
        match parsed {
            Ok(command) => self.navigate(command),
            Err(err) => Err(self.reject(err)),
        }
    }

    // ========================================================================
    // DETAIL
    // ========================================================================

    /// Act on the detail sub-menu. Both choices return to the same page.
    pub fn detail_action(&mut self, action: DetailAction) -> Result<SessionEvent> {
        let job_id = self.selected_job()?.job.id;
        self.selected = None;
        self.set_stage(Stage::Paginate);
        match action {
            DetailAction::Apply => {
                info!(job = job_id, "apply requested");
                Ok(SessionEvent::Apply { job_id })
            }
            DetailAction::Back => Ok(SessionEvent::ReturnedToResults {
                page_index: self.page_index,
            }),
        }
    }

    /// [`detail_action`](Self::detail_action) with a raw token typed by the user.
    pub fn detail_input(&mut self, raw: &str) -> Result<SessionEvent> {
        self.selected_job()?;
        match parse_detail_action(raw) {
            Ok(action) => self.detail_action(action),
            Err(err) => Err(self.reject(err)),
        }
    }

    // ========================================================================
    // MENU ANSWERS
    // ========================================================================

    /// Count a parsed menu answer (yes/no, filter kind, sort choice) against
    /// the retry budget of the current stage.
    ///
    /// A valid answer resets the count. A failure returns the validation
    /// error, or [`SiftError::RetriesExhausted`] once the budget is spent.
    pub fn check_answer<T>(&mut self, parsed: std::result::Result<T, ValidationError>) -> Result<T> {
        match parsed {
            Ok(value) => {
                self.invalid_attempts = 0;
                Ok(value)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn expect_stage(&self, action: &'static str, ok: impl Fn(Stage) -> bool) -> Result<()> {
        if ok(self.stage) {
            Ok(())
        } else {
            Err(SiftError::InvalidTransition {
                action,
                stage: self.stage.name(),
            })
        }
    }

    fn set_stage(&mut self, stage: Stage) {
        if self.stage != stage {
            debug!(from = self.stage.name(), to = stage.name(), "stage");
        }
        self.stage = stage;
        self.invalid_attempts = 0;
    }

    /// Count a validation failure and pick the error to report.
    fn reject(&mut self, err: ValidationError) -> SiftError {
        self.invalid_attempts += 1;
        // INVARIANT: RETRY_BUDGET
        // At most max_invalid_attempts consecutive failures per stage before escalating.
        if self.invalid_attempts >= self.config.max_invalid_attempts {
            let attempts = self.invalid_attempts;
            warn!(attempts, stage = self.stage.name(), "retry budget exhausted");
            self.invalid_attempts = 0;
            return SiftError::RetriesExhausted { attempts };
        }
        debug!(attempt = self.invalid_attempts, error = %err, "invalid input");
        SiftError::Validation(err)
    }

    fn enter_empty(&mut self, reason: EmptyReason) -> SessionEvent {
        debug!(%reason, "empty result");
        self.set_stage(Stage::EmptyRetry(reason));
        SessionEvent::Empty { reason }
    }

    fn restart(&mut self) -> SessionEvent {
        self.term = None;
        self.working.clear();
        self.filters.clear();
        self.order = None;
        self.page_index = 0;
        self.selected = None;
        self.set_stage(Stage::CollectTerm);
        SessionEvent::NewSearch
    }

    fn finish(&mut self) -> SessionEvent {
        self.working.clear();
        self.selected = None;
        self.set_stage(Stage::Finished);
        SessionEvent::Finished
    }
}
