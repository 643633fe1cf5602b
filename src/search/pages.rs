// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size pages over the ranked list.
//!
//! Pages hold [`PAGE_SIZE`] jobs; the last page holds whatever is left. Item
//! numbers are global and 1-based, so the third job on page 2 (index 1) is
//! item 13:
//!
//! ```text
//! page 0: items  1..=10
//! page 1: items 11..=20
//! page 2: items 21..=n    (n mod 10 items when n mod 10 != 0)
//! ```
//!
//! An empty list still has one (empty) page.

use serde::Serialize;

use super::ScoredJob;
use crate::contracts::check_page_window;
use crate::types::JobSnapshot;

/// Jobs per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` jobs: `ceil(len / 10)`, at least 1.
///
/// ```
/// use jobsift::search::total_pages;
///
/// assert_eq!(total_pages(0), 1);
/// assert_eq!(total_pages(10), 1);
/// assert_eq!(total_pages(11), 2);
/// ```
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// One job on a page, with its global item number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based position in the full list (`page_index * 10 + n`).
    pub position: usize,
    pub job: &'a JobSnapshot,
    pub search_score: u32,
    pub personal_relevancy: u32,
}

/// A navigation choice on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    Next,
    Previous,
    /// Leave the results and start a new search.
    Back,
    /// Leave the search entirely.
    Home,
    /// Open the job at this global 1-based position.
    Select(usize),
}

/// One page of results plus the metadata needed to navigate from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    pub page_index: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub entries: Vec<RankedEntry<'a>>,
}

impl Page<'_> {
    /// Whether `position` is an item shown on this page.
    pub fn contains_position(&self, position: usize) -> bool {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first.position..=last.position).contains(&position),
            _ => false,
        }
    }

    /// Whether `command` can be taken from this page.
    pub fn allows(&self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.has_next,
            NavCommand::Previous => self.has_previous,
            NavCommand::Back | NavCommand::Home => true,
            NavCommand::Select(position) => self.contains_position(position),
        }
    }

    /// The option tokens to offer, in menu order: item numbers on this page,
    /// then `previous`/`next` where available, then `back` and `home`.
    pub fn options(&self) -> Vec<String> {
        let mut out: Vec<String> = self.entries.iter().map(|e| e.position.to_string()).collect();
        if self.has_previous {
            out.push("previous".to_string());
        }
        if self.has_next {
            out.push("next".to_string());
        }
        out.push("back".to_string());
        out.push("home".to_string());
        out
    }
}

/// Slice page `page_index` out of `jobs`.
///
/// An index past the end is clamped to the last page, so this never panics.
pub fn paginate(jobs: &[ScoredJob], page_index: usize) -> Page<'_> {
    let total_pages = total_pages(jobs.len());
    let page_index = page_index.min(total_pages - 1);

    let start = (page_index * PAGE_SIZE).min(jobs.len());
    let end = (start + PAGE_SIZE).min(jobs.len());
    // INVARIANT: PAGE_TOTALITY
    // Pages tile the list exactly: [0,10), [10,20), ..., [10k, n).
    check_page_window(start, end, jobs.len());

    let entries = jobs[start..end]
        .iter()
        .enumerate()
        .map(|(offset, scored)| RankedEntry {
            position: start + offset + 1,
            job: &scored.job,
            search_score: scored.search_score,
            personal_relevancy: scored.personal_relevancy,
        })
        .collect();

    Page {
        page_index,
        total_pages,
        has_next: page_index + 1 < total_pages,
        has_previous: page_index > 0,
        entries,
    }
}
