// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the ranking core reads.
//!
//! Jobs and seekers are owned by whatever catalog sits outside this crate.
//! The core only ever borrows them to build documents; nothing here mutates a
//! snapshot after it has been loaded.
//!
//! Both records deserialize from camelCase JSON and tolerate missing fields
//! (they default to empty strings, empty lists, zero, `false`).

use serde::{Deserialize, Serialize};

use crate::utils::join_list;

/// Job identifier assigned by the external catalog.
pub type JobId = u32;

/// A job posting as seen by the ranking core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSnapshot {
    pub id: JobId,
    #[serde(alias = "jobTitle")]
    pub title: String,
    pub company: String,
    pub description: String,
    /// Ordered keyword list; joined with a single space for scoring.
    pub keywords: Vec<String>,
    /// Ordered category list; joined with a single space for scoring.
    pub categories: Vec<String>,
    /// Currency-agnostic yearly figure.
    pub compensation: u32,
    pub job_level: String,
    pub work_type: String,
    pub working_arrangement: String,
    pub location: Option<String>,
    pub date_listed: Option<String>,
    #[serde(alias = "isAdvertised")]
    pub advertised: bool,
}

impl JobSnapshot {
    pub fn keywords_joined(&self, separator: &str) -> String {
        join_list(&self.keywords, separator)
    }

    pub fn categories_joined(&self, separator: &str) -> String {
        join_list(&self.categories, separator)
    }

    /// The single document personal relevancy is scored against.
    ///
    /// Title, keywords, categories, description and level are concatenated
    /// with no separator between the parts, so the last word of one part and
    /// the first word of the next fuse into one token
    /// (`"Rust Dev" + "rust"` → `"Rust Devrust"`). Keywords and categories are
    /// space-joined within their own part.
    pub fn job_string(&self) -> String {
        let mut out = String::with_capacity(
            self.title.len() + self.description.len() + self.job_level.len() + 64,
        );
        out.push_str(&self.title);
        out.push_str(&self.keywords_joined(" "));
        out.push_str(&self.categories_joined(" "));
        out.push_str(&self.description);
        out.push_str(&self.job_level);
        out
    }
}

/// What the ranking core knows about the person searching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeekerProfile {
    /// Extracted résumé text (extraction happens upstream).
    #[serde(alias = "resumeContent")]
    pub resume: String,
    pub keywords: Vec<String>,
    pub current_job_name: String,
    pub current_job_level: String,
    /// Expected yearly compensation. Values outside `(5000, 1_000_000]` mean
    /// "no stated expectation".
    pub expected_compensation: u32,
}

impl SeekerProfile {
    pub fn keywords_joined(&self, separator: &str) -> String {
        join_list(&self.keywords, separator)
    }
}
