// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The detail record shown when a job is selected from a page.

use serde::Serialize;

use crate::types::JobSnapshot;
use crate::utils::format_compensation;

/// Shown for optional fields the catalog left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Ordered `(label, value)` pairs describing one job.
///
/// Order is fixed: Title, Personal Relevancy (seeker views only), Date
/// Posted, Location, Company, Compensation, Job Level, Working Type, Working
/// Arrangement, Description, Categories, Keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDetail {
    fields: Vec<(&'static str, String)>,
}

impl JobDetail {
    /// Detail record for a seeker, including their personal relevancy.
    pub fn for_seeker(job: &JobSnapshot, personal_relevancy: u32) -> Self {
        Self::build(job, Some(personal_relevancy))
    }

    /// Detail record without a seeker (no relevancy line).
    pub fn for_job(job: &JobSnapshot) -> Self {
        Self::build(job, None)
    }

    fn build(job: &JobSnapshot, personal_relevancy: Option<u32>) -> Self {
        let mut fields = Vec::with_capacity(12);
        fields.push(("Title", job.title.clone()));
        if let Some(relevancy) = personal_relevancy {
            fields.push(("Personal Relevancy", relevancy.to_string()));
        }
        fields.push(("Date Posted", or_not_specified(job.date_listed.as_deref())));
        fields.push(("Location", or_not_specified(job.location.as_deref())));
        fields.push(("Company", job.company.clone()));
        fields.push(("Compensation", format_compensation(job.compensation)));
        fields.push(("Job Level", job.job_level.clone()));
        fields.push(("Working Type", job.work_type.clone()));
        fields.push(("Working Arrangement", job.working_arrangement.clone()));
        fields.push(("Description", job.description.clone()));
        fields.push(("Categories", job.categories_joined(", ")));
        fields.push(("Keywords", job.keywords_joined(", ")));
        Self { fields }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Value for `label`, if present.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

fn or_not_specified(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}
