// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where jobs and seeker profiles come from.
//!
//! The ranking core never talks to storage. A search session asks a
//! [`CorpusProvider`] for the full job list once per search and treats the
//! answer as an immutable snapshot until the next search.
//!
//! | Provider          | Source                                    |
//! |-------------------|-------------------------------------------|
//! | `InMemoryCorpus`  | a `Vec<JobSnapshot>` owned by the caller   |
//! | `JsonCorpus`      | a JSON array of camelCase job objects, re-read per fetch |

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::types::{JobSnapshot, SeekerProfile};

/// Supplies the job corpus for a search.
pub trait CorpusProvider {
    /// Every job that could be shown, in catalog order. Unadvertised jobs may
    /// be included; the default filter drops them.
    fn fetch_all_advertisable_jobs(&self) -> Result<Vec<JobSnapshot>>;
}

/// A corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    jobs: Vec<JobSnapshot>,
}

impl InMemoryCorpus {
    pub fn new(jobs: Vec<JobSnapshot>) -> Self {
        Self { jobs }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn fetch_all_advertisable_jobs(&self) -> Result<Vec<JobSnapshot>> {
        Ok(self.jobs.clone())
    }
}

/// A corpus stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
    path: PathBuf,
}

impl JsonCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusProvider for JsonCorpus {
    fn fetch_all_advertisable_jobs(&self) -> Result<Vec<JobSnapshot>> {
        let raw = fs::read_to_string(&self.path)?;
        let jobs: Vec<JobSnapshot> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), jobs = jobs.len(), "loaded corpus");
        Ok(jobs)
    }
}

impl SeekerProfile {
    /// Read a seeker profile from a JSON object with camelCase keys.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let profile = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "loaded seeker profile");
        Ok(profile)
    }
}
