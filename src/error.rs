// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for ranking and search sessions.
//!
//! Every failure the library can report is a [`SiftError`]. None of them are
//! fatal: an empty result is a retry-or-abort decision for the caller, a
//! validation failure means "ask again", and the session never exits the
//! process on its own.
//!
//! A job compensation of zero is *not* an error. The compensation-fit score
//! has a defined sentinel for it (see [`crate::COMPENSATION_FALLBACK_SCORE`]).

use std::fmt;
use std::io;

use thiserror::Error;

/// The main error type for jobsift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Field weights handed to the aggregator do not sum to exactly 100.
    #[error("field weights must sum to 100, got {sum}")]
    InvalidWeights { sum: u32 },

    /// A filter stage left nothing to show. Recoverable: retry with a new term or abort.
    #[error("no results: {0}")]
    EmptyResult(EmptyReason),

    /// Malformed user input (bound, page token, menu choice, search term).
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Too many consecutive invalid inputs in one stage; the caller decides what to do.
    #[error("too many invalid attempts ({attempts}), escalating to caller")]
    RetriesExhausted { attempts: u32 },

    /// A session action was called in a stage that does not accept it.
    #[error("cannot {action} while in stage {stage}")]
    InvalidTransition {
        action: &'static str,
        stage: &'static str,
    },

    /// Configuration errors (bad values, unreadable file)
    #[error("config error: {0}")]
    Config(String),

    /// I/O errors from corpus/profile/config files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON corpus/profile parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for operations that may fail with [`SiftError`].
pub type Result<T> = std::result::Result<T, SiftError>;

impl SiftError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SiftError::Config(msg.into())
    }

    /// True for errors the user can recover from by re-entering input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SiftError::EmptyResult(_) | SiftError::Validation(_) | SiftError::InvalidTransition { .. }
        )
    }
}

/// Which stage produced an empty working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The default relevance filter kept nothing for this term.
    NoMatches,
    /// The user's filters removed every remaining job.
    FiltersExcludedAll,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoMatches => write!(f, "no jobs match the search term"),
            EmptyReason::FiltersExcludedAll => {
                write!(f, "no jobs satisfy the filters applied")
            }
        }
    }
}

/// Rejected user input. The message is meant to be shown verbatim before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("search term must not be empty")]
    BlankTerm,

    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u32,
        max: u32,
    },

    #[error("'{input}' is not one of the available options")]
    UnknownOption { input: String },

    #[error("'{option}' is not available here")]
    Unavailable { option: String },

    #[error("at most {max} filters can be applied")]
    FilterLimit { max: u32 },
}
