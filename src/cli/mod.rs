// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the jobsift command-line interface.
//!
//! Three subcommands: `score` compares two texts, `rank` runs one
//! non-interactive pass of the search pipeline over a JSON corpus, and
//! `session` drives the interactive search over stdin.

pub mod console;
pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use jobsift::SortOrder;

#[derive(Parser)]
#[command(
    name = "jobsift",
    about = "Text-relevance ranking for job search",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file (defaults to $JOBSIFT_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of formatted text (logs become JSON too)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cosine similarity of two texts, 0-100
    Score {
        /// First text
        a: String,

        /// Second text
        b: String,
    },

    /// Rank a corpus for a search term and print one page
    Rank {
        /// JSON array of jobs
        #[arg(short, long)]
        corpus: PathBuf,

        /// Search term
        #[arg(short, long)]
        term: String,

        /// JSON seeker profile (personal relevancy is computed against it)
        #[arg(short, long)]
        seeker: Option<PathBuf>,

        /// Keep jobs with personal relevancy >= N
        #[arg(long, value_name = "N")]
        min_relevancy: Option<String>,

        /// Keep jobs with personal relevancy <= N
        #[arg(long, value_name = "N")]
        max_relevancy: Option<String>,

        /// Keep jobs with compensation >= N
        #[arg(long, value_name = "N")]
        min_compensation: Option<String>,

        /// Keep jobs with compensation <= N
        #[arg(long, value_name = "N")]
        max_compensation: Option<String>,

        /// Result order
        #[arg(long, value_enum, default_value = "relevance")]
        sort: SortArg,

        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Interactive search session on stdin
    Session {
        /// JSON array of jobs
        #[arg(short, long)]
        corpus: PathBuf,

        /// JSON seeker profile
        #[arg(short, long)]
        seeker: Option<PathBuf>,
    },
}

/// Sort orders as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Search relevance, highest first
    Relevance,
    /// Personal relevancy, highest first
    Personal,
    /// Compensation, lowest first
    CompAsc,
    /// Compensation, highest first
    CompDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOrder::SearchRelevance,
            SortArg::Personal => SortOrder::PersonalRelevancyDesc,
            SortArg::CompAsc => SortOrder::CompensationAsc,
            SortArg::CompDesc => SortOrder::CompensationDesc,
        }
    }
}
