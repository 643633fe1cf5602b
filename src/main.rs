//! jobsift - text-relevance ranking for job search.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jobsift::{
    apply_filter, cosine_score, default_filter, paginate, sort_jobs, Config, CorpusProvider,
    EmptyReason, FilterKind, JsonCorpus, SearchSession, SeekerProfile, SiftError, SortOrder,
};

mod cli;
use cli::display::{error_prefix, print_page};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&cli, &config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": true,
                    "message": format!("{e:#}"),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("{} {:#}", error_prefix(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli, config: &Config) {
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    debug!(?config, "loaded config");
    match &cli.command {
        Commands::Score { a, b } => {
            let score = cosine_score(a, b);
            if cli.json {
                println!("{}", serde_json::json!({ "score": score }));
            } else {
                println!("{}", score);
            }
            Ok(())
        }
        Commands::Rank {
            corpus,
            term,
            seeker,
            min_relevancy,
            max_relevancy,
            min_compensation,
            max_compensation,
            sort,
            page,
        } => {
            let bounds = [
                (FilterKind::MinRelevancy, min_relevancy),
                (FilterKind::MaxRelevancy, max_relevancy),
                (FilterKind::MinCompensation, min_compensation),
                (FilterKind::MaxCompensation, max_compensation),
            ];
            let options = RankOptions {
                term,
                filters: bounds
                    .iter()
                    .filter_map(|(kind, raw)| raw.as_deref().map(|raw| (*kind, raw)))
                    .collect(),
                order: (*sort).into(),
                page: *page,
            };
            run_rank(cli, config, corpus, seeker.as_deref(), &options)
        }
        Commands::Session { corpus, seeker } => {
            let seeker = load_seeker(seeker.as_deref())?;
            let corpus = JsonCorpus::new(corpus);
            let mut session = SearchSession::new(seeker, config.session);
            let stdin = std::io::stdin();
            cli::console::run(&mut session, &corpus, stdin.lock())
        }
    }
}

struct RankOptions<'a> {
    term: &'a str,
    filters: Vec<(FilterKind, &'a str)>,
    order: SortOrder,
    page: usize,
}

fn run_rank(
    cli: &Cli,
    config: &Config,
    corpus: &Path,
    seeker: Option<&Path>,
    options: &RankOptions<'_>,
) -> Result<()> {
    let term = jobsift::input::parse_term(options.term).map_err(SiftError::from)?;
    if options.filters.len() > config.session.max_filters as usize {
        return Err(SiftError::from(jobsift::ValidationError::FilterLimit {
            max: config.session.max_filters,
        })
        .into());
    }
    let filters = options
        .filters
        .iter()
        .map(|(kind, raw)| kind.parse_bound(raw).map_err(SiftError::from))
        .collect::<jobsift::Result<Vec<_>>>()?;
    if options.page == 0 {
        anyhow::bail!("--page starts at 1");
    }

    let seeker = load_seeker(seeker)?;
    let jobs = JsonCorpus::new(corpus)
        .fetch_all_advertisable_jobs()
        .with_context(|| format!("load corpus {}", corpus.display()))?;
    let corpus_size = jobs.len();

    let mut ranked = default_filter(jobs, &term, &seeker);
    if ranked.is_empty() {
        return Err(SiftError::EmptyResult(EmptyReason::NoMatches).into());
    }
    for filter in filters {
        ranked = apply_filter(ranked, filter);
    }
    if ranked.is_empty() {
        return Err(SiftError::EmptyResult(EmptyReason::FiltersExcludedAll).into());
    }
    sort_jobs(&mut ranked, options.order);
    info!(corpus = corpus_size, ranked = ranked.len(), order = options.order.label(), "ranked");

    let page = paginate(&ranked, options.page - 1);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&page).context("serialize page")?);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn load_seeker(path: Option<&Path>) -> Result<SeekerProfile> {
    match path {
        Some(path) => SeekerProfile::from_json_file(path)
            .with_context(|| format!("load seeker profile {}", path.display())),
        None => Ok(SeekerProfile::default()),
    }
}
