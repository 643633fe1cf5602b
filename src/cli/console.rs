// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented driver for an interactive search session.
//!
//! Reads one answer per line and maps it onto the session's actions. All
//! ranking decisions stay in the library; this only prompts, prints and
//! reports. End of input ends the session quietly.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use jobsift::input::{parse_choice, parse_yes_no};
use jobsift::{
    CorpusProvider, FilterKind, RetryDecision, SearchSession, SessionEvent, SiftError, SortOrder,
    Stage,
};
use tracing::warn;

use super::display::{event_line, print_detail, print_page, themed, title, YELLOW};

/// Drive `session` until the user leaves or input runs out.
pub fn run<R, C>(session: &mut SearchSession, corpus: &C, input: R) -> Result<()>
where
    R: BufRead,
    C: CorpusProvider + ?Sized,
{
    let mut lines = input.lines();
    title("Search");
    println!("Let us help you find your next job!");

    loop {
        let outcome = match session.stage() {
            Stage::Finished => return Ok(()),
            Stage::CollectTerm => {
                let Some(line) = ask(&mut lines, "Please enter a term you would like to search for:")? else {
                    return Ok(());
                };
                session.submit_term(&line, corpus)
            }
            Stage::EmptyRetry(_) => {
                let Some(retry) = ask_yes_no(session, &mut lines, "Would you like to try again? (y/n)")? else {
                    return Ok(());
                };
                let decision = if retry { RetryDecision::Retry } else { RetryDecision::Abort };
                session.resolve_empty(decision)
            }
            Stage::UserFilter => {
                if session.filters_remaining() == 0 {
                    println!("All filters have now been applied");
                    session.finish_filtering()
                } else {
                    let prompt = if session.filters().is_empty() {
                        "Would you like to filter the results? (y/n)"
                    } else {
                        "Would you like to apply another filter? (y/n)"
                    };
                    match ask_yes_no(session, &mut lines, prompt)? {
                        None => return Ok(()),
                        Some(false) => session.finish_filtering(),
                        Some(true) => {
                            let labels: Vec<&str> = FilterKind::ALL.iter().map(|k| k.label()).collect();
                            let Some(index) = ask_choice(session, &mut lines, "Filter by:", &labels)? else {
                                return Ok(());
                            };
                            let kind = FilterKind::ALL[index];
                            let (min, max) = kind.bounds();
                            let prompt = format!("Enter the {} ({}-{}):", kind.label(), min, max);
                            let Some(bound) = ask(&mut lines, &prompt)? else {
                                return Ok(());
                            };
                            session.apply_filter_input(kind, &bound)
                        }
                    }
                }
            }
            Stage::Sort => {
                let Some(choose) = ask_yes_no(session, &mut lines, "Would you like to sort the results? (y/n)")? else {
                    return Ok(());
                };
                if choose {
                    let labels: Vec<&str> = SortOrder::USER_CHOICES.iter().map(|o| o.label()).collect();
                    let Some(index) = ask_choice(session, &mut lines, "Sort by:", &labels)? else {
                        return Ok(());
                    };
                    session.sort(SortOrder::USER_CHOICES[index])
                } else {
                    session.sort(SortOrder::SearchRelevance)
                }
            }
            Stage::Paginate => {
                print_page(&session.current_page()?);
                let Some(line) = ask(&mut lines, "Please select one of the above options:")? else {
                    return Ok(());
                };
                session.navigate_input(&line)
            }
            Stage::Detail => {
                print_detail(&session.selected_detail()?);
                let Some(line) = ask(&mut lines, "Please select an option:")? else {
                    return Ok(());
                };
                session.detail_input(&line)
            }
        };

        match outcome {
            Ok(event) => report(&event),
            Err(err @ SiftError::RetriesExhausted { .. }) => return Err(escalate(err)),
            Err(err) if err.is_recoverable() => {
                println!("{}", themed(YELLOW, &[], &err.to_string()));
            }
            Err(err) => return Err(err).context("search session failed"),
        }
    }
}

fn report(event: &SessionEvent) {
    match event {
        // Selections and page moves are visible from what gets printed next.
        SessionEvent::Selected { .. } | SessionEvent::PageChanged { .. } => {}
        _ => println!("{}", event_line(event)),
    }
}

fn ask<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<Option<String>> {
    println!("{}", prompt);
    print!("> ");
    io::stdout().flush().context("flush stdout")?;
    match lines.next() {
        None => Ok(None),
        Some(line) => Ok(Some(line.context("read stdin")?)),
    }
}

fn escalate(err: SiftError) -> anyhow::Error {
    warn!(error = %err, "ending session");
    anyhow::Error::new(err).context("too many invalid answers")
}

/// Re-asks until the answer parses; `None` on end of input. Failures count
/// against the session's retry budget.
fn ask_yes_no<B: BufRead>(
    session: &mut SearchSession,
    lines: &mut io::Lines<B>,
    prompt: &str,
) -> Result<Option<bool>> {
    loop {
        let Some(line) = ask(lines, prompt)? else {
            return Ok(None);
        };
        match session.check_answer(parse_yes_no(&line)) {
            Ok(answer) => return Ok(Some(answer)),
            Err(err @ SiftError::RetriesExhausted { .. }) => return Err(escalate(err)),
            Err(err) => println!("{}", themed(YELLOW, &[], &err.to_string())),
        }
    }
}

/// Numbered menu; returns the 0-based index. `None` on end of input.
fn ask_choice<B: BufRead>(
    session: &mut SearchSession,
    lines: &mut io::Lines<B>,
    prompt: &str,
    options: &[&str],
) -> Result<Option<usize>> {
    loop {
        println!("{}", prompt);
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        let Some(line) = ask(lines, "")? else {
            return Ok(None);
        };
        match session.check_answer(parse_choice(&line, options.len())) {
            Ok(index) => return Ok(Some(index)),
            Err(err @ SiftError::RetriesExhausted { .. }) => return Err(escalate(err)),
            Err(err) => println!("{}", themed(YELLOW, &[], &err.to_string())),
        }
    }
}
