// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the jobsift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `JOBSIFT_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops escapes entirely when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `JOBSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use jobsift::{format_compensation, JobDetail, Page, RankedEntry, SessionEvent};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("JOBSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            if !use_colors() {
                return String::new();
            }
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Cached TTY / NO_COLOR decision
static COLORS: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    *COLORS.get_or_init(|| std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout))
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Cut plain text to `max` characters, ending in `…` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Split plain text into lines of at most `width` characters on spaces
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let len = line.chars().count();
        if len > 0 && len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, reset(), content, " ".repeat(pad), border, reset());
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, reset(), label_part, border, "─".repeat(remaining), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), reset());
}

/// Print a boxed, centered title
pub fn title(text: &str) {
    let border = BLUE();
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), reset());
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        reset()
    );
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded 0-100 score (green=strong, yellow=partial, gray=weak)
pub fn score_value(score: u32) -> String {
    let text = format!("{:>3}", score);
    let color: fn() -> String = if score >= 75 {
        BRIGHT_GREEN
    } else if score >= 50 {
        GREEN
    } else if score >= 25 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

/// One summary line for a ranked job
pub fn entry_line(entry: &RankedEntry<'_>) -> String {
    let position = themed(BLUE, &[BOLD], &format!("{:>3}.", entry.position));
    let title = pad_right(&truncate(&entry.job.title, 28), 28);
    let company = pad_right(&truncate(&entry.job.company, 18), 18);
    let compensation = pad_left(&format_compensation(entry.job.compensation), 11);
    format!(
        " {} {} {} {}  {} {}",
        position,
        title,
        company,
        compensation,
        score_value(entry.search_score),
        score_value(entry.personal_relevancy)
    )
}

/// Print a page of results with its navigation footer
pub fn print_page(page: &Page<'_>) {
    section_top("Search Results");
    row(&themed(
        GRAY,
        &[],
        &format!(
            "  {:>3} {:<28} {:<18} {:>11}  {:>3} {:>3}",
            "#", "Title", "Company", "Pay", "Srch", "You"
        ),
    ));
    if page.entries.is_empty() {
        row("  (no results)");
    }
    for entry in &page.entries {
        row(&entry_line(entry));
    }
    row(&themed(
        GRAY,
        &[],
        &format!("  Page {} of {}", page.page_index + 1, page.total_pages),
    ));
    section_bot();
    println!("Options: {}", page.options().join(", "));
}

/// Print a detail record as labelled rows
pub fn print_detail(detail: &JobDetail) {
    section_top("Job Detail");
    for (label, value) in detail.fields() {
        let label = themed(CYAN, &[BOLD], &pad_right(label, 20));
        let lines = wrap(value, BOX_WIDTH - 24);
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                row(&format!("  {} {}", label, line));
            } else {
                row(&format!("  {} {}", " ".repeat(20), line));
            }
        }
    }
    section_bot();
    println!("Options: 1 apply, 2 back");
}

/// One line describing what a session action did
pub fn event_line(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Results { count } => themed(GREEN, &[], &format!("{} job(s) in the working set", count)),
        SessionEvent::Empty { reason } => themed(YELLOW, &[], &format!("Sorry, {}.", reason)),
        SessionEvent::Sorted { order } => format!("Sorted by {}", order.label()),
        SessionEvent::PageChanged { page_index } => format!("Page {}", page_index + 1),
        SessionEvent::Selected { job_id } => format!("Job #{}", job_id),
        SessionEvent::Apply { job_id } => themed(
            GREEN,
            &[BOLD],
            &format!("Application for job #{} handed to the application service", job_id),
        ),
        SessionEvent::ReturnedToResults { page_index } => format!("Back to page {}", page_index + 1),
        SessionEvent::NewSearch => "New search".to_string(),
        SessionEvent::Finished => "Search finished".to_string(),
    }
}

/// Red `error:` prefix for messages on stderr
pub fn error_prefix() -> String {
    themed(RED, &[BOLD], "error:")
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
