//! Parsing raw user tokens into typed values.
//!
//! The presentation layer reads lines; these functions turn them into the
//! values the session accepts, or a [`ValidationError`] whose message can be
//! shown before asking again. Surrounding whitespace is ignored and keyword
//! tokens are case-insensitive everywhere.

use crate::error::ValidationError;
use crate::search::session::DetailAction;
use crate::search::{NavCommand, Page};

/// A search term: non-blank, trimmed, lowercased.
pub fn parse_term(raw: &str) -> Result<String, ValidationError> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(ValidationError::BlankTerm);
    }
    Ok(term.to_lowercase())
}

/// A whole number in `min..=max`.
///
/// Signs, decimals and anything non-numeric are rejected as
/// [`ValidationError::NotANumber`]; numbers outside the range as
/// [`ValidationError::OutOfRange`].
///
/// ```
/// use jobsift::input::parse_bounded;
///
/// assert_eq!(parse_bounded(" 42 ", "relevancy", 0, 100), Ok(42));
/// assert!(parse_bounded("101", "relevancy", 0, 100).is_err());
/// assert!(parse_bounded("4.5", "relevancy", 0, 100).is_err());
/// ```
pub fn parse_bounded(raw: &str, field: &'static str, min: u32, max: u32) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    let value: u64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        input: trimmed.to_string(),
    })?;
    if value < u64::from(min) || value > u64::from(max) {
        return Err(ValidationError::OutOfRange { field, value, min, max });
    }
    // In range, so it fits.
    Ok(value as u32)
}

/// A 1-based menu choice among `count` options, returned 0-based.
pub fn parse_choice(raw: &str, count: usize) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(n - 1),
        Ok(_) => Err(ValidationError::UnknownOption {
            input: trimmed.to_string(),
        }),
        Err(_) => Err(ValidationError::NotANumber {
            input: trimmed.to_string(),
        }),
    }
}

/// `yes`/`y` or `no`/`n`.
pub fn parse_yes_no(raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(ValidationError::UnknownOption {
            input: other.to_string(),
        }),
    }
}

/// A navigation token for `page`: an item number shown on it, `next`,
/// `previous`, `back` or `home`.
///
/// Tokens that exist but cannot be used on this page (`next` on the last
/// page, an item number from another page) are [`ValidationError::Unavailable`].
pub fn parse_nav(raw: &str, page: &Page<'_>) -> Result<NavCommand, ValidationError> {
    let token = raw.trim().to_lowercase();
    let command = match token.as_str() {
        "next" | "n" => NavCommand::Next,
        "previous" | "prev" | "p" => NavCommand::Previous,
        "back" | "b" => NavCommand::Back,
        "home" | "h" => NavCommand::Home,
        other => match other.parse::<usize>() {
            Ok(position) => NavCommand::Select(position),
            Err(_) => return Err(ValidationError::UnknownOption { input: token }),
        },
    };
    if !page.allows(command) {
        return Err(ValidationError::Unavailable { option: token });
    }
    Ok(command)
}

/// `apply` or `back` in the detail sub-menu (also `1`/`2`).
pub fn parse_detail_action(raw: &str) -> Result<DetailAction, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "apply" | "a" => Ok(DetailAction::Apply),
        "2" | "back" | "b" => Ok(DetailAction::Back),
        other => Err(ValidationError::UnknownOption {
            input: other.to_string(),
        }),
    }
}
