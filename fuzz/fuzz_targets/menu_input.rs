// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for interactive input parsing.
//!
//! Throws arbitrary text at the menu parsers. They must never panic, and any
//! command they accept must be one the current page offers.

#![no_main]

use arbitrary::Arbitrary;
use jobsift::input::{parse_bounded, parse_nav, parse_term};
use jobsift::testing::scored_range;
use jobsift::{paginate, FilterKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MenuInput {
    raw: String,
    len: u8,
    page_index: u8,
}

fuzz_target!(|input: MenuInput| {
    let raw: String = input.raw.chars().take(64).collect();

    if let Ok(term) = parse_term(&raw) {
        assert!(!term.trim().is_empty());
        assert_eq!(term, term.to_lowercase());
    }

    for kind in FilterKind::ALL {
        let (min, max) = kind.bounds();
        if let Ok(value) = parse_bounded(&raw, kind.field(), min, max) {
            assert!((min..=max).contains(&value), "{} accepted {}", kind.field(), value);
        }
    }

    let jobs = scored_range(u32::from(input.len));
    let page = paginate(&jobs, usize::from(input.page_index));
    if let Ok(command) = parse_nav(&raw, &page) {
        assert!(page.allows(command), "parser accepted {:?} on page {}", command, page.page_index);
    }
});
