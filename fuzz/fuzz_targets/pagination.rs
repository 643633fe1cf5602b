// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result pages.
//!
//! Any list length and any requested page index must produce a clamped page
//! with at most ten entries whose positions are contiguous and 1-based.

#![no_main]

use arbitrary::Arbitrary;
use jobsift::testing::scored_range;
use jobsift::{paginate, total_pages, PAGE_SIZE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PageInput {
    len: u16,
    page_index: usize,
}

fuzz_target!(|input: PageInput| {
    let jobs = scored_range(u32::from(input.len % 500));
    let total = total_pages(jobs.len());
    let page = paginate(&jobs, input.page_index);

    // INVARIANT 1: index is clamped into range
    assert!(page.page_index < total, "page {} of {}", page.page_index, total);
    assert_eq!(page.total_pages, total);

    // INVARIANT 2: at most one page of entries
    assert!(page.entries.len() <= PAGE_SIZE);

    // INVARIANT 3: positions are global, contiguous and 1-based
    for (offset, entry) in page.entries.iter().enumerate() {
        assert_eq!(entry.position, page.page_index * PAGE_SIZE + offset + 1);
        assert!(page.contains_position(entry.position));
    }

    assert_eq!(page.has_next, page.page_index + 1 < total);
    assert_eq!(page.has_previous, page.page_index > 0);
});
