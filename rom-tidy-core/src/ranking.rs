//! Preference ordering between ROM records.
//!
//! For two variants of the same title, the preferred one sorts first:
//!
//! 1. better dump quality (`[!]` over `[f]` over `[a]` over nothing)
//! 2. preferred region (`U`, `E`, `J`, then alphabetical, unknown last)
//! 3. shorter filename (fewer extra tags)
//! 4. alphabetical filename, so `PRG0` comes before `PRG1`
//!
//! Records with different clean titles are not duplicates of each other and
//! are ordered alphabetically by title, then by filename.

use std::cmp::Ordering;

use crate::record::RomRecord;
use crate::region::region_preference;

/// Compare two records; `Less` means `a` should be kept over `b`.
///
/// This is a strict total order: it returns `Equal` only when both records
/// have the same raw filename.
pub fn compare_records(a: &RomRecord, b: &RomRecord) -> Ordering {
    if a.clean_title() != b.clean_title() {
        return a
            .clean_title()
            .cmp(b.clean_title())
            .then_with(|| a.raw_name().cmp(b.raw_name()));
    }

    a.quality()
        .cmp(&b.quality())
        .then_with(|| region_preference(a.region(), b.region()))
        .then_with(|| compare_name_length(a.raw_name(), b.raw_name()))
}

/// Shorter names first; names of equal length fall back to alphabetical.
fn compare_name_length(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// True if `candidate` should replace `current` as the preferred record.
///
/// Ties keep `current`, so the first record seen wins.
pub fn is_preferred(candidate: &RomRecord, current: &RomRecord) -> bool {
    compare_records(candidate, current) == Ordering::Less
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;
