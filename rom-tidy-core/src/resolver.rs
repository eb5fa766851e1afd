//! Duplicate resolution: one survivor per `(platform, clean title)`.

use std::collections::HashMap;

use crate::Platform;
use crate::ranking::is_preferred;
use crate::record::RomRecord;

/// A record that lost to a better variant of the same title.
#[derive(Debug, Clone)]
pub struct RejectedDuplicate {
    pub record: RomRecord,
    /// Raw name of the record that was kept instead.
    pub kept: String,
}

/// Full outcome of a resolve pass.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// One record per `(platform, clean title)`, sorted by preference.
    pub survivors: Vec<RomRecord>,
    /// Records that lost to a better variant.
    pub duplicates: Vec<RejectedDuplicate>,
    /// Records whose extension matched no known platform.
    pub skipped: Vec<RomRecord>,
}

/// Pick the preferred record for each `(platform, clean title)` group.
///
/// Records without a platform are dropped. See [`resolve_with_report`] for
/// the rejected and skipped records; callers report the skipped ones.
pub fn resolve(records: impl IntoIterator<Item = RomRecord>) -> Vec<RomRecord> {
    resolve_with_report(records).survivors
}

/// Like [`resolve`], but also returns what was rejected and why.
///
/// Within a group the minimum under the ranking comparator wins; when two
/// records compare equal the one seen first is kept.
pub fn resolve_with_report(records: impl IntoIterator<Item = RomRecord>) -> Resolution {
    let mut resolution = Resolution::default();
    let mut group_index: HashMap<(Platform, String), usize> = HashMap::new();
    let mut losers: Vec<RomRecord> = Vec::new();

    for record in records {
        let Some(platform) = record.platform() else {
            log::debug!(
                "Skipping {:?}: extension does not match any known platform",
                record.raw_name()
            );
            resolution.skipped.push(record);
            continue;
        };

        let key = (platform, record.clean_title().to_string());
        match group_index.get(&key) {
            Some(&i) => {
                let current = &mut resolution.survivors[i];
                if is_preferred(&record, current) {
                    log::debug!("{:?} replaces {:?}", record.raw_name(), current.raw_name());
                    losers.push(std::mem::replace(current, record));
                } else {
                    log::debug!("{:?} loses to {:?}", record.raw_name(), current.raw_name());
                    losers.push(record);
                }
            }
            None => {
                group_index.insert(key, resolution.survivors.len());
                resolution.survivors.push(record);
            }
        }
    }

    // Each loser is reported against its group's final winner, not whichever
    // record happened to beat it first.
    for record in losers {
        let kept = record
            .platform()
            .and_then(|p| group_index.get(&(p, record.clean_title().to_string())))
            .map(|&i| resolution.survivors[i].raw_name().to_string())
            .unwrap_or_default();
        resolution.duplicates.push(RejectedDuplicate { record, kept });
    }

    resolution.survivors.sort();
    resolution
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
