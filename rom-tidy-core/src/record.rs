use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::parser;
use crate::quality::DumpQuality;
use crate::ranking::compare_records;
use crate::{Platform, Region};

/// A ROM file described by the metadata in its filename.
///
/// Every derived field is computed once from `raw_name` when the record is
/// parsed; there are no setters. Equality and ordering follow the raw name
/// and the ranking rules, so two records with the same filename are equal
/// even if they were found in different directories.
#[derive(Debug, Clone)]
pub struct RomRecord {
    raw_name: String,
    source_path: PathBuf,
    region: Option<Region>,
    platform: Option<Platform>,
    quality: DumpQuality,
    clean_title: String,
}

impl RomRecord {
    /// Parse a filename into a record. See [`parser::parse_rom_name`].
    pub fn parse(raw_name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        let raw_name = raw_name.into();
        let fields = parser::parse_fields(&raw_name);
        Self {
            raw_name,
            source_path: source_path.into(),
            region: fields.region,
            platform: fields.platform,
            quality: fields.quality,
            clean_title: fields.clean_title,
        }
    }

    /// The filename exactly as discovered.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Full path to the source file.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn quality(&self) -> DumpQuality {
        self.quality
    }

    /// Title with the region group and everything after it removed.
    ///
    /// Equal to the raw name when no region could be parsed.
    pub fn clean_title(&self) -> &str {
        &self.clean_title
    }

    /// Substring after the last `.` of the raw name, if any.
    pub fn extension(&self) -> Option<&str> {
        parser::file_extension(&self.raw_name)
    }
}

impl PartialEq for RomRecord {
    fn eq(&self, other: &Self) -> bool {
        self.raw_name == other.raw_name
    }
}

impl Eq for RomRecord {}

impl std::hash::Hash for RomRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw_name.hash(state);
    }
}

impl PartialOrd for RomRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RomRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_records(self, other)
    }
}

impl std::fmt::Display for RomRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_name)
    }
}
