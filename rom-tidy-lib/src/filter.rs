//! Region filtering and output-directory placement.

use serde::{Deserialize, Serialize};

use rom_tidy_core::Region;

use crate::error::OrganizeError;

/// Directory name used when a file's region can't be placed.
pub const UNKNOWN_REGION_DIR: &str = "_unknown_region";

/// What to do with multi-region files (`JU`, `UE`, ...) when a region filter
/// is active and the file's code covers the filtered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiRegionPolicy {
    /// Treat the file as a match and place it under the filtered region.
    Match,
    /// Keep the file, but place it in the unknown-region bucket.
    #[default]
    UnknownBucket,
    /// Drop the file.
    Exclude,
}

impl MultiRegionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::UnknownBucket => "unknown-bucket",
            Self::Exclude => "exclude",
        }
    }
}

impl std::fmt::Display for MultiRegionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for MultiRegionPolicy {
    type Err = OrganizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "match" => Ok(Self::Match),
            "unknown" | "unknown-bucket" | "bucket" => Ok(Self::UnknownBucket),
            "exclude" | "skip" => Ok(Self::Exclude),
            _ => Err(OrganizeError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Region subdirectory a file is copied into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionDir {
    Code(Region),
    Unknown,
}

impl RegionDir {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Code(region) => region.code(),
            Self::Unknown => UNKNOWN_REGION_DIR,
        }
    }
}

/// Why a file was left out by the region filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// Region doesn't match the filter at all.
    OtherRegion(Region),
    /// Multi-region code covering the filter, dropped by `MultiRegionPolicy::Exclude`.
    MultiRegionExcluded(Region),
}

impl std::fmt::Display for FilterReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OtherRegion(r) => write!(f, "region {} does not match filter", r.code()),
            Self::MultiRegionExcluded(r) => {
                write!(f, "multi-region code {} excluded by policy", r.code())
            }
        }
    }
}

/// Active region filter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub region: Option<Region>,
    pub multi_region: MultiRegionPolicy,
}

impl RegionFilter {
    /// Decide where a file with `region` goes, or why it is dropped.
    ///
    /// Without a filter every file is kept under its own code. Files with no
    /// parsed region, or an explicit `Unk`, always go to the unknown bucket.
    pub fn place(&self, region: Option<Region>) -> Result<RegionDir, FilterReason> {
        let Some(region) = region.filter(|r| *r != Region::Unknown) else {
            return Ok(RegionDir::Unknown);
        };
        let Some(wanted) = self.region else {
            return Ok(RegionDir::Code(region));
        };

        if region == wanted {
            return Ok(RegionDir::Code(region));
        }
        if region.covers().contains(&wanted) {
            return match self.multi_region {
                MultiRegionPolicy::Match => Ok(RegionDir::Code(wanted)),
                MultiRegionPolicy::UnknownBucket => Ok(RegionDir::Unknown),
                MultiRegionPolicy::Exclude => Err(FilterReason::MultiRegionExcluded(region)),
            };
        }
        Err(FilterReason::OtherRegion(region))
    }
}
