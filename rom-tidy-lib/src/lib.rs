//! Directory walk, filtering, and copy steps for organizing ROM collections.
//!
//! Re-exports the core parsing and ranking types so frontends only need to
//! depend on this crate.

pub mod error;
pub mod filter;
pub mod fs_ops;
pub mod organize;
pub mod scanner;
pub mod settings;
pub mod util;

pub use error::OrganizeError;
pub use filter::{MultiRegionPolicy, RegionDir, RegionFilter, UNKNOWN_REGION_DIR};
pub use fs_ops::{DirListing, FileOps, LocalFs};
pub use organize::{
    CopyAction, OrganizeOptions, OrganizePlan, OrganizeProgress, OrganizeSummary, execute_plan,
    plan_organize,
};

pub use rom_tidy_core::{
    DumpQuality, Platform, PlatformParseError, Region, RegionParseError, RejectedDuplicate,
    Resolution, RomRecord, compare_records, parse_rom_name, resolve, resolve_with_report,
};
