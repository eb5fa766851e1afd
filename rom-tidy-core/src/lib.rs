//! Filename metadata parsing and duplicate ranking for ROM collections.
//!
//! Everything in this crate is pure: no filesystem access, no fallible
//! operations on filenames. See `rom-tidy-lib` for the directory walk and
//! copy steps built on top of it.

pub mod error;
pub mod parser;
pub mod platform;
pub mod quality;
pub mod ranking;
pub mod record;
pub mod region;
pub mod resolver;

pub use error::{PlatformParseError, RegionParseError};
pub use parser::parse_rom_name;
pub use platform::Platform;
pub use quality::DumpQuality;
pub use ranking::compare_records;
pub use record::RomRecord;
pub use region::Region;
pub use resolver::{RejectedDuplicate, Resolution, resolve, resolve_with_report};
