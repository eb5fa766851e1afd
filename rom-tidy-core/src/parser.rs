//! Parser for GoodTools-style ROM filenames.
//!
//! Filenames carry their metadata inline:
//! ```text
//! Title (Region) (other tags) [quality].ext
//! ```
//!
//! Only the first parenthesized group is considered for the region. Every
//! extraction degrades to `None` or a default instead of failing, because
//! an arbitrary directory tree is full of names that don't follow the
//! convention.

use std::path::PathBuf;

use crate::quality::DumpQuality;
use crate::record::RomRecord;
use crate::{Platform, Region};

/// Fields derived from a filename, before they are attached to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedFields {
    pub region: Option<Region>,
    pub platform: Option<Platform>,
    pub quality: DumpQuality,
    pub clean_title: String,
}

/// Parse a raw filename into a [`RomRecord`].
///
/// # Examples
///
/// ```
/// use rom_tidy_core::{parse_rom_name, DumpQuality, Platform, Region};
///
/// let rom = parse_rom_name("Metroid (U) [!].nes", "/roms/Metroid (U) [!].nes");
/// assert_eq!(rom.clean_title(), "Metroid");
/// assert_eq!(rom.region(), Some(Region::Usa));
/// assert_eq!(rom.platform(), Some(Platform::Nes));
/// assert_eq!(rom.quality(), DumpQuality::Verified);
/// ```
pub fn parse_rom_name(raw_name: &str, source_path: impl Into<PathBuf>) -> RomRecord {
    RomRecord::parse(raw_name, source_path)
}

pub(crate) fn parse_fields(raw_name: &str) -> ParsedFields {
    let group = first_paren_group(raw_name);
    let region = group.and_then(|(_, content)| Region::from_code(content));

    // The region group is the first '(' in the name, so everything before
    // it is the title.
    let clean_title = match (region, group) {
        (Some(_), Some((start, _))) => raw_name[..start].trim().to_string(),
        _ => raw_name.to_string(),
    };

    ParsedFields {
        region,
        platform: file_extension(raw_name).and_then(Platform::from_extension),
        quality: DumpQuality::detect(raw_name),
        clean_title,
    }
}

/// Find the first `(`...`)` group.
///
/// Returns the byte index of the opening parenthesis and the text between
/// the parentheses. Nesting is not supported: the group ends at the first
/// `)` after the first `(`. An unterminated `(` yields `None`.
pub fn first_paren_group(name: &str) -> Option<(usize, &str)> {
    let open = name.find('(')?;
    let content_start = open + 1;
    let close = name[content_start..].find(')')? + content_start;
    Some((open, &name[content_start..close]))
}

/// Substring after the last `.`, or `None` if the name has no dot.
pub fn file_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i + 1..])
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
