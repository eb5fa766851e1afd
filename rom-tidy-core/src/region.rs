use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::RegionParseError;

/// Release region codes as they appear in GoodTools-style filenames,
/// e.g. the `U` in `Metroid (U) [!].nes`.
///
/// Combined codes such as `JU` are members in their own right; the parser
/// never splits them into their constituent markets.
///
/// Serialized as its code, so settings files read `region = "U"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    /// Australia
    Australia,
    /// Non-USA (Genesis)
    NonUsa,
    /// China
    China,
    /// Europe
    Europe,
    /// France
    France,
    /// French Canadian
    FrenchCanadian,
    /// Finland
    Finland,
    /// Germany
    Germany,
    /// Greece
    Greece,
    /// Hong Kong
    HongKong,
    /// Italy
    Italy,
    /// Japan
    Japan,
    /// Korea
    Korea,
    /// Netherlands
    Netherlands,
    /// Norway
    Norway,
    /// Russia
    Russia,
    /// Spain
    Spain,
    /// Sweden
    Sweden,
    /// USA
    Usa,
    /// United Kingdom
    UnitedKingdom,
    /// World
    World,
    /// Public domain
    PublicDomain,
    /// Unlicensed
    Unlicensed,
    /// Japan & USA
    JapanUsa,
    /// USA & Europe
    UsaEurope,
    /// Japan, USA & Europe
    JapanUsaEurope,
    /// Japan & Korea
    JapanKorea,
    /// USA & Brazil (NTSC)
    UsaBrazil,
    /// Marked as unknown in the filename
    Unknown,
}

/// All region variants in declaration order.
const ALL_REGIONS: &[Region] = &[
    Region::Australia,
    Region::NonUsa,
    Region::China,
    Region::Europe,
    Region::France,
    Region::FrenchCanadian,
    Region::Finland,
    Region::Germany,
    Region::Greece,
    Region::HongKong,
    Region::Italy,
    Region::Japan,
    Region::Korea,
    Region::Netherlands,
    Region::Norway,
    Region::Russia,
    Region::Spain,
    Region::Sweden,
    Region::Usa,
    Region::UnitedKingdom,
    Region::World,
    Region::PublicDomain,
    Region::Unlicensed,
    Region::JapanUsa,
    Region::UsaEurope,
    Region::JapanUsaEurope,
    Region::JapanKorea,
    Region::UsaBrazil,
    Region::Unknown,
];

impl Region {
    /// Canonical code as written inside the filename's parentheses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Australia => "A",
            Self::NonUsa => "B",
            Self::China => "C",
            Self::Europe => "E",
            Self::France => "F",
            Self::FrenchCanadian => "FC",
            Self::Finland => "FN",
            Self::Germany => "G",
            Self::Greece => "GR",
            Self::HongKong => "HK",
            Self::Italy => "I",
            Self::Japan => "J",
            Self::Korea => "K",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::Russia => "R",
            Self::Spain => "S",
            Self::Sweden => "SW",
            Self::Usa => "U",
            Self::UnitedKingdom => "UK",
            Self::World => "W",
            Self::PublicDomain => "PD",
            Self::Unlicensed => "Unl",
            Self::JapanUsa => "JU",
            Self::UsaEurope => "UE",
            Self::JapanUsaEurope => "JUE",
            Self::JapanKorea => "1",
            Self::UsaBrazil => "4",
            Self::Unknown => "Unk",
        }
    }

    /// Human-readable name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Australia => "Australia",
            Self::NonUsa => "Non-USA",
            Self::China => "China",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::FrenchCanadian => "French Canadian",
            Self::Finland => "Finland",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::HongKong => "Hong Kong",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Netherlands => "Netherlands",
            Self::Norway => "Norway",
            Self::Russia => "Russia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Usa => "USA",
            Self::UnitedKingdom => "United Kingdom",
            Self::World => "World",
            Self::PublicDomain => "Public Domain",
            Self::Unlicensed => "Unlicensed",
            Self::JapanUsa => "Japan & USA",
            Self::UsaEurope => "USA & Europe",
            Self::JapanUsaEurope => "Japan, USA & Europe",
            Self::JapanKorea => "Japan & Korea",
            Self::UsaBrazil => "USA & Brazil",
            Self::Unknown => "Unknown",
        }
    }

    /// Single-market regions covered by a combined code.
    ///
    /// Empty for every single-market region. Only the region filter looks
    /// at this; parsing and ranking treat combined codes as opaque.
    pub fn covers(&self) -> &'static [Region] {
        match self {
            Self::JapanUsa => &[Region::Japan, Region::Usa],
            Self::UsaEurope => &[Region::Usa, Region::Europe],
            Self::JapanUsaEurope => &[Region::Japan, Region::Usa, Region::Europe],
            Self::JapanKorea => &[Region::Japan, Region::Korea],
            Self::UsaBrazil => &[Region::Usa],
            _ => &[],
        }
    }

    /// True for combined codes like `JU` that name more than one market.
    pub fn is_multi_region(&self) -> bool {
        !self.covers().is_empty()
    }

    /// Match a code from inside a filename's parentheses, ignoring case.
    ///
    /// Returns `None` for anything that isn't a region code (dates,
    /// revision tags, free text). That is an ordinary outcome, not an error.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(code))
    }

    /// Preference bucket: `U`, then `E`, then `J`, then everything else,
    /// with an explicit `Unk` after every real region.
    fn preference_tier(&self) -> u8 {
        match self {
            Self::Usa => 0,
            Self::Europe => 1,
            Self::Japan => 2,
            Self::Unknown => 4,
            _ => 3,
        }
    }

    /// Compare two regions by preference (lesser = preferred).
    ///
    /// Regions outside the top three fall back to alphabetical order of
    /// their codes.
    pub fn preference_cmp(&self, other: &Self) -> Ordering {
        self.preference_tier()
            .cmp(&other.preference_tier())
            .then_with(|| {
                self.code()
                    .to_ascii_lowercase()
                    .cmp(&other.code().to_ascii_lowercase())
            })
    }

    /// All region variants.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }
}

/// Compare optional regions by preference; an absent region sorts last.
pub fn region_preference(a: Option<Region>, b: Option<Region>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.preference_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Region {
    type Err = RegionParseError;

    /// Parse a region from its code (`u`, `JU`) or its full name (`europe`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(region) = Self::from_code(s.trim()) {
            return Ok(region);
        }
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = RegionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.code().to_string()
    }
}
