use serde::{Deserialize, Serialize};

/// Dump-quality code from a bracketed filename tag.
///
/// Variants are declared in preference order, so the derived `Ord`
/// ranks `Verified` first and `Unmarked` last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum DumpQuality {
    /// `[!]` verified good dump.
    Verified,
    /// `[f]` fixed dump.
    Fixed,
    /// `[a]` alternate dump.
    Alternate,
    /// No quality tag present.
    #[default]
    Unmarked,
}

/// Tags checked in priority order; the first one found wins.
const QUALITY_TAGS: &[(&str, DumpQuality)] = &[
    ("[!]", DumpQuality::Verified),
    ("[f]", DumpQuality::Fixed),
    ("[a]", DumpQuality::Alternate),
];

impl DumpQuality {
    /// Detect the quality code in a filename by substring containment.
    pub fn detect(name: &str) -> Self {
        QUALITY_TAGS
            .iter()
            .find(|(tag, _)| name.contains(tag))
            .map(|&(_, quality)| quality)
            .unwrap_or_default()
    }

    /// The bracketed tag for this code, if it has one.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Verified => Some("[!]"),
            Self::Fixed => Some("[f]"),
            Self::Alternate => Some("[a]"),
            Self::Unmarked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Fixed => "fixed",
            Self::Alternate => "alternate",
            Self::Unmarked => "unmarked",
        }
    }
}

impl std::fmt::Display for DumpQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
