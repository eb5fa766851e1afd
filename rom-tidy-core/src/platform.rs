use crate::error::PlatformParseError;

/// Cartridge platforms recognized by file extension.
///
/// Each variant knows its extension, the directory its files are copied
/// into, a display name, and the aliases accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Nes,
    Snes,
    Genesis,
    N64,
    GameBoy,
    GameBoyColor,
    Gba,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Nes,
    Platform::Snes,
    Platform::Genesis,
    Platform::N64,
    Platform::GameBoy,
    Platform::GameBoyColor,
    Platform::Gba,
];

impl Platform {
    /// File extension (without the dot) that identifies this platform.
    ///
    /// Matching is exact and case-sensitive.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "smc",
            Self::Genesis => "gen",
            Self::N64 => "z64",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::Gba => "gba",
        }
    }

    /// Name of the output subdirectory for this platform.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::Genesis => "genesis",
            Self::N64 => "n64",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::Gba => "gba",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::Genesis => "Sega Genesis / Mega Drive",
            Self::N64 => "Nintendo 64",
            Self::GameBoy => "Game Boy",
            Self::GameBoyColor => "Game Boy Color",
            Self::Gba => "Game Boy Advance",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// The output directory name always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes", "famicom", "fc"],
            Self::Snes => &["snes", "smc", "sfc", "super famicom", "super nintendo"],
            Self::Genesis => &["genesis", "gen", "megadrive", "mega drive", "md"],
            Self::N64 => &["n64", "z64", "nintendo 64"],
            Self::GameBoy => &["gb", "gameboy", "game boy"],
            Self::GameBoyColor => &["gbc", "gameboy color", "game boy color"],
            Self::Gba => &["gba", "game boy advance", "gameboy advance"],
        }
    }

    /// Look up the platform for a file extension (exact, case-sensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        ALL_PLATFORMS.iter().copied().find(|p| p.extension() == ext)
    }

    /// All platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
