//! Persisted organize settings.
//!
//! Stored in `~/.config/rom-tidy/settings.toml` under an `[organize]` table:
//!
//! ```toml
//! [organize]
//! separate_by_region = true
//! region = "U"
//! multi_region = "unknown-bucket"
//! ```
//!
//! Every field is optional. A missing value means "not configured", which
//! lets the CLI fall back to asking the user.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rom_tidy_core::Region;

use crate::error::OrganizeError;
use crate::filter::{MultiRegionPolicy, RegionFilter};

/// Canonical path to the settings file: `~/.config/rom-tidy/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-tidy").join("settings.toml")
}

/// The `[organize]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separate_by_region: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<MultiRegionPolicy>,
}

impl OrganizeSettings {
    /// Region filter described by these settings.
    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter {
            region: self.region,
            multi_region: self.multi_region.unwrap_or_default(),
        }
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merged_with(&self, other: &OrganizeSettings) -> OrganizeSettings {
        OrganizeSettings {
            separate_by_region: other.separate_by_region.or(self.separate_by_region),
            region: other.region.or(self.region),
            multi_region: other.multi_region.or(self.multi_region),
        }
    }
}

/// Load the `[organize]` table from the default settings file.
pub fn load_settings() -> Result<OrganizeSettings, OrganizeError> {
    load_settings_from(&settings_path())
}

/// Load the `[organize]` table from `path`.
///
/// A missing file or missing table yields default (unset) settings.
pub fn load_settings_from(path: &Path) -> Result<OrganizeSettings, OrganizeError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(OrganizeSettings::default());
        }
        Err(e) => return Err(e.into()),
    };
    let doc: toml::Value = contents
        .parse()
        .map_err(|e: toml::de::Error| OrganizeError::settings(path, e.to_string()))?;
    match doc.get("organize") {
        Some(table) => table
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| OrganizeError::settings(path, e.to_string())),
        None => Ok(OrganizeSettings::default()),
    }
}

/// Save settings to the default settings file.
pub fn save_settings(settings: &OrganizeSettings) -> Result<(), OrganizeError> {
    save_settings_to(&settings_path(), settings)
}

/// Replace the `[organize]` table in `path`, keeping any other tables.
///
/// Written atomically via a temp file and rename.
pub fn save_settings_to(path: &Path, settings: &OrganizeSettings) -> Result<(), OrganizeError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default())),
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| OrganizeError::settings(path, "root is not a table"))?;
    let organize =
        toml::Value::try_from(settings).map_err(|e| OrganizeError::serialize(e.to_string()))?;
    table.insert("organize".to_string(), organize);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| OrganizeError::serialize(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
