use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_tidy_lib::settings::{
    OrganizeSettings, load_settings, load_settings_string, save_settings, settings_path,
};

use crate::cli_types::RegionArgs;
use crate::error::CliError;

/// Show the settings file and the effective organize settings.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "rom-tidy Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = load_settings()?;
    let unset = || "not set (ask)".if_supports_color(Stdout, |t| t.dimmed()).to_string();

    log::info!(
        "  separate_by_region: {}",
        settings
            .separate_by_region
            .map(|v| v.to_string())
            .unwrap_or_else(unset),
    );
    log::info!(
        "  region:             {}",
        settings
            .region
            .map(|r| format!("{} ({})", r.code(), r.name()))
            .unwrap_or_else(|| "any".if_supports_color(Stdout, |t| t.dimmed()).to_string()),
    );
    log::info!(
        "  multi_region:       {}",
        settings.region_filter().multi_region,
    );

    if let Some(contents) = load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Merge the given values into the saved settings.
pub(crate) fn run_config_set(regions: &RegionArgs, clear_region: bool) -> Result<(), CliError> {
    let update = OrganizeSettings {
        separate_by_region: regions.separate_by_region(),
        region: regions.region,
        multi_region: regions.multi_region,
    };
    if update == OrganizeSettings::default() && !clear_region {
        return Err(CliError::config(
            "nothing to set (use --by-region, --flat, --region, --multi-region or --clear-region)",
        ));
    }

    let mut settings = load_settings()?.merged_with(&update);
    if clear_region {
        settings.region = None;
    }
    save_settings(&settings)?;

    log::info!(
        "  {} Saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
