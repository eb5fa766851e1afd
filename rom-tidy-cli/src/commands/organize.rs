use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_tidy_lib::settings::{OrganizeSettings, load_settings};
use rom_tidy_lib::util::{format_bytes, plural};
use rom_tidy_lib::{
    LocalFs, OrganizeOptions, OrganizePlan, OrganizeProgress, OrganizeSummary, Platform,
    execute_plan, plan_organize,
};

use crate::cli_types::RegionArgs;
use crate::error::CliError;
use crate::spinner;

pub(crate) fn run_organize(
    root: Option<PathBuf>,
    dry_run: bool,
    output: Option<PathBuf>,
    platforms: Option<Vec<Platform>>,
    regions: &RegionArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let root_path = match root {
        Some(r) => r,
        None => std::env::current_dir()?,
    };
    // The walk doesn't follow symlinks, so resolve one given as the root.
    let root_path = std::fs::canonicalize(&root_path).unwrap_or(root_path);

    let saved = load_settings().unwrap_or_else(|e| {
        log::warn!(
            "  {} Ignoring saved settings: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            e,
        );
        OrganizeSettings::default()
    });
    let overrides = OrganizeSettings {
        separate_by_region: regions.separate_by_region(),
        region: regions.region,
        multi_region: regions.multi_region,
    };
    let settings = saved.merged_with(&overrides);

    let separate_by_region = match settings.separate_by_region {
        Some(v) => v,
        None => ask_separate_by_region()?,
    };

    let options = OrganizeOptions {
        separate_by_region,
        region_filter: settings.region_filter(),
        platforms,
        output_dir: output,
    };

    log::info!(
        "Scanning ROMs in: {}",
        root_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "Output: {}",
        options
            .output_dir_for(&root_path)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(region) = options.region_filter.region {
        log::info!(
            "{}",
            format!(
                "Region filter: {} (multi-region: {})",
                region,
                options.region_filter.multi_region
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be copied".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let pb = spinner::scan_spinner(quiet);
    let scan_progress = |progress: OrganizeProgress| match progress {
        OrganizeProgress::ScanningDirectory { ref path } => {
            pb.set_message(format!("Scanning {}", path.display()));
        }
        OrganizeProgress::Discovered { file_count } => {
            pb.set_message(format!("Found {file_count} files"));
        }
        OrganizeProgress::Resolved {
            survivors,
            duplicates,
        } => {
            pb.set_message(format!(
                "{survivors} titles, {duplicates} duplicates"
            ));
        }
        _ => {}
    };
    let plan = plan_organize(&root_path, &options, &LocalFs, &scan_progress);
    pb.finish_and_clear();
    let plan = plan?;

    let detail = if dry_run { Level::Info } else { Level::Debug };
    print_plan(&plan, detail);

    if dry_run {
        log::info!("");
        print_plan_totals(&plan);
        return Ok(());
    }

    let bar = spinner::copy_bar(plan.actions.len(), quiet);
    let copy_progress = |progress: OrganizeProgress| match progress {
        OrganizeProgress::Copying {
            file_name,
            file_index,
            ..
        } => {
            bar.set_position(file_index as u64);
            bar.set_message(file_name);
        }
        OrganizeProgress::Done => bar.finish_and_clear(),
        _ => {}
    };
    let summary = execute_plan(&plan, &LocalFs, &copy_progress);
    bar.finish_and_clear();

    log::info!("");
    print_summary(&summary);
    Ok(())
}

/// Ask whether to separate output by region.
///
/// Only asks on an interactive terminal; otherwise falls back to a flat layout.
fn ask_separate_by_region() -> Result<bool, CliError> {
    if !std::io::stdin().is_terminal() {
        log::info!(
            "{}",
            "Region layout not configured; using a flat layout (see `rom-tidy config set`)"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(false);
    }

    // Raw print: user interaction
    print!("Separate output by region? [y/N] ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
}

/// Print what an organize run will do, per file, at `detail` level.
///
/// Problems (unknown platforms, conflicts, unreadable directories) are
/// always warnings.
fn print_plan(plan: &OrganizePlan, detail: Level) {
    for action in &plan.actions {
        let rel = action
            .dest
            .strip_prefix(&plan.output_dir)
            .unwrap_or(&action.dest);
        log::log!(
            detail,
            "  {} {} {} {}",
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            action
                .record
                .raw_name()
                .if_supports_color(Stdout, |t| t.dimmed()),
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            rel.display().if_supports_color(Stdout, |t| t.bold()),
        );
    }

    for dup in &plan.duplicates {
        log::log!(
            detail,
            "  {} {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.dimmed()),
            dup.record
                .raw_name()
                .if_supports_color(Stdout, |t| t.dimmed()),
            format!("(duplicate of {})", dup.kept).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for (record, reason) in &plan.filtered_out {
        log::log!(
            detail,
            "  {} {} {}",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            record.raw_name().if_supports_color(Stdout, |t| t.dimmed()),
            format!("({reason})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for record in &plan.unknown_platform {
        log::warn!(
            "  {} {} (unknown platform)",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            file_name(record.source_path()).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for (_, msg) in &plan.conflicts {
        log::warn!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            msg,
        );
    }

    for error in &plan.scan_errors {
        log::warn!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }
}

fn print_plan_totals(plan: &OrganizePlan) {
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} found, {} would be copied",
        plural(plan.discovered, "file", "files"),
        plan.actions.len(),
    );
    print_skip_counts(
        plan.duplicates.len(),
        plan.filtered_out.len(),
        plan.other_platforms.len(),
    );
}

fn print_summary(summary: &OrganizeSummary) {
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} copied ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        plural(summary.copied, "file", "files"),
        format_bytes(summary.bytes_copied),
    );
    if summary.already_present > 0 {
        log::info!(
            "  {} {} already present",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.already_present,
        );
    }
    print_skip_counts(
        summary.duplicates,
        summary.filtered_out,
        summary.other_platforms,
    );
    if summary.unknown_platform > 0 {
        log::warn!(
            "  {} {} with unknown platform",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            plural(summary.unknown_platform, "file", "files"),
        );
    }
    for conflict in &summary.conflicts {
        log::warn!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            conflict,
        );
    }
    for error in &summary.errors {
        log::warn!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }
}

fn print_skip_counts(duplicates: usize, filtered_out: usize, other_platforms: usize) {
    if duplicates > 0 {
        log::info!(
            "  {} {} skipped",
            "\u{2718}".if_supports_color(Stdout, |t| t.dimmed()),
            plural(duplicates, "duplicate", "duplicates"),
        );
    }
    if filtered_out > 0 {
        log::info!(
            "  {} {} outside the region filter",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            plural(filtered_out, "file", "files"),
        );
    }
    if other_platforms > 0 {
        log::info!(
            "  {} {} of unselected platforms",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            plural(other_platforms, "file", "files"),
        );
    }
}
