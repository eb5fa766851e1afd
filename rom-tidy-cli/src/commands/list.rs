use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_tidy_lib::{Platform, Region, UNKNOWN_REGION_DIR};

pub(crate) fn run_list() {
    log::info!("Supported platforms:");
    log::info!("");

    for platform in Platform::all() {
        log::info!(
            "  {} [{}]",
            platform
                .display_name()
                .if_supports_color(Stdout, |t| t.bold()),
            format!(".{}", platform.extension()).if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Output folder: {}", platform.dir_name());
        log::info!("    Aliases: {}", platform.aliases().join(", "));
    }

    log::info!("");
    log::info!("Region codes:");
    log::info!("");

    for region in Region::all() {
        let covers = if region.is_multi_region() {
            let codes: Vec<&str> = region.covers().iter().map(|r| r.code()).collect();
            format!(
                " {}",
                format!("(covers {})", codes.join(", ")).if_supports_color(Stdout, |t| t.dimmed())
            )
        } else {
            String::new()
        };
        log::info!(
            "  {:<4} {}{}",
            region.code().if_supports_color(Stdout, |t| t.bold()),
            region.name(),
            covers,
        );
    }

    log::info!("");
    log::info!(
        "{}",
        format!("Files without a region code go to {UNKNOWN_REGION_DIR}/ when separating by region.")
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
}
