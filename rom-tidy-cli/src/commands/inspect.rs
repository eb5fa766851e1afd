use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_tidy_lib::organize::destination_path;
use rom_tidy_lib::{RegionFilter, parse_rom_name};

/// Print the parsed fields of each filename, without touching the disk.
pub(crate) fn run_inspect(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            log::info!("");
        }
        let record = parse_rom_name(name, name);

        log::info!("{}", name.if_supports_color(Stdout, |t| t.bold()));
        log::info!("  Title:    {}", record.clean_title());

        match record.region() {
            Some(region) => log::info!(
                "  Region:   {} {}",
                region.code().if_supports_color(Stdout, |t| t.cyan()),
                format!("({})", region.name()).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  Region:   {}",
                "none".if_supports_color(Stdout, |t| t.dimmed())
            ),
        }

        match record.platform() {
            Some(platform) => log::info!(
                "  Platform: {} {}",
                platform.display_name().if_supports_color(Stdout, |t| t.cyan()),
                format!("({})", platform.dir_name()).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::warn!(
                "  Platform: {}",
                "unknown".if_supports_color(Stdout, |t| t.yellow())
            ),
        }

        log::info!("  Quality:  {}", record.quality().label());

        if let Some(dest) = destination_path(Path::new(""), &record, None) {
            log::info!("  Output:   {}", dest.display());
        }
        let region_dir = RegionFilter::default().place(record.region()).ok();
        if let Some(dest) = destination_path(Path::new(""), &record, region_dir) {
            log::info!(
                "{}",
                format!("            by region: {}", dest.display())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
