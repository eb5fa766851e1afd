//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rom_tidy_lib::{MultiRegionPolicy, Platform, Region};

#[derive(Parser)]
#[command(name = "rom-tidy")]
#[command(about = "Deduplicate and organize ROM collections by title", long_about = None)]
pub(crate) struct Cli {
    /// Root path containing ROM files (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Region layout and filter options shared by `organize` and `config set`.
#[derive(Args, Clone, Default)]
pub(crate) struct RegionArgs {
    /// Put each platform's output in per-region subdirectories
    #[arg(long, conflicts_with = "flat")]
    pub by_region: bool,

    /// Don't separate output by region
    #[arg(long)]
    pub flat: bool,

    /// Only keep ROMs for this region code (e.g. U, E, J)
    #[arg(long)]
    pub region: Option<Region>,

    /// Where multi-region ROMs (JU, UE, ...) go when a region filter is set:
    /// match, unknown, or exclude
    #[arg(long)]
    pub multi_region: Option<MultiRegionPolicy>,
}

impl RegionArgs {
    /// Tri-state region layout: `None` when neither flag was given.
    pub fn separate_by_region(&self) -> Option<bool> {
        match (self.by_region, self.flat) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy the best copy of every title into <root>/filtered/<platform>/
    Organize {
        /// Show the plan without copying anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Output directory (default: <root>/filtered)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Platform names or aliases (e.g., nes,snes,gb)
        #[arg(short, long, value_delimiter = ',')]
        platforms: Option<Vec<Platform>>,

        #[command(flatten)]
        regions: RegionArgs,
    },

    /// Show what the parser extracts from ROM filenames
    Inspect {
        /// Filenames to parse (nothing is read from disk)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List supported platforms and region codes
    List,

    /// Manage saved organize settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file contents
    Show,

    /// Print the settings file path
    Path,

    /// Save default organize settings
    Set {
        #[command(flatten)]
        regions: RegionArgs,

        /// Remove the saved region filter
        #[arg(long, conflicts_with = "region")]
        clear_region: bool,
    },
}
