//! Plan and execute an organize run: walk, parse, filter, dedupe, copy.
//!
//! Planning never writes anything. Execution creates output directories one
//! level at a time and copies each survivor, collecting per-file failures in
//! the returned [`OrganizeSummary`] instead of stopping.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use rom_tidy_core::{Platform, RejectedDuplicate, RomRecord, resolve_with_report};

use crate::error::OrganizeError;
use crate::filter::{FilterReason, RegionDir, RegionFilter};
use crate::fs_ops::{DirListing, FileOps};
use crate::scanner::discover_roms;

/// Default output directory name, created under the source root.
pub const OUTPUT_DIR_NAME: &str = "filtered";

/// Options controlling an organize run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeOptions {
    /// Add a region subdirectory under each platform directory.
    pub separate_by_region: bool,
    /// Optional region filter and multi-region policy.
    pub region_filter: RegionFilter,
    /// Only organize these platforms (all when `None`).
    pub platforms: Option<Vec<Platform>>,
    /// Output directory (defaults to `<root>/filtered`).
    pub output_dir: Option<PathBuf>,
}

impl OrganizeOptions {
    /// Resolve the output directory for a source root.
    pub fn output_dir_for(&self, root: &Path) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| root.join(OUTPUT_DIR_NAME))
    }

    fn wants_platform(&self, platform: Platform) -> bool {
        self.platforms
            .as_ref()
            .is_none_or(|platforms| platforms.contains(&platform))
    }
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum OrganizeProgress {
    /// Listing a directory during the walk
    ScanningDirectory { path: PathBuf },
    /// Walk finished
    Discovered { file_count: usize },
    /// Duplicate resolution finished
    Resolved { survivors: usize, duplicates: usize },
    /// Copying a survivor
    Copying {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    /// Finished all copies
    Done,
}

/// A planned copy of one surviving record.
#[derive(Debug, Clone)]
pub struct CopyAction {
    pub record: RomRecord,
    /// Destination file path under the output directory
    pub dest: PathBuf,
    /// Region subdirectory, when separating by region
    pub region_dir: Option<RegionDir>,
}

/// Everything an organize run would do, computed without side effects.
#[derive(Debug)]
pub struct OrganizePlan {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    /// Number of files found by the walk
    pub discovered: usize,
    pub actions: Vec<CopyAction>,
    /// Variants that lost to a better copy of the same title
    pub duplicates: Vec<RejectedDuplicate>,
    /// Files whose extension matches no known platform
    pub unknown_platform: Vec<RomRecord>,
    /// Files left out by the region filter
    pub filtered_out: Vec<(RomRecord, FilterReason)>,
    /// Files of platforms not selected for this run
    pub other_platforms: Vec<RomRecord>,
    /// Survivors that would overwrite an earlier survivor's destination
    pub conflicts: Vec<(PathBuf, String)>,
    /// Directories that couldn't be read during the walk
    pub scan_errors: Vec<String>,
}

/// Summary of an executed organize run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    pub discovered: usize,
    pub copied: usize,
    pub bytes_copied: u64,
    /// Destinations that already existed (left untouched)
    pub already_present: usize,
    pub duplicates: usize,
    pub unknown_platform: usize,
    pub filtered_out: usize,
    /// Files of platforms not selected for this run
    pub other_platforms: usize,
    pub errors: Vec<String>,
    pub conflicts: Vec<String>,
}

/// Walk `root`, parse every filename, apply filters, and resolve duplicates.
///
/// Fails only if `root` itself is not a readable directory. Everything below
/// the root degrades to a reported skip.
pub fn plan_organize(
    root: &Path,
    options: &OrganizeOptions,
    fs: &dyn FileOps,
    progress: &dyn Fn(OrganizeProgress),
) -> Result<OrganizePlan, OrganizeError> {
    match fs.list_dir(root) {
        Ok(DirListing::Children(_)) => {}
        Ok(DirListing::NotADirectory) => {
            return Err(OrganizeError::NotADirectory(root.to_path_buf()));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(OrganizeError::NotADirectory(root.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    }

    let output_dir = options.output_dir_for(root);
    let discovery = discover_roms(fs, root, Some(output_dir.as_path()), &mut |path| {
        progress(OrganizeProgress::ScanningDirectory {
            path: path.to_path_buf(),
        })
    });
    let discovered = discovery.records.len();
    progress(OrganizeProgress::Discovered {
        file_count: discovered,
    });

    // Filters run before resolution so an out-of-filter variant can't
    // knock out the copy we actually want.
    let mut candidates = Vec::with_capacity(discovered);
    let mut filtered_out = Vec::new();
    let mut other_platforms = Vec::new();
    // Placement depends only on the filename, so it is decided once here.
    let mut placements: HashMap<String, RegionDir> = HashMap::new();
    for record in discovery.records {
        if let Some(platform) = record.platform() {
            if !options.wants_platform(platform) {
                other_platforms.push(record);
                continue;
            }
            match options.region_filter.place(record.region()) {
                Ok(dir) => {
                    placements.insert(record.raw_name().to_string(), dir);
                }
                Err(reason) => {
                    log::debug!("Filtered out {:?}: {}", record.raw_name(), reason);
                    filtered_out.push((record, reason));
                    continue;
                }
            }
        }
        candidates.push(record);
    }

    let resolution = resolve_with_report(candidates);
    progress(OrganizeProgress::Resolved {
        survivors: resolution.survivors.len(),
        duplicates: resolution.duplicates.len(),
    });

    let mut actions: Vec<CopyAction> = Vec::with_capacity(resolution.survivors.len());
    let mut conflicts = Vec::new();
    let mut taken: HashMap<PathBuf, usize> = HashMap::new();

    for record in resolution.survivors {
        let region_dir = options.separate_by_region.then(|| {
            placements
                .get(record.raw_name())
                .copied()
                .unwrap_or(RegionDir::Unknown)
        });
        let Some(dest) = destination_path(&output_dir, &record, region_dir) else {
            continue;
        };

        if let Some(&first) = taken.get(&dest) {
            conflicts.push((
                dest.clone(),
                format!(
                    "{:?} and {:?} both map to {}",
                    actions[first].record.raw_name(),
                    record.raw_name(),
                    dest.display()
                ),
            ));
            continue;
        }
        taken.insert(dest.clone(), actions.len());
        actions.push(CopyAction {
            record,
            dest,
            region_dir,
        });
    }

    Ok(OrganizePlan {
        root: root.to_path_buf(),
        output_dir,
        discovered,
        actions,
        duplicates: resolution.duplicates,
        unknown_platform: resolution.skipped,
        filtered_out,
        other_platforms,
        conflicts,
        scan_errors: discovery.errors,
    })
}

/// Compute `<output>/<platform>/[<region>/]<title>.<ext>` for a record.
///
/// Returns `None` for records without a platform. When the title is the
/// whole filename (no region parsed), its extension is not repeated.
pub fn destination_path(
    output_dir: &Path,
    record: &RomRecord,
    region_dir: Option<RegionDir>,
) -> Option<PathBuf> {
    let platform = record.platform()?;
    let ext = record.extension().unwrap_or(platform.extension());

    let base = if record.clean_title().is_empty() {
        record.raw_name()
    } else {
        record.clean_title()
    };
    let dotted_ext = format!(".{ext}");
    let base = base.strip_suffix(dotted_ext.as_str()).unwrap_or(base);

    let mut dest = output_dir.join(platform.dir_name());
    if let Some(region_dir) = region_dir {
        dest.push(region_dir.dir_name());
    }
    dest.push(format!("{base}{dotted_ext}"));
    Some(dest)
}

/// Create output directories and copy every planned file.
pub fn execute_plan(
    plan: &OrganizePlan,
    fs: &dyn FileOps,
    progress: &dyn Fn(OrganizeProgress),
) -> OrganizeSummary {
    let mut summary = OrganizeSummary {
        discovered: plan.discovered,
        duplicates: plan.duplicates.len(),
        unknown_platform: plan.unknown_platform.len(),
        filtered_out: plan.filtered_out.len(),
        other_platforms: plan.other_platforms.len(),
        errors: plan.scan_errors.clone(),
        conflicts: plan.conflicts.iter().map(|(_, msg)| msg.clone()).collect(),
        ..Default::default()
    };
    let mut dirs = DirCreator::new(fs);
    let total = plan.actions.len();

    for (i, action) in plan.actions.iter().enumerate() {
        progress(OrganizeProgress::Copying {
            file_name: action.record.raw_name().to_string(),
            file_index: i,
            total,
        });

        if let Err(msg) = dirs.ensure_parents(&plan.output_dir, &action.dest) {
            summary.errors.push(format!(
                "Skipped {:?}: {}",
                action.record.raw_name(),
                msg
            ));
            continue;
        }

        match fs.copy_file(action.record.source_path(), &action.dest) {
            Ok(bytes) => {
                log::debug!(
                    "Copied {} -> {}",
                    action.record.source_path().display(),
                    action.dest.display()
                );
                summary.copied += 1;
                summary.bytes_copied += bytes;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::warn!("Already exists, not overwriting: {}", action.dest.display());
                summary.already_present += 1;
            }
            Err(e) => {
                log::warn!(
                    "Failed to copy {} -> {}: {}",
                    action.record.source_path().display(),
                    action.dest.display(),
                    e
                );
                summary.errors.push(format!(
                    "Failed to copy {:?} -> {}: {}",
                    action.record.raw_name(),
                    action.dest.display(),
                    e
                ));
            }
        }
    }

    progress(OrganizeProgress::Done);
    summary
}

/// Creates directories one level at a time, remembering what exists.
struct DirCreator<'a> {
    fs: &'a dyn FileOps,
    created: HashSet<PathBuf>,
    failed: HashMap<PathBuf, String>,
}

impl<'a> DirCreator<'a> {
    fn new(fs: &'a dyn FileOps) -> Self {
        Self {
            fs,
            created: HashSet::new(),
            failed: HashMap::new(),
        }
    }

    /// Create every directory from `output_dir` down to `dest`'s parent.
    fn ensure_parents(&mut self, output_dir: &Path, dest: &Path) -> Result<(), String> {
        let Some(parent) = dest.parent() else {
            return Ok(());
        };
        let mut chain: Vec<&Path> = parent
            .ancestors()
            .take_while(|p| p.starts_with(output_dir))
            .collect();
        chain.reverse();

        for dir in chain {
            self.ensure(dir)?;
        }
        Ok(())
    }

    fn ensure(&mut self, dir: &Path) -> Result<(), String> {
        if self.created.contains(dir) {
            return Ok(());
        }
        if let Some(msg) = self.failed.get(dir) {
            return Err(msg.clone());
        }
        match self.fs.create_dir(dir) {
            Ok(()) => {
                log::debug!("Created {}", dir.display());
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                let msg = format!("cannot create {}: {}", dir.display(), e);
                log::warn!("{}", msg);
                self.failed.insert(dir.to_path_buf(), msg.clone());
                return Err(msg);
            }
        }
        self.created.insert(dir.to_path_buf());
        Ok(())
    }
}
