use std::cell::RefCell;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rom_tidy_lib::{
    DirListing, FileOps, LocalFs, MultiRegionPolicy, OrganizeError, OrganizeOptions, Platform,
    Region, RegionFilter, execute_plan, plan_organize,
};

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, rel.as_bytes()).unwrap();
}

fn no_progress(_: rom_tidy_lib::OrganizeProgress) {}

fn dest_names(plan: &rom_tidy_lib::OrganizePlan) -> Vec<PathBuf> {
    plan.actions
        .iter()
        .map(|a| a.dest.strip_prefix(&plan.output_dir).unwrap().to_path_buf())
        .collect()
}

#[test]
fn dedupes_and_copies_into_platform_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "nes/Zelda (U) [!].nes");
    touch(root, "nes/Zelda (E) [!].nes");
    touch(root, "nes/more/Zelda (U) [a].nes");
    touch(root, "snes/Super Metroid (JU) [!].smc");
    touch(root, "notes.txt");

    let plan = plan_organize(root, &OrganizeOptions::default(), &LocalFs, &no_progress).unwrap();
    assert_eq!(plan.discovered, 5);
    assert_eq!(plan.duplicates.len(), 2);
    assert_eq!(plan.unknown_platform.len(), 1);
    assert_eq!(
        dest_names(&plan),
        vec![
            PathBuf::from("snes/Super Metroid.smc"),
            PathBuf::from("nes/Zelda.nes"),
        ]
    );

    let summary = execute_plan(&plan, &LocalFs, &no_progress);
    assert_eq!(summary.copied, 2);
    assert!(summary.errors.is_empty(), "{:?}", summary.errors);

    let copied = fs::read(root.join("filtered/nes/Zelda.nes")).unwrap();
    assert_eq!(copied, b"nes/Zelda (U) [!].nes");
    assert!(root.join("filtered/snes/Super Metroid.smc").is_file());
}

#[test]
fn separates_by_region_with_unknown_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Metroid (E) [!].nes");
    touch(root, "Homebrew.gb");

    let options = OrganizeOptions {
        separate_by_region: true,
        ..Default::default()
    };
    let plan = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();
    let summary = execute_plan(&plan, &LocalFs, &no_progress);

    assert_eq!(summary.copied, 2);
    assert!(root.join("filtered/nes/E/Metroid.nes").is_file());
    assert!(root.join("filtered/gb/_unknown_region/Homebrew.gb").is_file());
}

#[test]
fn region_filter_runs_before_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Zelda (U) [!].nes");
    touch(root, "Zelda (E) [a].nes");
    touch(root, "Excitebike (JU) [!].nes");

    let options = OrganizeOptions {
        separate_by_region: true,
        region_filter: RegionFilter {
            region: Some(Region::Europe),
            multi_region: MultiRegionPolicy::default(),
        },
        ..Default::default()
    };
    let plan = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();

    // The USA copy is better, but it doesn't pass the filter, so the European
    // one survives. JU doesn't cover Europe and is dropped.
    assert_eq!(dest_names(&plan), vec![PathBuf::from("nes/E/Zelda.nes")]);
    assert_eq!(plan.filtered_out.len(), 2);
    assert!(plan.duplicates.is_empty());
}

#[test]
fn multi_region_policy_controls_placement() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Excitebike (JU) [!].nes");

    let run = |policy| {
        let options = OrganizeOptions {
            separate_by_region: true,
            region_filter: RegionFilter {
                region: Some(Region::Usa),
                multi_region: policy,
            },
            ..Default::default()
        };
        dest_names(&plan_organize(root, &options, &LocalFs, &no_progress).unwrap())
    };

    assert_eq!(
        run(MultiRegionPolicy::UnknownBucket),
        vec![PathBuf::from("nes/_unknown_region/Excitebike.nes")]
    );
    assert_eq!(
        run(MultiRegionPolicy::Match),
        vec![PathBuf::from("nes/U/Excitebike.nes")]
    );
    assert!(run(MultiRegionPolicy::Exclude).is_empty());
}

#[test]
fn placement_is_kept_from_the_filter_pass() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Excitebike (JU) [!].nes");
    touch(root, "Mystery (Unk).nes");
    touch(root, "Mystery (W).nes");

    let options = OrganizeOptions {
        separate_by_region: true,
        region_filter: RegionFilter {
            region: Some(Region::Usa),
            multi_region: MultiRegionPolicy::Match,
        },
        ..Default::default()
    };
    let plan = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();

    // Every survivor of the filter pass gets a destination.
    assert_eq!(
        dest_names(&plan),
        vec![
            PathBuf::from("nes/U/Excitebike.nes"),
            PathBuf::from("nes/_unknown_region/Mystery.nes"),
        ]
    );
    assert_eq!(plan.filtered_out.len(), 1, "the World copy misses the filter");
}

#[test]
fn platform_selection_limits_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Zelda (U) [!].nes");
    touch(root, "Tetris (W) [!].gb");

    let options = OrganizeOptions {
        platforms: Some(vec![Platform::GameBoy]),
        ..Default::default()
    };
    let plan = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();
    assert_eq!(dest_names(&plan), vec![PathBuf::from("gb/Tetris.gb")]);
    assert_eq!(plan.other_platforms.len(), 1);

    let summary = execute_plan(&plan, &LocalFs, &no_progress);
    assert_eq!(summary.copied, 1);
    assert_eq!(summary.other_platforms, 1);
}

#[test]
fn rerun_skips_output_dir_and_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Zelda (U) [!].nes");

    let options = OrganizeOptions::default();
    let first = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();
    assert_eq!(execute_plan(&first, &LocalFs, &no_progress).copied, 1);

    let second = plan_organize(root, &options, &LocalFs, &no_progress).unwrap();
    assert_eq!(second.discovered, 1, "output directory must not be walked");
    let summary = execute_plan(&second, &LocalFs, &no_progress);
    assert_eq!(summary.copied, 0);
    assert_eq!(summary.already_present, 1);
    assert!(summary.errors.is_empty());
}

#[test]
fn destination_collisions_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "Zelda (U).nes");
    touch(root, "Zelda.nes");

    let plan = plan_organize(root, &OrganizeOptions::default(), &LocalFs, &no_progress).unwrap();
    assert_eq!(plan.actions.len(), 1);
    assert_eq!(plan.conflicts.len(), 1);
    assert_eq!(plan.actions[0].record.raw_name(), "Zelda (U).nes");
}

#[test]
fn root_must_be_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("Zelda (U).nes");
    fs::write(&file, b"").unwrap();

    let missing = plan_organize(
        &dir.path().join("missing"),
        &OrganizeOptions::default(),
        &LocalFs,
        &no_progress,
    );
    assert!(matches!(missing, Err(OrganizeError::NotADirectory(_))));

    let not_dir = plan_organize(&file, &OrganizeOptions::default(), &LocalFs, &no_progress);
    assert!(matches!(not_dir, Err(OrganizeError::NotADirectory(_))));
}

/// In-memory tree with injectable copy failures.
struct FakeFs {
    dirs: Vec<(PathBuf, Vec<&'static str>)>,
    fail_copy: HashSet<PathBuf>,
    fail_dir: HashSet<PathBuf>,
    copies: RefCell<Vec<(PathBuf, PathBuf)>>,
    created: RefCell<Vec<PathBuf>>,
}

impl FileOps for FakeFs {
    fn list_dir(&self, path: &Path) -> io::Result<DirListing> {
        match self.dirs.iter().find(|(p, _)| p == path) {
            Some((_, children)) => Ok(DirListing::Children(
                children.iter().map(|c| OsString::from(*c)).collect(),
            )),
            None if path.extension().is_some() => Ok(DirListing::NotADirectory),
            None => Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        }
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.fail_dir.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        self.created.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<u64> {
        if self.fail_copy.contains(source) {
            return Err(io::Error::other("disk on fire"));
        }
        self.copies
            .borrow_mut()
            .push((source.to_path_buf(), dest.to_path_buf()));
        Ok(10)
    }
}

#[test]
fn failures_are_reported_and_run_continues() {
    let fake = FakeFs {
        dirs: vec![(
            PathBuf::from("/roms"),
            vec!["Zelda (U).nes", "Tetris (W).gb", "Sonic (U).gen", "locked"],
        )],
        fail_copy: HashSet::from([PathBuf::from("/roms/Zelda (U).nes")]),
        fail_dir: HashSet::from([PathBuf::from("/roms/filtered/genesis")]),
        copies: RefCell::new(Vec::new()),
        created: RefCell::new(Vec::new()),
    };

    let plan = plan_organize(Path::new("/roms"), &OrganizeOptions::default(), &fake, &no_progress)
        .unwrap();
    assert_eq!(plan.scan_errors.len(), 1, "locked directory is reported");
    assert_eq!(plan.actions.len(), 3);

    let summary = execute_plan(&plan, &fake, &no_progress);
    assert_eq!(summary.copied, 1);
    assert_eq!(summary.bytes_copied, 10);
    // scan error + failed copy + failed directory
    assert_eq!(summary.errors.len(), 3, "{:?}", summary.errors);

    let copies = fake.copies.borrow();
    assert_eq!(
        copies.as_slice(),
        &[(
            PathBuf::from("/roms/Tetris (W).gb"),
            PathBuf::from("/roms/filtered/gb/Tetris.gb")
        )]
    );
    // The output root is created once, then each platform directory.
    let created = fake.created.borrow();
    assert_eq!(
        created
            .iter()
            .filter(|p| p.as_path() == Path::new("/roms/filtered"))
            .count(),
        1
    );
}

#[test]
fn progress_reports_every_copy() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "a/Zelda (U) [!].nes");
    touch(root, "b/Metroid (U) [!].nes");

    let events = RefCell::new(Vec::new());
    let record = |p: rom_tidy_lib::OrganizeProgress| events.borrow_mut().push(p);

    let plan = plan_organize(root, &OrganizeOptions::default(), &LocalFs, &record).unwrap();
    execute_plan(&plan, &LocalFs, &record);

    let events = events.into_inner();
    let copying = events
        .iter()
        .filter(|e| matches!(e, rom_tidy_lib::OrganizeProgress::Copying { .. }))
        .count();
    assert_eq!(copying, 2);
    assert!(matches!(
        events.last(),
        Some(rom_tidy_lib::OrganizeProgress::Done)
    ));
}
