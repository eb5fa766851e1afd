//! Depth-first discovery of ROM files under a source root.
//!
//! Every file found becomes a [`RomRecord`], whatever its extension;
//! unknown platforms are filtered out later so they can be reported.

use std::path::{Path, PathBuf};

use rom_tidy_core::RomRecord;

use crate::fs_ops::{DirListing, FileOps};

/// Files discovered by a walk, plus any directories that couldn't be read.
#[derive(Debug, Default)]
pub struct Discovery {
    /// One record per file, in walk order (children sorted by name).
    pub records: Vec<RomRecord>,
    /// Number of directories listed.
    pub directories: usize,
    /// Paths that failed to list, with the error message.
    pub errors: Vec<String>,
}

/// Walk `root` depth-first and parse every file name found.
///
/// `skip` is never entered (the output directory, when it lives under the
/// root). Unreadable paths are logged, recorded in [`Discovery::errors`], and
/// skipped; they never stop the walk.
pub fn discover_roms(
    fs: &dyn FileOps,
    root: &Path,
    skip: Option<&Path>,
    on_dir: &mut dyn FnMut(&Path),
) -> Discovery {
    let mut discovery = Discovery::default();
    visit(fs, root, skip, on_dir, &mut discovery);
    discovery
}

fn visit(
    fs: &dyn FileOps,
    path: &Path,
    skip: Option<&Path>,
    on_dir: &mut dyn FnMut(&Path),
    discovery: &mut Discovery,
) {
    match fs.list_dir(path) {
        Ok(DirListing::NotADirectory) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            discovery.records.push(RomRecord::parse(name, path));
        }
        Ok(DirListing::Children(mut names)) => {
            discovery.directories += 1;
            on_dir(path);
            names.sort();
            for name in names {
                let child: PathBuf = path.join(&name);
                if skip.is_some_and(|s| s == child.as_path()) {
                    log::debug!("Not descending into output directory {}", child.display());
                    continue;
                }
                visit(fs, &child, skip, on_dir, discovery);
            }
        }
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            discovery
                .errors
                .push(format!("Cannot read {}: {}", path.display(), e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_ops::LocalFs;
    use std::fs;

    #[test]
    fn walks_nested_directories_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/deeper")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/deeper/Zelda (U) [!].nes"), b"").unwrap();
        fs::write(root.join("a/Metroid (E).nes"), b"").unwrap();
        fs::write(root.join("readme.txt"), b"").unwrap();

        let mut dirs = Vec::new();
        let found = discover_roms(&LocalFs, root, None, &mut |p| dirs.push(p.to_path_buf()));

        let names: Vec<&str> = found.records.iter().map(|r| r.raw_name()).collect();
        assert_eq!(
            names,
            vec!["Metroid (E).nes", "Zelda (U) [!].nes", "readme.txt"]
        );
        assert_eq!(found.directories, 4);
        assert_eq!(dirs.len(), 4);
        assert!(found.errors.is_empty());
        assert_eq!(
            found.records[1].source_path(),
            root.join("b/deeper/Zelda (U) [!].nes")
        );
    }

    #[test]
    fn skip_path_is_not_entered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("filtered/nes")).unwrap();
        fs::write(root.join("filtered/nes/Zelda.nes"), b"").unwrap();
        fs::write(root.join("Zelda (U).nes"), b"").unwrap();

        let skip = root.join("filtered");
        let found = discover_roms(&LocalFs, root, Some(skip.as_path()), &mut |_| {});
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.records[0].raw_name(), "Zelda (U).nes");
    }

    #[cfg(unix)]
    #[test]
    fn symlink_back_to_an_ancestor_is_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nes")).unwrap();
        fs::write(root.join("nes/Zelda (U) [!].nes"), b"").unwrap();
        std::os::unix::fs::symlink(root, root.join("nes/loop")).unwrap();

        let found = discover_roms(&LocalFs, root, None, &mut |_| {});
        assert!(found.errors.is_empty(), "{:?}", found.errors);
        assert_eq!(found.directories, 2);
        let names: Vec<&str> = found.records.iter().map(|r| r.raw_name()).collect();
        assert_eq!(names, vec!["Zelda (U) [!].nes", "loop"]);
    }

    #[test]
    fn missing_root_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover_roms(&LocalFs, &dir.path().join("nope"), None, &mut |_| {});
        assert!(found.records.is_empty());
        assert_eq!(found.errors.len(), 1);
    }
}
