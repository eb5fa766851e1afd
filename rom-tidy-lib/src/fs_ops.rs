//! Filesystem collaborators used by the organizer.
//!
//! The organizer only ever lists one directory, creates one directory, or
//! copies one file at a time. Keeping those behind a trait lets tests inject
//! failures without touching a real disk.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Result of listing a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    /// The path exists but is not a directory (a file candidate).
    NotADirectory,
    /// Immediate child names of the directory, unsorted.
    Children(Vec<OsString>),
}

/// The three filesystem operations an organize run needs.
pub trait FileOps {
    /// List the immediate children of `path`.
    fn list_dir(&self, path: &Path) -> io::Result<DirListing>;

    /// Create exactly `path`; parents must already exist.
    ///
    /// Callers treat `ErrorKind::AlreadyExists` as success.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Copy `source` to `dest`. Must fail with `ErrorKind::AlreadyExists`
    /// rather than overwrite, and must not create parent directories.
    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<u64>;
}

/// `FileOps` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileOps for LocalFs {
    /// Symlinks are never listed, even when they point at a directory, so
    /// a link back to an ancestor can't loop the walk.
    fn list_dir(&self, path: &Path) -> io::Result<DirListing> {
        if !fs::symlink_metadata(path)?.is_dir() {
            return Ok(DirListing::NotADirectory);
        }
        let names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        Ok(DirListing::Children(names))
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> io::Result<u64> {
        let mut reader = File::open(source)?;
        let mut writer = OpenOptions::new().write(true).create_new(true).open(dest)?;
        let result = io::copy(&mut reader, &mut writer)
            .and_then(|copied| writer.sync_all().map(|()| copied));
        if result.is_err() {
            // Don't leave a truncated file behind; a rerun would skip it.
            drop(writer);
            let _ = fs::remove_file(dest);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_dir_reports_files_as_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Metroid (U) [!].nes");
        fs::write(&file, b"NES\x1a").unwrap();

        assert_eq!(LocalFs.list_dir(&file).unwrap(), DirListing::NotADirectory);
        match LocalFs.list_dir(dir.path()).unwrap() {
            DirListing::Children(names) => {
                assert_eq!(names, vec![OsString::from("Metroid (U) [!].nes")]);
            }
            other => panic!("expected children, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_a_leaf() {
        let dir = tempfile::tempdir().unwrap();
        let nes = dir.path().join("nes");
        fs::create_dir(&nes).unwrap();
        std::os::unix::fs::symlink(dir.path(), nes.join("loop")).unwrap();

        assert_eq!(
            LocalFs.list_dir(&nes.join("loop")).unwrap(),
            DirListing::NotADirectory
        );
    }

    #[test]
    fn list_dir_errors_on_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFs.list_dir(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn copy_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.nes");
        let dst = dir.path().join("b.nes");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        let err = LocalFs.copy_file(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst).unwrap(), b"old");
    }

    #[test]
    fn copy_does_not_create_parents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.nes");
        fs::write(&src, b"data").unwrap();

        assert!(LocalFs.copy_file(&src, &dir.path().join("x/y/a.nes")).is_err());
        assert!(!dir.path().join("x").exists());
    }

    #[test]
    fn create_dir_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFs.create_dir(&dir.path().join("a/b")).is_err());
        LocalFs.create_dir(&dir.path().join("a")).unwrap();
        let again = LocalFs.create_dir(&dir.path().join("a")).unwrap_err();
        assert_eq!(again.kind(), io::ErrorKind::AlreadyExists);
    }
}
