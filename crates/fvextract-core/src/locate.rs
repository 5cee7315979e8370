//! Disk image discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::scan::IMAGE_EXTENSION;

/// Source of the directory that holds the disk image.
///
/// Interactive front ends prompt the user; tests and scripted runs
/// hand back a fixed path.
pub trait PathProvider {
    /// Returns `None` when the user chose nothing
    fn select_directory(&self) -> Option<PathBuf>;
}

/// Provider that always returns the same directory
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn select_directory(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

fn has_image_extension(name: &str) -> bool {
    let suffix = format!(".{}", IMAGE_EXTENSION);
    name.len() >= suffix.len()
        && name.as_bytes()[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Return the first entry of `dir`, in listing order, whose name ends with `.dd`.
///
/// The entry is not checked to be a regular file.
pub fn find_image<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if has_image_extension(&name.to_string_lossy()) {
            debug!("Found image candidate: {:?}", name);
            return Ok(entry.path());
        }
    }

    Err(Error::NoImageFound {
        dir: dir.to_path_buf(),
        extension: IMAGE_EXTENSION.to_string(),
    })
}

/// Ask `provider` for a directory and locate the disk image inside it
pub fn locate_image(provider: &dyn PathProvider) -> Result<PathBuf> {
    let dir = provider
        .select_directory()
        .ok_or(Error::NoDirectorySelected)?;
    debug!("Searching for .{} image in {}", IMAGE_EXTENSION, dir.display());

    let image = find_image(&dir)?;
    if !image.is_file() {
        return Err(Error::NotAFile(image));
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct NoSelection;

    impl PathProvider for NoSelection {
        fn select_directory(&self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_has_image_extension() {
        assert!(has_image_extension("disk.dd"));
        assert!(has_image_extension("DISK.DD"));
        assert!(has_image_extension("evidence.Dd"));
        assert!(!has_image_extension("disk.img"));
        assert!(!has_image_extension("disk.dd.bak"));
        assert!(!has_image_extension("add"));
        assert!(!has_image_extension("dd"));
    }

    #[test]
    fn test_locate_image_upper_case_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), b"notes").unwrap();
        fs::write(dir.path().join("EVIDENCE.DD"), b"image").unwrap();

        let image = locate_image(&FixedPath(dir.path().to_path_buf())).unwrap();
        assert_eq!(image, dir.path().join("EVIDENCE.DD"));
    }

    #[test]
    fn test_locate_image_no_candidate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("disk.img"), b"image").unwrap();

        let err = locate_image(&FixedPath(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::NoImageFound { .. }));
    }

    #[test]
    fn test_locate_image_no_directory_selected() {
        let err = locate_image(&NoSelection).unwrap_err();
        assert!(matches!(err, Error::NoDirectorySelected));
    }

    #[test]
    fn test_locate_image_directory_named_like_image() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("volume.dd")).unwrap();

        let err = locate_image(&FixedPath(dir.path().to_path_buf())).unwrap_err();
        match err {
            Error::NotAFile(path) => assert_eq!(path, dir.path().join("volume.dd")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_find_image_missing_directory() {
        let err = find_image("/nonexistent/images").unwrap_err();
        assert!(err.is_not_found());
    }
}
