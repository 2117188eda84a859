//! Recursive file discovery.
//!
//! Symlinks are not followed and entries are visited sorted by file name, so
//! the same tree always yields the same order. Entries that cannot be read
//! become warnings; only an unusable root is an error.

use std::{
    fs,
    path::{Path, PathBuf}
};

use walkdir::WalkDir;

use crate::error::{AppResult, discovery_error};

/// Files found under a root, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub files:    Vec<PathBuf>,
    /// Entries skipped because they could not be read
    pub warnings: Vec<String>
}

/// Collect every regular file under `root`.
///
/// A root that is itself a regular file yields just that file.
///
/// # Errors
///
/// Returns an error if `root` does not exist or its metadata cannot be read.
pub fn discover_files(root: &Path) -> AppResult<Discovery> {
    fs::metadata(root).map_err(|e| discovery_error(&root.display().to_string(), e.to_string()))?;
    let mut discovery = Discovery::default();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => discovery.files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                let location = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                tracing::warn!(path = %location, error = %err, "Skipping unreadable entry");
                discovery.warnings.push(format!("{}: {}", location, err));
            }
        }
    }
    tracing::debug!(
        root = %root.display(),
        files = discovery.files.len(),
        warnings = discovery.warnings.len(),
        "Discovery finished"
    );
    Ok(discovery)
}

#[cfg(test)]
mod tests {
    use std::fs::{File, create_dir_all};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_discovery_is_sorted_and_recursive() {
        let dir = tempdir().unwrap();
        create_dir_all(dir.path().join("b/inner")).unwrap();
        File::create(dir.path().join("c.log")).unwrap();
        File::create(dir.path().join("a.log")).unwrap();
        File::create(dir.path().join("b/inner/z.log")).unwrap();

        let found = discover_files(dir.path()).unwrap();
        let names: Vec<_> = found
            .files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.log"),
                PathBuf::from("b/inner/z.log"),
                PathBuf::from("c.log")
            ]
        );
        assert!(found.warnings.is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        assert!(discover_files(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_file_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("single.log");
        File::create(&file).unwrap();
        assert_eq!(discover_files(&file).unwrap().files, vec![file]);
    }
}
