//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use framediff_core::errors::{FdError, FdErrorKind};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file
///
/// The content lands in a temp file next to the target and is renamed into
/// place, so readers never observe a partially written model. The temp name
/// carries the target file name and the writer's pid; concurrent exports to
/// different files in the same directory cannot collide.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_model_dir", e))?;
        }
    }

    let file_name = target_path.file_name().ok_or_else(|| {
        FdError::new(FdErrorKind::Io)
            .with_op("write_model_temp")
            .with_message(format!(
                "target path has no file name: {}",
                target_path.display()
            ))
    })?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(format!(".{}.tmp", std::process::id()));
    let temp_path = target_path.with_file_name(temp_name);

    fs::write(&temp_path, content).map_err(|e| io_error("write_model_temp", e))?;

    // Atomically rename temp to target
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_model_temp", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("model.json");

        atomic_write(&target, b"{}").unwrap();

        let content = fs::read(&target).unwrap();
        assert_eq!(content, b"{}");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out").join("model.json");

        atomic_write(&target, b"nested").unwrap();

        let content = fs::read(&target).unwrap();
        assert_eq!(content, b"nested");
    }

    #[test]
    fn test_sibling_targets_use_distinct_temp_names() {
        let temp_dir = TempDir::new().unwrap();
        // Same stem, different extensions: the temp names must not collide
        let first = temp_dir.path().join("model");
        let second = temp_dir.path().join("model.json");

        atomic_write(&first, b"first").unwrap();
        atomic_write(&second, b"second").unwrap();

        assert_eq!(fs::read(&first).unwrap(), b"first");
        assert_eq!(fs::read(&second).unwrap(), b"second");
    }

    #[test]
    fn test_rejects_target_without_file_name() {
        let err = atomic_write(Path::new("/"), b"x").unwrap_err();
        assert_eq!(err.kind(), FdErrorKind::Io);
        assert_eq!(err.op(), Some("write_model_temp"));
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("model.json");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .count();
        assert_eq!(tmp_count, 0);
    }
}
