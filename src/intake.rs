//! Batch intake: staging uploaded files on disk for the pipeline.
//!
//! Files are written under a generated uuid key so two uploads sharing a
//! name never overwrite each other; the user-supplied name survives only as
//! display metadata on [`StoredFile`]. Staged files are removed when the
//! [`BatchStorage`] is dropped, whether the batch completed or failed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::types::AppError;

/// A staged upload: filesystem path plus the original client-supplied name.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub path: PathBuf,
    pub original_name: String,
}

/// One entry per uploaded file, in upload order. Save failures stay in the
/// batch so the output keeps exactly one record per input.
#[derive(Debug, Clone)]
pub enum BatchItem {
    Stored(StoredFile),
    SaveFailed { file_name: String, message: String },
}

/// Scoped staging area for one batch. Owns the files it saved and deletes
/// them on drop; the directory itself is shared across batches and left in
/// place.
#[derive(Debug)]
pub struct BatchStorage {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl BatchStorage {
    /// Create the staging directory if absent. Failure here is batch-fatal.
    pub fn create(dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::StorageUnavailable(format!("{}: {e}", dir.display())))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            saved: Vec::new(),
        })
    }

    /// Persist one upload under a collision-free key, keeping the original
    /// extension so the pipeline can dispatch on it.
    pub fn save(&mut self, original_name: &str, bytes: &[u8]) -> io::Result<StoredFile> {
        let key = match extension_of(original_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        let path = self.dir.join(key);

        fs::write(&path, bytes)?;
        debug!(name = original_name, path = %path.display(), "staged upload");
        self.saved.push(path.clone());

        Ok(StoredFile {
            path,
            original_name: original_name.to_string(),
        })
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

impl Drop for BatchStorage {
    fn drop(&mut self) {
        for path in &self.saved {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), "failed to remove staged file: {e}");
            }
        }
    }
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_keeps_extension_and_avoids_collisions() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = BatchStorage::create(temp_dir.path()).unwrap();

        let a = storage.save("passport.png", b"first").unwrap();
        let b = storage.save("passport.png", b"second").unwrap();

        assert_ne!(a.path, b.path);
        assert_eq!(a.path.extension().unwrap(), "png");
        assert_eq!(a.original_name, "passport.png");
        assert_eq!(fs::read(&a.path).unwrap(), b"first");
        assert_eq!(fs::read(&b.path).unwrap(), b"second");
    }

    #[test]
    fn test_save_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = BatchStorage::create(temp_dir.path()).unwrap();

        let stored = storage.save("README", b"text").unwrap();
        assert!(stored.path.extension().is_none());
    }

    #[test]
    fn test_drop_removes_staged_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = {
            let mut storage = BatchStorage::create(temp_dir.path()).unwrap();
            storage.save("doc.pdf", b"pdf bytes").unwrap().path
        };
        assert!(!path.exists());
        // The shared directory itself stays.
        assert!(temp_dir.path().exists());
    }

    #[test]
    fn test_create_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads");
        fs::write(&path, b"occupied").unwrap();

        let err = BatchStorage::create(&path).unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
        assert!(err.to_string().contains("Failed to create temporary storage"));
    }

    #[test]
    fn test_create_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/uploads");
        let storage = BatchStorage::create(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.saved_count(), 0);
    }
}
