//! File-backed storage
//!
//! One file per key inside a data directory. Values are written to a
//! sibling temp file and renamed into place, so readers only ever see a
//! complete collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::key_value::{KeyValueStorage, StorageError};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let temp = tempfile::tempdir().expect("tempdir");

        let storage = FileStorage::open(temp.path()).unwrap();
        storage.set("civic-radar-reports", "[1,2,3]").unwrap();
        drop(storage);

        let reopened = FileStorage::open(temp.path()).unwrap();
        assert_eq!(
            reopened.get("civic-radar-reports").unwrap(),
            Some("[1,2,3]".to_string())
        );
        assert!(!temp.path().join("civic-radar-reports.json.tmp").exists());
    }

    #[test]
    fn test_missing_key_and_remove() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path().join("nested")).unwrap();

        assert_eq!(storage.get("absent").unwrap(), None);
        storage.remove("absent").unwrap();

        storage.set("present", "x").unwrap();
        storage.remove("present").unwrap();
        assert_eq!(storage.get("present").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path()).unwrap();

        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(storage.get(""), Err(StorageError::InvalidKey(_))));
    }
}
