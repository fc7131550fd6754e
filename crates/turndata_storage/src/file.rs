//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A file-based storage backend.
///
/// Preprocessing writes turn data files through this backend; loaders that
/// want an owned copy read them back through it. Zero-copy loaders use
/// [`crate::MappedRegion`] on the same path instead.
///
/// # Durability
///
/// - `flush()` calls `File::flush()` to push data to the OS
/// - `sync()` calls `File::sync_all()` to ensure data is on disk
///
/// # Example
///
/// ```no_run
/// use turndata_storage::{StorageBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::open(Path::new("graph.turn_data")).unwrap();
/// backend.truncate(0).unwrap();
/// backend.append(&[0u8; 8]).unwrap();
/// backend.sync().unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    file: RwLock<File>,
    size: RwLock<u64>,
}

impl FileBackend {
    /// Opens or creates a file backend at the given path.
    ///
    /// Existing content is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let size = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            size: RwLock::new(size),
        })
    }

    /// Opens an existing file for reading only.
    ///
    /// Writes through the returned backend fail with an I/O error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn open_read_only(path: &Path) -> StorageResult<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file: RwLock::new(file),
            size: RwLock::new(size),
        })
    }

    /// Opens or creates a file backend, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or file cannot be opened.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        let size = *self.size.read();
        let end = offset.saturating_add(len as u64);

        if offset > size || end > size {
            return Err(StorageError::ReadPastEnd { offset, len, size });
        }

        if len == 0 {
            return Ok(Vec::new());
        }

        let mut file = self.file.write();
        file.seek(SeekFrom::Start(offset))?;

        let mut buffer = vec![0u8; len];
        file.read_exact(&mut buffer)?;

        Ok(buffer)
    }

    fn append(&mut self, data: &[u8]) -> StorageResult<u64> {
        if data.is_empty() {
            return Ok(*self.size.read());
        }

        let mut file = self.file.write();
        let mut size = self.size.write();

        let offset = *size;
        file.seek(SeekFrom::End(0))?;
        file.write_all(data)?;
        *size += data.len() as u64;

        Ok(offset)
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.file.write().flush()?;
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        Ok(*self.size.read())
    }

    fn sync(&mut self) -> StorageResult<()> {
        self.file.write().sync_all()?;
        Ok(())
    }

    fn truncate(&mut self, new_size: u64) -> StorageResult<()> {
        let file = self.file.write();
        let mut size = self.size.write();

        if new_size > *size {
            return Err(StorageError::TruncateBeyondEnd {
                requested: new_size,
                size: *size,
            });
        }

        file.set_len(new_size)?;
        *size = new_size;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_create_new() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");

        let backend = FileBackend::open(&path).unwrap();
        assert_eq!(backend.size().unwrap(), 0);
        assert_eq!(backend.path(), path);
        assert!(path.exists());
    }

    #[test]
    fn file_append_and_read_all() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");

        let mut backend = FileBackend::open(&path).unwrap();
        assert_eq!(backend.append(&[1, 2, 3]).unwrap(), 0);
        assert_eq!(backend.append(&[4, 5]).unwrap(), 3);
        assert_eq!(backend.read_all().unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(backend.read_at(3, 2).unwrap(), vec![4, 5]);
    }

    #[test]
    fn file_read_past_end_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.append(&[0; 4]).unwrap();
        assert!(matches!(
            backend.read_at(2, 4),
            Err(StorageError::ReadPastEnd { .. })
        ));
    }

    #[test]
    fn file_rewrite_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");

        {
            let mut backend = FileBackend::open(&path).unwrap();
            backend.append(&[7; 32]).unwrap();
            backend.sync().unwrap();
        }

        {
            let mut backend = FileBackend::open(&path).unwrap();
            assert_eq!(backend.size().unwrap(), 32);
            backend.truncate(0).unwrap();
            backend.append(&[1, 2]).unwrap();
            backend.flush().unwrap();
            backend.sync().unwrap();
        }

        let backend = FileBackend::open_read_only(&path).unwrap();
        assert_eq!(backend.read_all().unwrap(), vec![1, 2]);
    }

    #[test]
    fn file_truncate_beyond_end_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");

        let mut backend = FileBackend::open(&path).unwrap();
        assert!(matches!(
            backend.truncate(1),
            Err(StorageError::TruncateBeyondEnd { .. })
        ));
    }

    #[test]
    fn file_read_only_missing_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.turn_data");
        assert!(matches!(
            FileBackend::open_read_only(&path),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("graph.turn_data");

        let backend = FileBackend::open_with_create_dirs(&path).unwrap();
        assert_eq!(backend.size().unwrap(), 0);
        assert!(path.exists());
    }
}
