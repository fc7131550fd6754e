//! Read-only memory-mapped regions.

use crate::error::{StorageError, StorageResult};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A read-only memory map of a whole file.
///
/// Views built over [`MappedRegion::as_bytes`] borrow the region, so the
/// borrow checker keeps the mapping alive for as long as any view exists.
///
/// Empty files are represented without a mapping, since zero-length maps
/// are rejected on some platforms.
///
/// # Example
///
/// ```no_run
/// use turndata_storage::MappedRegion;
/// use std::path::Path;
///
/// let region = MappedRegion::open(Path::new("graph.turn_data")).unwrap();
/// println!("{} bytes mapped", region.len());
/// ```
#[derive(Debug)]
pub struct MappedRegion {
    path: PathBuf,
    map: Option<Mmap>,
}

impl MappedRegion {
    /// Maps the file at `path` read-only.
    ///
    /// The file must not be modified or truncated while the region is
    /// alive; turn data files are written once during preprocessing and
    /// only read afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let map = if len == 0 {
            None
        } else {
            Some(map_file(&file).map_err(|source| StorageError::Map {
                path: path.to_path_buf(),
                source,
            })?)
        };

        Ok(Self {
            path: path.to_path_buf(),
            map,
        })
    }

    /// Returns the mapped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    /// Returns the length of the mapping in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the mapped file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the path of the mapped file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[allow(unsafe_code)]
fn map_file(file: &File) -> std::io::Result<Mmap> {
    // SAFETY: the mapping is read-only and callers must not modify the
    // file while a region over it is alive (documented on `open`).
    unsafe { Mmap::map(file) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn map_reads_file_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.turn_data");
        File::create(&path)
            .unwrap()
            .write_all(&[1, 2, 3, 4, 5])
            .unwrap();

        let region = MappedRegion::open(&path).unwrap();
        assert_eq!(region.as_bytes(), &[1, 2, 3, 4, 5]);
        assert_eq!(region.len(), 5);
        assert_eq!(region.path(), path);
    }

    #[test]
    fn map_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.turn_data");
        File::create(&path).unwrap();

        let region = MappedRegion::open(&path).unwrap();
        assert!(region.is_empty());
        assert!(region.as_bytes().is_empty());
    }

    #[test]
    fn map_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = MappedRegion::open(&dir.path().join("missing"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
