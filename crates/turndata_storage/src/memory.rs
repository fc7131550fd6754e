//! In-memory storage backend.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;

/// An in-memory byte store.
///
/// Used by tests and by pipelines that hand a freshly written section
/// straight to a loader without touching disk.
///
/// # Example
///
/// ```rust
/// use turndata_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let offset = backend.append(&[0u8; 8]).unwrap();
/// assert_eq!(offset, 0);
/// assert_eq!(backend.size().unwrap(), 8);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: RwLock<Vec<u8>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with pre-existing data.
    ///
    /// Useful for feeding hand-crafted or corrupted sections to a loader.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Returns a copy of all data in the backend.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        let data = self.data.read();
        let size = data.len() as u64;
        let start = usize::try_from(offset).map_err(|_| StorageError::ReadPastEnd {
            offset,
            len,
            size,
        })?;
        let end = start.saturating_add(len);

        if start > data.len() || end > data.len() {
            return Err(StorageError::ReadPastEnd { offset, len, size });
        }

        Ok(data[start..end].to_vec())
    }

    fn append(&mut self, new_data: &[u8]) -> StorageResult<u64> {
        let mut data = self.data.write();
        let offset = data.len() as u64;
        data.extend_from_slice(new_data);
        Ok(offset)
    }

    fn flush(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64)
    }

    fn sync(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn truncate(&mut self, new_size: u64) -> StorageResult<()> {
        let mut data = self.data.write();
        let size = data.len() as u64;

        if new_size > size {
            return Err(StorageError::TruncateBeyondEnd {
                requested: new_size,
                size,
            });
        }

        // new_size <= data.len(), so it fits in usize
        data.truncate(new_size as usize);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.size().unwrap(), 0);
        assert!(backend.read_all().unwrap().is_empty());
    }

    #[test]
    fn memory_append_returns_offsets() {
        let mut backend = InMemoryBackend::new();
        assert_eq!(backend.append(&[1, 2, 3, 4]).unwrap(), 0);
        assert_eq!(backend.append(&[5, 6]).unwrap(), 4);
        assert_eq!(backend.size().unwrap(), 6);
    }

    #[test]
    fn memory_read_at_returns_slice() {
        let backend = InMemoryBackend::with_data(vec![10, 11, 12, 13, 14]);
        assert_eq!(backend.read_at(1, 3).unwrap(), vec![11, 12, 13]);
        assert!(backend.read_at(5, 0).unwrap().is_empty());
    }

    #[test]
    fn memory_read_past_end_fails() {
        let backend = InMemoryBackend::with_data(vec![0; 4]);
        assert!(matches!(
            backend.read_at(2, 3),
            Err(StorageError::ReadPastEnd { offset: 2, len: 3, size: 4 })
        ));
        assert!(matches!(
            backend.read_at(9, 0),
            Err(StorageError::ReadPastEnd { .. })
        ));
    }

    #[test]
    fn memory_truncate_then_rewrite() {
        let mut backend = InMemoryBackend::with_data(vec![9; 16]);
        backend.truncate(0).unwrap();
        backend.append(&[1, 2]).unwrap();
        backend.flush().unwrap();
        backend.sync().unwrap();
        assert_eq!(backend.data(), vec![1, 2]);
    }

    #[test]
    fn memory_truncate_beyond_end_fails() {
        let mut backend = InMemoryBackend::with_data(vec![0; 4]);
        assert!(matches!(
            backend.truncate(5),
            Err(StorageError::TruncateBeyondEnd { requested: 5, size: 4 })
        ));
    }

    proptest! {
        #[test]
        fn memory_appends_read_back_at_their_offsets(
            chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..16)
        ) {
            let mut backend = InMemoryBackend::new();
            let offsets: Vec<u64> = chunks
                .iter()
                .map(|chunk| backend.append(chunk).unwrap())
                .collect();

            for (chunk, offset) in chunks.iter().zip(offsets) {
                prop_assert_eq!(&backend.read_at(offset, chunk.len()).unwrap(), chunk);
            }
            prop_assert_eq!(backend.data(), chunks.concat());
        }
    }
}
