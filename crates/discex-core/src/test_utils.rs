//! Test utilities: an in-memory volume and a buildable file tree.
//!
//! These helpers back the unit, integration, and property tests. The mock
//! volume fails reads past its backing storage, which doubles as the
//! read-failure fixture.
//!
//! # Panics
//!
//! Setup helpers may panic on inconsistent input since they are designed
//! for test use only.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::error::ExportError;
use crate::error::Result;
use crate::filesystem::FileInfo;
use crate::volume::Partition;
use crate::volume::Platform;
use crate::volume::Volume;

/// In-memory volume backed by a byte vector.
///
/// Partition handles address the same backing storage at their data
/// offset; [`Partition::NONE`] addresses it raw. Reads extending past the
/// end fail with [`ExportError::VolumeRead`].
pub struct MemoryVolume {
    data: Vec<u8>,
    platform: Platform,
}

impl MemoryVolume {
    /// Creates a volume over `data` reporting the given platform.
    #[must_use]
    pub fn new(data: Vec<u8>, platform: Platform) -> Self {
        Self { data, platform }
    }

    /// Creates a zero-filled GameCube disc volume of `len` bytes.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0; len], Platform::GameCubeDisc)
    }

    /// Writes a big-endian `u32` field at `offset`.
    pub fn put_u32(&mut self, offset: u64, value: u32) {
        self.put(offset, &value.to_be_bytes());
    }

    /// Fills `[offset, offset + bytes.len())` with `bytes`.
    pub fn put(&mut self, offset: u64, bytes: &[u8]) {
        let offset = usize::try_from(offset).unwrap();
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Borrows the backing bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Volume for MemoryVolume {
    fn read(&self, offset: u64, buffer: &mut [u8], partition: Partition) -> Result<()> {
        let base = partition.offset().unwrap_or(0);
        let start = base.checked_add(offset);
        let end = start.and_then(|s| s.checked_add(buffer.len() as u64));

        match (start, end) {
            (Some(start), Some(end)) if end <= self.data.len() as u64 => {
                let start = usize::try_from(start).unwrap();
                buffer.copy_from_slice(&self.data[start..start + buffer.len()]);
                Ok(())
            }
            _ => Err(ExportError::VolumeRead {
                offset,
                length: buffer.len() as u64,
            }),
        }
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}

/// Buildable [`FileInfo`] node for tests.
pub struct TestFileInfo {
    name: String,
    offset: u64,
    size: u64,
    directory: bool,
    children: Vec<TestFileInfo>,
}

impl TestFileInfo {
    /// Creates a file entry covering `size` bytes at `offset`.
    #[must_use]
    pub fn file(name: &str, offset: u64, size: u64) -> Self {
        Self {
            name: name.to_owned(),
            offset,
            size,
            directory: false,
            children: Vec::new(),
        }
    }

    /// Creates a directory entry. `children` keep their given order.
    #[must_use]
    pub fn directory(name: &str, children: Vec<TestFileInfo>) -> Self {
        Self {
            name: name.to_owned(),
            offset: 0,
            size: 0,
            directory: true,
            children,
        }
    }
}

impl FileInfo for TestFileInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn offset(&self) -> u64 {
        self.offset
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn is_directory(&self) -> bool {
        self.directory
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn FileInfo> + '_> {
        Box::new(self.children.iter().map(|child| child as &dyn FileInfo))
    }
}
