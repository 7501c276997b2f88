//! Volume accessor interface.
//!
//! The volume is the read-only disc image this crate extracts from.
//! Decryption and partition remapping live behind this trait; extraction
//! code only ever sees partition-relative reads.

use crate::Result;

/// Selects which logical partition subsequent reads are relative to.
///
/// Cheap to copy and owned by the caller. [`Partition::NONE`] denotes raw
/// volume addressing, used for unpartitioned media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition(Option<u64>);

impl Partition {
    /// Raw volume addressing (no partition).
    pub const NONE: Self = Self(None);

    /// Creates a handle for the partition whose data starts at `offset`.
    #[must_use]
    pub const fn new(offset: u64) -> Self {
        Self(Some(offset))
    }

    /// Returns the partition's data offset, or `None` for raw addressing.
    #[must_use]
    pub const fn offset(self) -> Option<u64> {
        self.0
    }
}

/// Medium flavor reported by a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// GameCube disc image.
    GameCubeDisc,

    /// Wii disc image. Header offset fields are stored shifted right by
    /// two bits.
    WiiDisc,

    /// Installable Wii title (WAD). Not a disc.
    WiiWad,
}

impl Platform {
    /// Returns `true` for optical disc media.
    #[must_use]
    pub const fn is_disc(self) -> bool {
        matches!(self, Self::GameCubeDisc | Self::WiiDisc)
    }

    /// Bit shift that resolves raw header offset fields for this flavor.
    pub(crate) const fn offset_shift(self) -> u32 {
        match self {
            Self::WiiDisc => 2,
            Self::GameCubeDisc | Self::WiiWad => 0,
        }
    }
}

/// Read access to a partition-aware disc image.
///
/// Implementations are expected to be stateless from the caller's point of
/// view: reads at the same offset always see the same bytes.
pub trait Volume {
    /// Fills `buffer` with the bytes starting at `offset` relative to
    /// `partition`.
    ///
    /// The read is all-or-nothing; on error the buffer contents are
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the requested range cannot be read.
    fn read(&self, offset: u64, buffer: &mut [u8], partition: Partition) -> Result<()>;

    /// Reads a big-endian `u32` at `offset` relative to `partition`.
    ///
    /// Returns `None` if the underlying read fails.
    fn read_u32(&self, offset: u64, partition: Partition) -> Option<u32> {
        let mut bytes = [0u8; 4];
        self.read(offset, &mut bytes, partition).ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// The medium flavor of this volume.
    fn platform(&self) -> Platform;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryVolume;

    #[test]
    fn test_partition_none() {
        assert_eq!(Partition::NONE.offset(), None);
        assert_eq!(Partition::new(0x5_0000).offset(), Some(0x5_0000));
        assert_ne!(Partition::NONE, Partition::new(0));
    }

    #[test]
    fn test_platform_is_disc() {
        assert!(Platform::GameCubeDisc.is_disc());
        assert!(Platform::WiiDisc.is_disc());
        assert!(!Platform::WiiWad.is_disc());
    }

    #[test]
    fn test_platform_offset_shift() {
        assert_eq!(Platform::GameCubeDisc.offset_shift(), 0);
        assert_eq!(Platform::WiiDisc.offset_shift(), 2);
    }

    #[test]
    fn test_read_u32_big_endian() {
        let volume = MemoryVolume::new(
            vec![0x00, 0x12, 0x34, 0x56, 0x78, 0x00],
            Platform::GameCubeDisc,
        );
        assert_eq!(volume.read_u32(1, Partition::NONE), Some(0x1234_5678));
    }

    #[test]
    fn test_read_u32_failed_read() {
        let volume = MemoryVolume::new(vec![0; 4], Platform::GameCubeDisc);
        assert_eq!(volume.read_u32(2, Partition::NONE), None);
    }

    #[test]
    fn test_read_u32_partition_relative() {
        let mut volume = MemoryVolume::zeroed(0x20);
        volume.put_u32(0x14, 0xdead_beef);
        let partition = Partition::new(0x10);
        assert_eq!(volume.read_u32(0x4, partition), Some(0xdead_beef));
    }
}
