//! Property-based tests for the read and export primitives.
//!
//! These use proptest to check the length/content laws across arbitrary
//! offsets, capacities, and range sizes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use discex_core::Partition;
use discex_core::Platform;
use discex_core::export_data;
use discex_core::read_file;
use discex_core::test_utils::MemoryVolume;
use discex_core::test_utils::TestFileInfo;
use proptest::prelude::*;

const VOLUME_LEN: usize = 0x400;
const FILE_OFFSET: u64 = 0x40;

fn patterned_volume() -> MemoryVolume {
    let data = (0..VOLUME_LEN).map(|i| (i % 251) as u8).collect();
    MemoryVolume::new(data, Platform::GameCubeDisc)
}

proptest! {
    /// read_file copies min(capacity, size - offset) bytes and they match
    /// the volume's bytes at the file's disc offset.
    #[test]
    fn prop_read_file_length_and_content(
        size in 1u64..0x200,
        capacity in 0usize..0x280,
        offset in 0u64..0x280,
    ) {
        let volume = patterned_volume();
        let file = TestFileInfo::file("file.bin", FILE_OFFSET, size);
        let mut buffer = vec![0u8; capacity];

        let copied = read_file(&volume, Partition::NONE, Some(&file), &mut buffer, offset);

        if offset >= size {
            prop_assert_eq!(copied, 0);
        } else {
            let expected = (capacity as u64).min(size - offset);
            prop_assert_eq!(copied, expected);

            let start = (FILE_OFFSET + offset) as usize;
            prop_assert_eq!(
                &buffer[..copied as usize],
                &volume.data()[start..start + copied as usize]
            );
        }
    }

    /// read_file returns 0 for any capacity when the input is absent or a
    /// directory.
    #[test]
    fn prop_read_file_zero_for_bad_input(capacity in 0usize..0x100) {
        let volume = patterned_volume();
        let dir = TestFileInfo::directory("dir", Vec::new());
        let mut buffer = vec![0u8; capacity];

        prop_assert_eq!(read_file(&volume, Partition::NONE, None, &mut buffer, 0), 0);
        prop_assert_eq!(
            read_file(&volume, Partition::NONE, Some(&dir), &mut buffer, 0),
            0
        );
    }

    /// export_data writes exactly the requested byte range.
    #[test]
    fn prop_export_data_exact_range(
        offset in 0u64..0x100,
        size in 0u64..0x200,
    ) {
        let temp = tempfile::TempDir::new().unwrap();
        let volume = patterned_volume();
        let out = temp.path().join("out.bin");

        export_data(&volume, Partition::NONE, offset, size, &out).unwrap();

        let expected = &volume.data()[offset as usize..(offset + size) as usize];
        prop_assert_eq!(fs::read(&out).unwrap(), expected);
    }
}
