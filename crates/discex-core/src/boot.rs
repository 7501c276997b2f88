//! Boot metadata location and system data export.
//!
//! Disc headers record where the boot executable (DOL) lives and how large
//! the apploader image is, in fixed big-endian fields. The locator queries
//! here only issue small typed reads; the actual extraction funnels
//! through [`export_data`].

use std::path::Path;

use log::debug;
use log::error;

use crate::ExportError;
use crate::Result;
use crate::extraction::export_data;
use crate::volume::Partition;
use crate::volume::Volume;

/// Disc-relative offset of the boot executable offset field.
const BOOT_DOL_OFFSET_FIELD: u64 = 0x420;

/// Disc-relative offset of the apploader image.
const APPLOADER_OFFSET: u64 = 0x2440;

/// Offsets of the apploader body and trailer size fields.
const APPLOADER_SIZE_FIELD: u64 = APPLOADER_OFFSET + 0x14;
const APPLOADER_TRAILER_FIELD: u64 = APPLOADER_OFFSET + 0x18;

/// Size of the apploader header preceding body and trailer.
const APPLOADER_HEADER_SIZE: u64 = 0x20;

// DOL header layout: 7 text and 11 data segment descriptors, each with a
// 4-byte offset field and a 4-byte size field in separate tables.
const DOL_TEXT_SEGMENTS: u64 = 7;
const DOL_DATA_SEGMENTS: u64 = 11;
const DOL_TEXT_OFFSET_FIELDS: u64 = 0x00;
const DOL_DATA_OFFSET_FIELDS: u64 = 0x1c;
const DOL_TEXT_SIZE_FIELDS: u64 = 0x90;
const DOL_DATA_SIZE_FIELDS: u64 = 0xac;

fn require_disc(volume: &dyn Volume) -> Result<()> {
    let platform = volume.platform();
    if platform.is_disc() {
        Ok(())
    } else {
        Err(ExportError::NotADisc { platform })
    }
}

fn read_field(volume: &dyn Volume, offset: u64, partition: Partition) -> Result<u32> {
    volume
        .read_u32(offset, partition)
        .ok_or(ExportError::VolumeRead { offset, length: 4 })
}

/// Locates the boot executable within the given partition.
///
/// Wii discs store the header's offset field shifted right by two bits, so
/// the raw value is shifted back; GameCube discs use it unshifted.
///
/// # Errors
///
/// Fails if the medium is not a disc or the header read fails.
pub fn boot_dol_offset(volume: &dyn Volume, partition: Partition) -> Result<u64> {
    require_disc(volume)?;

    let raw = read_field(volume, BOOT_DOL_OFFSET_FIELD, partition)?;
    Ok(u64::from(raw) << volume.platform().offset_shift())
}

/// Computes the boot executable's total size from its segment tables.
///
/// The executable ends where its furthest segment ends: the result is the
/// maximum of offset + size over all 18 descriptors. Zeroed descriptors
/// contribute nothing. Sums are computed in `u64`, so corrupt headers
/// cannot overflow.
///
/// # Errors
///
/// Fails if the medium is not a disc or any of the 18 descriptor reads
/// fails.
pub fn boot_dol_size(volume: &dyn Volume, partition: Partition, dol_offset: u64) -> Result<u64> {
    require_disc(volume)?;

    let mut dol_size = 0u64;

    for i in 0..DOL_TEXT_SEGMENTS {
        let offset = read_field(volume, dol_offset + DOL_TEXT_OFFSET_FIELDS + i * 4, partition)?;
        let size = read_field(volume, dol_offset + DOL_TEXT_SIZE_FIELDS + i * 4, partition)?;
        dol_size = dol_size.max(u64::from(offset) + u64::from(size));
    }

    for i in 0..DOL_DATA_SEGMENTS {
        let offset = read_field(volume, dol_offset + DOL_DATA_OFFSET_FIELDS + i * 4, partition)?;
        let size = read_field(volume, dol_offset + DOL_DATA_SIZE_FIELDS + i * 4, partition)?;
        dol_size = dol_size.max(u64::from(offset) + u64::from(size));
    }

    Ok(dol_size)
}

/// Computes the total apploader image size: header + body + trailer.
///
/// # Errors
///
/// Fails if the medium is not a disc or either size field cannot be read.
pub fn apploader_size(volume: &dyn Volume, partition: Partition) -> Result<u64> {
    require_disc(volume)?;

    let body = read_field(volume, APPLOADER_SIZE_FIELD, partition)?;
    let trailer = read_field(volume, APPLOADER_TRAILER_FIELD, partition)?;
    let total = u64::from(body) + u64::from(trailer) + APPLOADER_HEADER_SIZE;

    debug!("apploader size -> {total:#x}");

    Ok(total)
}

/// Exports the apploader image to `export_path`.
///
/// # Errors
///
/// Fails if the apploader cannot be sized or the data export fails.
pub fn export_apploader(
    volume: &dyn Volume,
    partition: Partition,
    export_path: &Path,
) -> Result<()> {
    let size = apploader_size(volume, partition)?;
    export_data(volume, partition, APPLOADER_OFFSET, size, export_path)
}

/// Exports the boot executable to `export_path`.
///
/// # Errors
///
/// Fails if the executable cannot be located or sized, or the data export
/// fails.
pub fn export_dol(volume: &dyn Volume, partition: Partition, export_path: &Path) -> Result<()> {
    let dol_offset = boot_dol_offset(volume, partition)?;
    let dol_size = boot_dol_size(volume, partition, dol_offset)?;
    export_data(volume, partition, dol_offset, dol_size, export_path)
}

/// Exports both well-known boot artifacts into `export_folder`.
///
/// Writes `apploader.img` and `boot.dol`. Both exports are always
/// attempted, even if the first fails; the call succeeds only when both
/// did. When exactly one fails, the other artifact is still produced on
/// disk.
///
/// # Errors
///
/// Returns the apploader export's error first, otherwise the boot
/// executable's.
pub fn export_system_data(
    volume: &dyn Volume,
    partition: Partition,
    export_folder: &Path,
) -> Result<()> {
    let apploader = export_apploader(volume, partition, &export_folder.join("apploader.img"));
    if let Err(e) = &apploader {
        error!("could not export apploader: {e}");
    }

    let dol = export_dol(volume, partition, &export_folder.join("boot.dol"));
    if let Err(e) = &dol {
        error!("could not export boot executable: {e}");
    }

    apploader.and(dol)
}
