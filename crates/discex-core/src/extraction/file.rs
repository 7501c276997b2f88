//! Single-file reads and exports.

use std::path::Path;

use log::debug;

use crate::ExportError;
use crate::Result;
use crate::filesystem::FileInfo;
use crate::volume::Partition;
use crate::volume::Volume;

use super::data::export_data;

/// Copies part of one file's logical contents into `buffer`.
///
/// Reads `min(buffer.len(), size - offset_in_file)` bytes starting at
/// `offset_in_file` within the file and returns the number of bytes
/// copied. Returns 0, without signalling an error, when `file_info` is
/// absent, denotes a directory, `offset_in_file` is at or past the end of
/// the file, or the underlying volume read fails — partial success is
/// never reported.
///
/// The only side effect is populating the front of `buffer`.
#[must_use]
pub fn read_file(
    volume: &dyn Volume,
    partition: Partition,
    file_info: Option<&dyn FileInfo>,
    buffer: &mut [u8],
    offset_in_file: u64,
) -> u64 {
    let Some(file_info) = file_info else { return 0 };
    if file_info.is_directory() || offset_in_file >= file_info.size() {
        return 0;
    }

    let read_length = (buffer.len() as u64).min(file_info.size() - offset_in_file);

    debug!(
        "reading {:#x} bytes at {:#x} from file {}. offset: {:#x} size: {:#x}",
        read_length,
        offset_in_file,
        file_info.name(),
        file_info.offset(),
        file_info.size()
    );

    #[allow(clippy::cast_possible_truncation)] // bounded by buffer.len()
    let destination = &mut buffer[..read_length as usize];
    if volume
        .read(file_info.offset() + offset_in_file, destination, partition)
        .is_err()
    {
        return 0;
    }

    read_length
}

/// Exports exactly one file's full contents to `export_path`.
///
/// # Errors
///
/// Returns [`ExportError::NotAFile`] if `file_info` is absent or denotes a
/// directory, and otherwise any error from [`export_data`].
pub fn export_file(
    volume: &dyn Volume,
    partition: Partition,
    file_info: Option<&dyn FileInfo>,
    export_path: &Path,
) -> Result<()> {
    let file_info = file_info.ok_or(ExportError::NotAFile)?;
    if file_info.is_directory() {
        return Err(ExportError::NotAFile);
    }

    export_data(
        volume,
        partition,
        file_info.offset(),
        file_info.size(),
        export_path,
    )
}
