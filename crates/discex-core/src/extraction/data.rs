//! Bulk data export with bounded memory use.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Result;
use crate::volume::Partition;
use crate::volume::Volume;

/// Upper bound on a single transfer chunk (128 MiB).
///
/// Keeps peak memory use constant regardless of how large the exported
/// range is.
pub const MAX_CHUNK_SIZE: u64 = 0x0800_0000;

/// Copies `size` bytes starting at `offset` (partition-relative) from the
/// volume into a newly created host file at `export_path`.
///
/// The destination is created, or truncated if it already exists. The
/// transfer happens in chunks of at most [`MAX_CHUNK_SIZE`] bytes; the
/// final chunk may be smaller. On failure the partially written file is
/// left in place — no rollback is attempted.
///
/// # Errors
///
/// Returns an error if the destination cannot be created, a volume read
/// fails, or a host write fails.
pub fn export_data(
    volume: &dyn Volume,
    partition: Partition,
    offset: u64,
    size: u64,
    export_path: &Path,
) -> Result<()> {
    export_data_chunked(volume, partition, offset, size, export_path, MAX_CHUNK_SIZE)
}

/// Chunk walk behind [`export_data`], parameterized over the chunk size so
/// the boundary handling stays testable without 128 MiB fixtures.
pub(crate) fn export_data_chunked(
    volume: &dyn Volume,
    partition: Partition,
    mut offset: u64,
    mut size: u64,
    export_path: &Path,
    chunk_size: u64,
) -> Result<()> {
    let mut out = File::create(export_path)?;

    while size > 0 {
        let read_size = size.min(chunk_size);

        #[allow(clippy::cast_possible_truncation)] // capped at MAX_CHUNK_SIZE
        let mut buffer = vec![0u8; read_size as usize];

        volume.read(offset, &mut buffer, partition)?;
        out.write_all(&buffer)?;

        size -= read_size;
        offset += read_size;
    }

    Ok(())
}
