//! Error types for disc extraction operations.

use thiserror::Error;

use crate::volume::Platform;

/// Result type alias using `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting disc contents.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Host file creation or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A volume read failed.
    #[error("volume read failed: {length:#x} bytes at {offset:#x}")]
    VolumeRead {
        /// Partition-relative offset of the failed read.
        offset: u64,
        /// Number of bytes requested.
        length: u64,
    },

    /// A file entry was required but the input was absent or a directory.
    #[error("entry is not a file")]
    NotAFile,

    /// The operation requires a disc-type medium.
    #[error("medium is not a disc image: {platform:?}")]
    NotADisc {
        /// The medium flavor that was encountered.
        platform: Platform,
    },
}

impl ExportError {
    /// Returns `true` if this error came from the volume rather than the
    /// host filesystem.
    #[must_use]
    pub const fn is_volume_error(&self) -> bool {
        matches!(self, Self::VolumeRead { .. } | Self::NotADisc { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_read_display() {
        let err = ExportError::VolumeRead {
            offset: 0x420,
            length: 4,
        };
        let display = err.to_string();
        assert!(display.contains("0x420"));
        assert!(display.contains("0x4"));
    }

    #[test]
    fn test_not_a_disc_display() {
        let err = ExportError::NotADisc {
            platform: Platform::WiiWad,
        };
        assert!(err.to_string().contains("not a disc"));
        assert!(err.to_string().contains("WiiWad"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(!err.is_volume_error());
    }

    #[test]
    fn test_is_volume_error() {
        let err = ExportError::VolumeRead {
            offset: 0,
            length: 1,
        };
        assert!(err.is_volume_error());

        let err = ExportError::NotADisc {
            platform: Platform::WiiWad,
        };
        assert!(err.is_volume_error());

        assert!(!ExportError::NotAFile.is_volume_error());
    }
}
