//! Partition-aware disc image extraction.
//!
//! `discex-core` extracts files and well-known boot payloads from GameCube
//! and Wii disc images into a host filesystem. It consumes two external
//! abstractions — a [`Volume`] (read-only, partition-aware, byte-addressable
//! disc image) and a [`FileInfo`] tree (the disc's directory hierarchy) —
//! and turns them into concrete host-side files.
//!
//! Single exports run to completion or hard failure; batch directory
//! exports tolerate per-file failures and support cooperative cancellation
//! through a progress callback.
//!
//! # Examples
//!
//! ```no_run
//! use discex_core::Partition;
//! use discex_core::export_directory;
//! # use discex_core::{FileInfo, Volume};
//!
//! # fn demo(volume: &dyn Volume, root: &dyn FileInfo) {
//! let mut progress = |path: &str| {
//!     println!("exporting {path}");
//!     false // keep going
//! };
//! export_directory(
//!     volume,
//!     Partition::NONE,
//!     root,
//!     true,
//!     "",
//!     "/tmp/out".as_ref(),
//!     &mut progress,
//! );
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod boot;
pub mod error;
pub mod extraction;
pub mod filesystem;
pub mod test_utils;
pub mod volume;

// Re-export main API types
pub use boot::apploader_size;
pub use boot::boot_dol_offset;
pub use boot::boot_dol_size;
pub use boot::export_apploader;
pub use boot::export_dol;
pub use boot::export_system_data;
pub use error::ExportError;
pub use error::Result;
pub use extraction::MAX_CHUNK_SIZE;
pub use extraction::export_data;
pub use extraction::export_directory;
pub use extraction::export_file;
pub use extraction::read_file;
pub use filesystem::FileInfo;
pub use volume::Partition;
pub use volume::Platform;
pub use volume::Volume;
