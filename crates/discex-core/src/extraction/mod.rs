//! File and directory extraction.
//!
//! All exporters funnel through [`export_data`], which streams an arbitrary
//! partition-relative byte range into a host file in bounded chunks.

pub mod data;
pub mod directory;
pub mod file;

pub use data::MAX_CHUNK_SIZE;
pub use data::export_data;
pub use directory::export_directory;
pub use file::export_file;
pub use file::read_file;
