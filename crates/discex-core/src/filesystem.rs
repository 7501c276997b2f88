//! Filesystem tree interface.

/// One entry (file or directory) in a disc's directory tree.
///
/// Entries are owned by the external filesystem parser; extraction code
/// only holds borrowed references while walking the tree. The tree builder
/// guarantees that `offset() + size()` stays within the partition extent.
pub trait FileInfo {
    /// Entry name, without path separators.
    fn name(&self) -> &str;

    /// Byte offset of the entry's contents within its partition.
    fn offset(&self) -> u64;

    /// Size in bytes. Only meaningful for files.
    fn size(&self) -> u64;

    /// Returns `true` if this entry is a directory.
    fn is_directory(&self) -> bool;

    /// Direct children in native directory order. Empty for files.
    fn children(&self) -> Box<dyn Iterator<Item = &dyn FileInfo> + '_>;
}
