//! Recursive directory export.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::error;
use log::info;

use crate::filesystem::FileInfo;
use crate::volume::Partition;
use crate::volume::Volume;

use super::file::export_file;

/// One directory being walked: its pending children and the logical/host
/// paths that mirror it.
struct Frame<'a> {
    children: Box<dyn Iterator<Item = &'a dyn FileInfo> + 'a>,
    filesystem_path: String,
    export_folder: PathBuf,
}

impl<'a> Frame<'a> {
    fn new(directory: &'a dyn FileInfo, filesystem_path: String, export_folder: PathBuf) -> Self {
        // Creation failure is not fatal here: every file export below this
        // folder will fail and be logged individually.
        if let Err(e) = fs::create_dir_all(&export_folder) {
            error!("could not create {}: {e}", export_folder.display());
        }

        Self {
            children: directory.children(),
            filesystem_path,
            export_folder,
        }
    }
}

/// Recursively mirrors a disc subtree under `export_folder`.
///
/// Children are visited depth first in native directory order. For every
/// entry, `update_progress` is called with the entry's disc-relative path
/// (`filesystem_path` + name, with a trailing `/` for directories);
/// returning `true` cancels the walk immediately, leaving already exported
/// entries in place.
///
/// Host files that already exist are skipped with a notice and never
/// overwritten, so re-running an export onto its own previous output
/// changes nothing. A single file's export failure is logged and the walk
/// continues; only cancellation stops it, which is why this call reports
/// no success value. Directories are only descended into when `recursive`
/// is set; otherwise they are skipped entirely.
///
/// The walk keeps an explicit frame stack, so tree depth never translates
/// into call-stack depth.
pub fn export_directory(
    volume: &dyn Volume,
    partition: Partition,
    directory: &dyn FileInfo,
    recursive: bool,
    filesystem_path: &str,
    export_folder: &Path,
    update_progress: &mut dyn FnMut(&str) -> bool,
) {
    let mut stack = vec![Frame::new(
        directory,
        filesystem_path.to_owned(),
        export_folder.to_path_buf(),
    )];

    while let Some(frame) = stack.last_mut() {
        let Some(child) = frame.children.next() else {
            stack.pop();
            continue;
        };

        let name = child.name();
        let path = if child.is_directory() {
            format!("{}{name}/", frame.filesystem_path)
        } else {
            format!("{}{name}", frame.filesystem_path)
        };
        let export_path = frame.export_folder.join(name);

        if update_progress(&path) {
            return;
        }

        debug!("{}", export_path.display());

        if !child.is_directory() {
            if export_path.exists() {
                info!("{} already exists", export_path.display());
            } else if let Err(e) = export_file(volume, partition, Some(child), &export_path) {
                error!("could not export {}: {e}", export_path.display());
            }
        } else if recursive {
            stack.push(Frame::new(child, path, export_path));
        }
    }
}
