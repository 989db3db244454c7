//! @acp:module "Packager"
//! @acp:summary "Walks a project tree and emits its deflate-compressed zip archive"
//! @acp:domain cli
//! @acp:layer service

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ModError, Result};

/// @acp:summary "Archive every file under the project root into `<folder>.zip`"
///
/// The archive is placed inside the root and entry names are root-relative
/// with forward slashes. Every file reachable at call time appears exactly
/// once; the archive being written is the sole exclusion (it cannot contain
/// itself).
pub fn pack_project(project_root: &Path) -> Result<PathBuf> {
    let folder_name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ModError::Other(format!("not a project folder: {}", project_root.display())))?;
    let zip_path = project_root.join(format!("{}.zip", folder_name));

    let file = File::create(&zip_path).map_err(|e| ModError::fs("create", &zip_path, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;
    for entry in WalkDir::new(project_root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || entry.path() == zip_path {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(project_root) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)?;
        let mut source =
            File::open(entry.path()).map_err(|e| ModError::fs("open", entry.path(), e))?;
        io::copy(&mut source, &mut zip).map_err(|e| ModError::fs("write", &zip_path, e))?;
        entries += 1;
    }

    zip.finish()?;
    tracing::debug!(archive = %zip_path.display(), entries, "project packaged");
    Ok(zip_path)
}
