pub mod completions;
pub mod list;
pub mod remove;

use crate::error::{Result, UndepError};
use crate::manifest::MANIFEST_FILE;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the manifest to operate on: an explicit `--manifest` path or
/// `./package.json`. Returns the canonicalized path so the manifest's
/// directory is stable regardless of how the path was spelled.
pub(crate) fn locate_manifest(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));

    if !path.is_file() {
        return Err(UndepError::MissingManifest { path });
    }

    fs::canonicalize(&path).map_err(|e| UndepError::IoError {
        path,
        source: e,
    })
}

/// Parent directory of a canonicalized manifest path.
pub(crate) fn manifest_dir(manifest_path: &Path) -> Result<PathBuf> {
    manifest_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| UndepError::Other("package.json has no parent directory".to_string()))
}
