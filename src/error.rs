use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UndepError {
    #[error("Failed to parse package.json: {0}")]
    ManifestParse(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No project context: cannot determine a project root directory")]
    NoWorkspaceContext,

    #[error(
        "No package manager found: neither '{manifest_dir}' nor '{project_root}' contains a known lockfile"
    )]
    NoPackageManagerFound {
        manifest_dir: PathBuf,
        project_root: PathBuf,
    },

    #[error("No package.json at '{path}'")]
    MissingManifest { path: PathBuf },

    #[error("Package manager '{0}' is not installed or not on PATH")]
    ManagerUnavailable(String),

    #[error("Unknown package manager: {0}")]
    UnknownManager(String),

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("{failed} of {total} removals failed")]
    RemovalsFailed { failed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, UndepError>;
