//! Project root resolution
//!
//! Decides which manager governs a manifest and where removal commands run.
//! In a monorepo the member's manifest directory may carry no lockfile; the
//! manager identity then comes from the project root, but commands still run
//! in the member directory. Workspace-aware managers (yarn, pnpm, npm >= 7,
//! bun) scope the removal correctly when invoked from the member package.

use crate::detect::{self, PackageManager};
use crate::error::{Result, UndepError};
use std::path::{Path, PathBuf};

/// Outcome of resolution: which manager to run, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub manager: PackageManager,
    pub run_dir: PathBuf,
}

/// Resolve the governing manager for `manifest_dir`, consulting
/// `project_root` as a fallback for the identity only.
pub fn resolve(manifest_dir: &Path, project_root: Option<&Path>) -> Result<Resolution> {
    let root = project_root.ok_or(UndepError::NoWorkspaceContext)?;

    if let Some(manager) = detect::detect(manifest_dir) {
        return Ok(Resolution {
            manager,
            run_dir: manifest_dir.to_path_buf(),
        });
    }

    if root != manifest_dir
        && let Some(manager) = detect::detect(root)
    {
        // Identity from the root, run_dir stays at the manifest.
        return Ok(Resolution {
            manager,
            run_dir: manifest_dir.to_path_buf(),
        });
    }

    Err(UndepError::NoPackageManagerFound {
        manifest_dir: manifest_dir.to_path_buf(),
        project_root: root.to_path_buf(),
    })
}

/// Walk up from `start` to the nearest directory that looks like a project
/// root: one carrying a lockfile marker or a `.git` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| detect::detect(dir).is_some() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_project_root_fails_before_detection() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            resolve(dir.path(), None),
            Err(UndepError::NoWorkspaceContext)
        ));
    }

    #[test]
    fn local_lockfile_makes_the_manifest_dir_authoritative() {
        let root = tempdir().unwrap();
        let member = root.path().join("packages/app");
        fs::create_dir_all(&member).unwrap();
        fs::write(root.path().join("pnpm-lock.yaml"), "").unwrap();
        fs::write(member.join("package-lock.json"), "").unwrap();

        let res = resolve(&member, Some(root.path())).unwrap();
        assert_eq!(res.manager, PackageManager::Npm);
        assert_eq!(res.run_dir, member);
    }

    #[test]
    fn monorepo_fallback_takes_identity_from_root_but_runs_locally() {
        let root = tempdir().unwrap();
        let member = root.path().join("packages/app");
        fs::create_dir_all(&member).unwrap();
        fs::write(root.path().join("yarn.lock"), "").unwrap();

        let res = resolve(&member, Some(root.path())).unwrap();
        assert_eq!(res.manager, PackageManager::Yarn);
        assert_eq!(res.run_dir, member);
    }

    #[test]
    fn no_lockfile_anywhere_reports_both_directories() {
        let root = tempdir().unwrap();
        let member = root.path().join("packages/app");
        fs::create_dir_all(&member).unwrap();

        match resolve(&member, Some(root.path())) {
            Err(UndepError::NoPackageManagerFound {
                manifest_dir,
                project_root,
            }) => {
                assert_eq!(manifest_dir, member);
                assert_eq!(project_root, root.path());
            }
            other => panic!("expected NoPackageManagerFound, got {other:?}"),
        }
    }

    #[test]
    fn find_project_root_stops_at_the_nearest_marker() {
        let root = tempdir().unwrap();
        let member = root.path().join("packages/app");
        fs::create_dir_all(&member).unwrap();
        fs::write(root.path().join("yarn.lock"), "").unwrap();

        assert_eq!(find_project_root(&member), Some(root.path().to_path_buf()));
        // A lockfile in the member itself wins over the enclosing root.
        fs::write(member.join("bun.lock"), "").unwrap();
        assert_eq!(find_project_root(&member), Some(member.clone()));
    }

    #[test]
    fn find_project_root_accepts_a_git_directory() {
        let root = tempdir().unwrap();
        let member = root.path().join("srv");
        fs::create_dir_all(root.path().join(".git")).unwrap();
        fs::create_dir_all(&member).unwrap();

        assert_eq!(find_project_root(&member), Some(root.path().to_path_buf()));
    }
}
