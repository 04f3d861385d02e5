//! Package manager detection
//!
//! Infers which manager governs a directory from lockfile markers alone.
//! Only file existence is checked, never file content, so detection is
//! recomputed cheaply on every invocation.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

// Supported managers.
// To add one, extend the variant list and update display(), from_str(),
// remove_invocation() and LOCKFILES.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Marker files in detection priority order. A directory carrying several
/// markers (e.g. after a manager migration) is governed by the first match,
/// favoring yarn/pnpm over npm/bun.
pub const LOCKFILES: &[(&str, PackageManager)] = &[
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("package-lock.json", PackageManager::Npm),
    ("bun.lock", PackageManager::Bun),
    ("bun.lockb", PackageManager::Bun),
];

impl PackageManager {
    /// Executable name on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Canonical removal invocation: binary plus subcommand.
    pub fn remove_invocation(&self) -> (&'static str, &'static str) {
        match self {
            Self::Npm => ("npm", "uninstall"),
            Self::Yarn => ("yarn", "remove"),
            Self::Pnpm => ("pnpm", "remove"),
            Self::Bun => ("bun", "remove"),
        }
    }

    pub fn is_available(&self) -> bool {
        which::which(self.binary()).is_ok()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            other => Err(other.to_string()),
        }
    }
}

/// Detect the manager governing `dir`, or `None` when no marker is present.
pub fn detect(dir: &Path) -> Option<PackageManager> {
    LOCKFILES
        .iter()
        .find(|(marker, _)| dir.join(marker).is_file())
        .map(|(_, manager)| *manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn detects_each_manager_from_its_lockfile() {
        for (marker, expected) in [
            ("yarn.lock", PackageManager::Yarn),
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("package-lock.json", PackageManager::Npm),
            ("bun.lock", PackageManager::Bun),
            ("bun.lockb", PackageManager::Bun),
        ] {
            let dir = tempdir().unwrap();
            touch(dir.path(), marker);
            assert_eq!(detect(dir.path()), Some(expected), "marker {marker}");
        }
    }

    #[test]
    fn yarn_wins_the_tie_break_over_npm() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "yarn.lock");
        touch(dir.path(), "package-lock.json");
        assert_eq!(detect(dir.path()), Some(PackageManager::Yarn));
    }

    #[test]
    fn npm_wins_the_tie_break_over_bun() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "bun.lockb");
        touch(dir.path(), "package-lock.json");
        assert_eq!(detect(dir.path()), Some(PackageManager::Npm));
    }

    #[test]
    fn unmarked_directory_detects_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "package.json");
        assert_eq!(detect(dir.path()), None);
    }

    #[test]
    fn removal_invocations_match_each_manager() {
        assert_eq!(PackageManager::Npm.remove_invocation(), ("npm", "uninstall"));
        assert_eq!(PackageManager::Yarn.remove_invocation(), ("yarn", "remove"));
        assert_eq!(PackageManager::Pnpm.remove_invocation(), ("pnpm", "remove"));
        assert_eq!(PackageManager::Bun.remove_invocation(), ("bun", "remove"));
    }

    #[test]
    fn parses_manager_names() {
        assert_eq!("pnpm".parse(), Ok(PackageManager::Pnpm));
        assert!("cargo".parse::<PackageManager>().is_err());
    }
}
