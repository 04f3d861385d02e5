//! package.json parsing
//!
//! Reads a manifest into its four dependency groups and flattens them into
//! labeled, removable entries. Entries linked into the workspace via a
//! `workspace:` version constraint are filtered out here; they are never
//! offered for removal.

use crate::error::{Result, UndepError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// Manifest filename expected in every target directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Version-constraint marker for workspace-internal packages.
pub const WORKSPACE_MARKER: &str = "workspace:";

// The four recognized groups, in the fixed order entries are reported in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyGroup {
    Dependency,
    DevDependency,
    PeerDependency,
    OptionalDependency,
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependency => write!(f, "dependency"),
            Self::DevDependency => write!(f, "devDependency"),
            Self::PeerDependency => write!(f, "peerDependency"),
            Self::OptionalDependency => write!(f, "optionalDependency"),
        }
    }
}

/// One removable manifest entry, labeled with its originating group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub group: DependencyGroup,
    pub name: String,
}

/// Dependency groups of a package.json. Other manifest fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: Map<String, Value>,
    #[serde(default, rename = "optionalDependencies")]
    optional_dependencies: Map<String, Value>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| UndepError::ManifestParse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| UndepError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text)
    }

    fn groups(&self) -> [(DependencyGroup, &Map<String, Value>); 4] {
        [
            (DependencyGroup::Dependency, &self.dependencies),
            (DependencyGroup::DevDependency, &self.dev_dependencies),
            (DependencyGroup::PeerDependency, &self.peer_dependencies),
            (DependencyGroup::OptionalDependency, &self.optional_dependencies),
        ]
    }

    /// Flatten the groups into labeled entries, dropping workspace-linked
    /// ones. Group order is fixed; key order within a group is the
    /// manifest's own.
    pub fn entries(&self) -> Vec<DependencyEntry> {
        let mut entries = Vec::new();
        for (group, map) in self.groups() {
            for (name, constraint) in map {
                if is_workspace_constraint(constraint) {
                    continue;
                }
                entries.push(DependencyEntry {
                    group,
                    name: name.clone(),
                });
            }
        }
        entries
    }

    /// True if `name` appears in any group with a `workspace:` constraint.
    pub fn workspace_linked(&self, name: &str) -> bool {
        self.groups()
            .iter()
            .filter_map(|(_, map)| map.get(name))
            .any(is_workspace_constraint)
    }
}

fn is_workspace_constraint(constraint: &Value) -> bool {
    constraint
        .as_str()
        .is_some_and(|v| v.contains(WORKSPACE_MARKER))
}

/// Parse manifest text straight to the flat entry list.
pub fn parse(text: &str) -> Result<Vec<DependencyEntry>> {
    Ok(Manifest::parse(text)?.entries())
}
