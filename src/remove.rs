//! Removal orchestration
//!
//! Drives one removal subprocess per package, sequentially and in input
//! order. A failing item is recorded and the batch moves on; only the
//! precondition checks abort the whole directive.

use crate::detect::PackageManager;
use crate::error::{Result, UndepError};
use crate::manifest::MANIFEST_FILE;
use crate::utils::sanitize;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Everything the orchestrator needs for one batch.
#[derive(Debug, Clone)]
pub struct RemovalDirective {
    pub manager: PackageManager,
    pub run_dir: PathBuf,
    pub packages: Vec<String>,
}

/// Per-package result, in input order. The error side carries the
/// subprocess stderr or the launch failure text.
#[derive(Debug)]
pub struct RemovalOutcome {
    pub package: String,
    pub result: std::result::Result<(), String>,
}

impl RemovalOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Lazy, ordered sequence of removal outcomes. Each `next()` runs one
/// subprocess to completion; dropping the batch early issues no further
/// subprocesses and never kills an in-flight one.
#[derive(Debug)]
pub struct RemovalBatch {
    directive: RemovalDirective,
    next: usize,
}

impl RemovalBatch {
    /// Validate the directive and bind the batch. No subprocess runs here:
    /// unsafe package names and a missing manifest in the run directory
    /// fail the whole directive up front.
    pub fn start(directive: RemovalDirective) -> Result<Self> {
        sanitize::validate_package_names(&directive.packages)?;

        let manifest = directive.run_dir.join(MANIFEST_FILE);
        if !manifest.is_file() {
            return Err(UndepError::MissingManifest { path: manifest });
        }

        Ok(Self { directive, next: 0 })
    }

    pub fn total(&self) -> usize {
        self.directive.packages.len()
    }

    pub fn manager(&self) -> PackageManager {
        self.directive.manager
    }

    fn run_one(&self, package: &str) -> std::result::Result<(), String> {
        let (binary, subcommand) = self.directive.manager.remove_invocation();

        let output = Command::new(binary)
            .arg(subcommand)
            .arg(package)
            .current_dir(&self.directive.run_dir)
            .stdin(Stdio::null())
            .output();

        match output {
            Err(e) => Err(format!("failed to launch {binary}: {e}")),
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                let detail = stderr.trim();
                if detail.is_empty() {
                    Err(format!("{binary} exited with {}", out.status))
                } else {
                    Err(detail.to_string())
                }
            }
        }
    }
}

impl Iterator for RemovalBatch {
    type Item = RemovalOutcome;

    fn next(&mut self) -> Option<RemovalOutcome> {
        let package = self.directive.packages.get(self.next)?.clone();
        self.next += 1;
        let result = self.run_one(&package);
        Some(RemovalOutcome { package, result })
    }
}
