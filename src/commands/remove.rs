//! `undep remove` — the removal flow
//!
//! Loads the manifest, resolves the governing manager and run directory,
//! then drives the batch while rendering progress. Workspace-linked names
//! are skipped with a warning; a failed item never aborts the rest.

use crate::detect::PackageManager;
use crate::error::{Result, UndepError};
use crate::manifest::Manifest;
use crate::remove::{RemovalBatch, RemovalDirective, RemovalOutcome};
use crate::ui;
use crate::ui::progress::ProgressBar;
use crate::workspace::{self, Resolution};
use std::path::PathBuf;

pub struct RemoveOptions {
    pub packages: Vec<String>,
    pub manifest: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub manager: Option<PackageManager>,
    pub yes: bool,
    pub dry_run: bool,
}

pub fn run(opts: RemoveOptions) -> Result<()> {
    let manifest_path = super::locate_manifest(opts.manifest.as_deref())?;
    let manifest_dir = super::manifest_dir(&manifest_path)?;
    let manifest = Manifest::load(&manifest_path)?;

    // Workspace-linked dependencies are never removable through this flow.
    // Names absent from the manifest are still forwarded; the manager
    // reports those itself.
    let mut packages = Vec::new();
    for name in &opts.packages {
        if manifest.workspace_linked(name) {
            ui::warning(&format!("'{name}' is workspace-linked; skipping"));
        } else {
            packages.push(name.clone());
        }
    }

    if packages.is_empty() {
        ui::info("Nothing to remove.");
        return Ok(());
    }

    let resolution = match opts.manager {
        Some(manager) => Resolution {
            manager,
            run_dir: manifest_dir.clone(),
        },
        None => {
            let root = opts
                .root
                .clone()
                .or_else(|| workspace::find_project_root(&manifest_dir));
            workspace::resolve(&manifest_dir, root.as_deref())?
        }
    };

    ui::detail(&format!(
        "manager: {}, run dir: {}",
        resolution.manager,
        resolution.run_dir.display()
    ));

    if opts.dry_run {
        let (binary, subcommand) = resolution.manager.remove_invocation();
        for name in &packages {
            println!("{binary} {subcommand} {name}");
        }
        return Ok(());
    }

    if !resolution.manager.is_available() {
        return Err(UndepError::ManagerUnavailable(
            resolution.manager.binary().to_string(),
        ));
    }

    if !opts.yes
        && !ui::prompt_yes_no(&format!(
            "Remove {} package(s) with {}?",
            packages.len(),
            resolution.manager
        ))
    {
        ui::info("Aborted.");
        return Ok(());
    }

    let batch = RemovalBatch::start(RemovalDirective {
        manager: resolution.manager,
        run_dir: resolution.run_dir,
        packages,
    })?;
    let total = batch.total();
    let manager = batch.manager();

    let mut bar = ProgressBar::new(total, "Removing");
    let mut outcomes: Vec<RemovalOutcome> = Vec::with_capacity(total);

    for outcome in batch {
        bar.set_message(&outcome.package);
        // The completion fraction counts successful removals only.
        if outcome.succeeded() {
            bar.inc();
        }
        outcomes.push(outcome);

        // Ctrl-C: finish the current item, issue no further subprocesses.
        if ui::interrupted() {
            break;
        }
    }
    bar.finish();

    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => ui::detail(&format!("{} removed", outcome.package)),
            Err(detail) => {
                ui::error(&format!("Failed to remove '{}': {detail}", outcome.package))
            }
        }
    }

    if ui::interrupted() && outcomes.len() < total {
        ui::warning(&format!(
            "Interrupted after {} of {} removals.",
            outcomes.len(),
            total
        ));
    }

    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    let removed = outcomes.len() - failed;

    if failed == 0 {
        ui::success(&format!("Removed {removed} package(s) with {manager}."));
        Ok(())
    } else {
        if removed > 0 {
            ui::info(&format!("Removed {removed} package(s) with {manager}."));
        }
        Err(UndepError::RemovalsFailed {
            failed,
            total: outcomes.len(),
        })
    }
}
