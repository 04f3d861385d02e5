//! `undep list` — show the removable entries of a manifest.

use crate::error::{Result, UndepError};
use crate::manifest::Manifest;
use crate::ui;
use colored::Colorize;
use std::path::PathBuf;

pub struct ListOptions {
    pub manifest: Option<PathBuf>,
    pub json: bool,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let manifest_path = super::locate_manifest(opts.manifest.as_deref())?;
    let entries = Manifest::load(&manifest_path)?.entries();

    if opts.json {
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| UndepError::Other(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    if entries.is_empty() {
        ui::info("No removable dependencies in package.json.");
        return Ok(());
    }

    ui::header(&format!("Removable dependencies ({})", entries.len()));
    for entry in &entries {
        println!(
            "{} {}",
            format!("{}:", entry.group).dimmed(),
            entry.name
        );
    }

    Ok(())
}
