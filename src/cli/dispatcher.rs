//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::detect::PackageManager;
use crate::error::{Result, UndepError};

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Remove {
            packages,
            manifest,
            root,
            manager,
        } => {
            let manager = manager
                .as_deref()
                .map(parse_manager)
                .transpose()?;

            commands::remove::run(commands::remove::RemoveOptions {
                packages: packages.clone(),
                manifest: manifest.clone(),
                root: root.clone(),
                manager,
                yes: args.global.yes,
                dry_run: args.global.dry_run,
            })
        }

        Command::List { manifest, json } => commands::list::run(commands::list::ListOptions {
            manifest: manifest.clone(),
            json: *json,
        }),

        Command::Completions { shell } => commands::completions::run(*shell),
    }
}

fn parse_manager(name: &str) -> Result<PackageManager> {
    name.parse()
        .map_err(|unknown: String| UndepError::UnknownManager(unknown))
}
