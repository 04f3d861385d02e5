use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "undep",
    about = "Remove Node.js dependencies with whichever package manager owns the project",
    long_about = "Detects the package manager governing a project (npm, yarn, pnpm or bun) \
from its lockfile and drives the manager's own removal subcommand, one package at a time.",
    version,
    arg_required_else_help = true,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Preview the removal commands without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove one or more dependencies from a project
    Remove {
        /// Package names as they appear in package.json
        #[arg(required = true)]
        packages: Vec<String>,

        /// Path to the package.json to operate on (default: ./package.json)
        #[arg(long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Project root directory, for monorepo member packages
        /// (default: walk up from the manifest looking for a lockfile or .git)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Override manager detection (npm, yarn, pnpm, bun)
        #[arg(long, value_name = "MANAGER")]
        manager: Option<String>,
    },

    /// List the removable dependency entries of a manifest
    List {
        /// Path to the package.json to inspect (default: ./package.json)
        #[arg(long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn remove_requires_at_least_one_package() {
        assert!(Cli::try_parse_from(["undep", "remove"]).is_err());
        assert!(Cli::try_parse_from(["undep", "remove", "lodash"]).is_ok());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["undep", "remove", "lodash", "--dry-run", "-q"]).unwrap();
        assert!(cli.global.dry_run);
        assert!(cli.global.quiet);
    }
}
