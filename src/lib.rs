pub mod cli;
pub mod commands;
pub mod detect;
pub mod error;
pub mod manifest;
pub mod remove;
pub mod ui;
pub mod utils;
pub mod workspace;

use clap::Parser;
use std::process::exit;

/// Run undep CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: mark cancellation, the batch stops issuing new
    //    subprocesses after the current one returns.
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
