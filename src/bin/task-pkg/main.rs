//! task-pkg CLI - describe the task package for a build orchestrator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use task_pkg::util::diagnostic::{
    self, suggestions, ConfigLoadError, DescriptorLoadError, Diagnostic, InvalidIdentityError,
};

fn main() {
    let cli = Cli::parse();
    let color = !cli.global.no_color;

    // Set up logging
    let filter = if cli.global.verbose {
        EnvFilter::new("task_pkg=debug")
    } else {
        EnvFilter::new("task_pkg=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli) {
        diagnostic::emit(&error_diagnostic(&e), color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Describe(args) => commands::describe::execute(args, &cli.global),
        Commands::Targets => commands::targets::execute(&cli.global),
        Commands::Tree(args) => commands::tree::execute(args, &cli.global),
        Commands::Order => commands::order::execute(&cli.global),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn error_diagnostic(err: &anyhow::Error) -> Diagnostic {
    let diag = Diagnostic::from_error(err);

    if err.downcast_ref::<InvalidIdentityError>().is_some() {
        diag.with_suggestion(suggestions::INVALID_IDENTITY)
    } else if let Some(load) = err.downcast_ref::<DescriptorLoadError>() {
        diag.with_location(&load.path)
            .with_suggestion(suggestions::DESCRIPTOR_LOAD_FAILED)
    } else if let Some(load) = err.downcast_ref::<ConfigLoadError>() {
        diag.with_location(&load.path)
            .with_suggestion(suggestions::CONFIG_INVALID)
    } else {
        diag
    }
}
