//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// task-pkg - describe the task package and its build targets
#[derive(Parser)]
#[command(name = "task-pkg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file applied on top of the global and project config
    #[arg(long, global = true, env = "TASK_PKG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Descriptor file for the `core` dependency
    #[arg(long, global = true)]
    pub dependency_manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the package record
    Describe(DescribeArgs),

    /// List the build targets and the artifacts they link against
    Targets,

    /// Display the dependency tree
    Tree(TreeArgs),

    /// Print packages in build order
    Order,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
