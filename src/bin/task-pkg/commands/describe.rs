//! `task-pkg describe` command

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{DescribeArgs, GlobalArgs, OutputFormat};
use task_pkg::Package;

#[derive(Serialize)]
struct DescribeOutput<'a> {
    fingerprint: String,
    descriptor: &'a Package,
}

pub fn execute(args: DescribeArgs, global: &GlobalArgs) -> Result<()> {
    let pkg = super::load_package(global)?;

    let output = DescribeOutput {
        fingerprint: pkg.fingerprint(),
        descriptor: &pkg,
    };

    let text = match args.format {
        OutputFormat::Toml => {
            toml::to_string_pretty(&output).context("failed to serialize package as TOML")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&output).context("failed to serialize package as JSON")?
        }
    };

    println!("{}", text);
    Ok(())
}
