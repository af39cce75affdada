//! Command implementations

pub mod completions;
pub mod describe;
pub mod order;
pub mod targets;
pub mod tree;

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use task_pkg::ops::{dependency_provider, DescriptorBuilder};
use task_pkg::util::GlobalContext;
use task_pkg::Package;

/// Load configuration and assemble the package record.
pub fn load_package(global: &GlobalArgs) -> Result<Package> {
    let ctx = GlobalContext::new()?;

    let mut config = ctx.load_config(global.config.as_deref())?;
    if let Some(path) = &global.dependency_manifest {
        config.dependency.manifest = Some(ctx.cwd().join(path));
    }

    let builder = DescriptorBuilder::from_config(&config)?;
    let provider = dependency_provider(&config);

    builder
        .build(provider.as_ref())
        .with_context(|| format!("failed to describe package `{}`", builder.identity()))
}
