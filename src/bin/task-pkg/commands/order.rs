//! `task-pkg order` command
//!
//! Prints one package per line, dependencies first.

use anyhow::Result;

use crate::cli::GlobalArgs;
use task_pkg::PackageGraph;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let pkg = super::load_package(global)?;
    let graph = PackageGraph::from_root(&pkg);

    for id in graph.build_order()? {
        println!("{}", id);
    }

    Ok(())
}
