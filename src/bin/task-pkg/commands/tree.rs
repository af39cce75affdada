//! `task-pkg tree` command

use anyhow::Result;

use crate::cli::{GlobalArgs, TreeArgs};
use task_pkg::PackageGraph;

pub fn execute(args: TreeArgs, global: &GlobalArgs) -> Result<()> {
    let pkg = super::load_package(global)?;
    let graph = PackageGraph::from_root(&pkg);

    for line in graph.tree_lines(args.depth.unwrap_or(usize::MAX)) {
        println!("{}", line);
    }

    Ok(())
}
