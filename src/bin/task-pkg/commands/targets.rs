//! `task-pkg targets` command

use anyhow::Result;

use crate::cli::GlobalArgs;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    let pkg = super::load_package(global)?;

    for target in pkg.targets() {
        println!("{} ({})", target.name, target.kind);
        println!("  sources: {}", target.layout.sources.join(", "));
        println!("  include: {}", target.layout.include_dirs.join(", "));
        if !target.layout.defines.is_empty() {
            println!("  defines: {}", target.layout.defines.join(", "));
        }

        if target.dependencies.is_empty() {
            println!("  depends on: (none)");
        } else {
            let deps: Vec<String> = target.dependencies.iter().map(|a| a.to_string()).collect();
            println!("  depends on: {}", deps.join(", "));
        }
    }

    Ok(())
}
