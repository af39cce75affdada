//! Test fixtures for common test scenarios.

use std::sync::Arc;

use crate::core::{Artifact, Package, PackageDescriptor, PackageIdentity, StaticDescriptor, Target};

/// Repository path used by fixture packages.
pub const FIXTURE_REPO: &str = "github.com/fixture";

/// Descriptor file content for a `core` package exporting `core` and `core_test`.
pub const CORE_DESCRIPTOR_TOML: &str = r#"main_lib = ["core"]
test_lib = ["core_test"]

[package]
repo_path = "github.com/jurgen-kluft"
name = "core"
"#;

/// A leaf descriptor exporting `<name>` and `<name>_test`.
pub fn leaf(name: &str) -> Arc<dyn PackageDescriptor> {
    Arc::new(
        StaticDescriptor::new(PackageIdentity::new(FIXTURE_REPO, name))
            .with_main_lib([Artifact::main_lib(name)])
            .with_test_lib([Artifact::test_lib(name)]),
    )
}

/// A package record depending on `deps`, linking against their artifacts.
pub fn package_with_deps(name: &str, deps: &[Arc<dyn PackageDescriptor>]) -> Package {
    let mut main_lib = Target::main_lib(name);
    let mut test_lib = Target::test_lib(name);
    for dep in deps {
        main_lib.add_dependencies(dep.main_lib_artifacts());
        test_lib.add_dependencies(dep.test_lib_artifacts());
    }

    let mut pkg = Package::new(PackageIdentity::new(FIXTURE_REPO, name), main_lib, test_lib);
    for dep in deps {
        pkg.add_package(dep.clone());
    }
    pkg
}
