//! task-pkg - package descriptor for the `task` C++ library
//!
//! This crate describes the `task` package for a build orchestrator: its
//! identity, its dependency on `core`, and the main and test libraries that
//! link against the corresponding `core` libraries.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fakes for unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    descriptor::PackageDescriptor, package::Package, package_id::PackageIdentity,
    provider::PackageProvider, target::Artifact, target::Target,
};

pub use ops::{get_package, DescriptorBuilder, PackageGraph};
pub use util::context::GlobalContext;
