//! High-level operations.
//!
//! This module assembles package records and the graphs built from them.

pub mod core_package;
pub mod graph;
pub mod task_package;

pub use graph::PackageGraph;
pub use task_package::{dependency_provider, get_package, DescriptorBuilder};
