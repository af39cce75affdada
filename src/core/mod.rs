//! Core data structures.
//!
//! This module contains the foundational types:
//! - Package identities
//! - Build targets and the artifacts they link against
//! - Descriptors and the providers that produce them
//! - The assembled package record

pub mod descriptor;
pub mod package;
pub mod package_id;
pub mod provider;
pub mod target;

pub use descriptor::{PackageDescriptor, StaticDescriptor};
pub use package::Package;
pub use package_id::PackageIdentity;
pub use provider::{ManifestProvider, PackageProvider};
pub use target::{Artifact, Target, TargetKind, TargetLayout};
