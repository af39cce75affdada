//! Package descriptors - what a package exposes to its dependents.
//!
//! A dependent never looks inside another package's build definition. It
//! reads the package identity and the two artifact lists it must link
//! against.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::package_id::PackageIdentity;
use crate::core::target::{Artifact, TargetKind};
use crate::util::diagnostic::DescriptorLoadError;

/// The view of a package that its dependents consume.
pub trait PackageDescriptor: fmt::Debug + Send + Sync {
    /// The package identity.
    fn identity(&self) -> &PackageIdentity;

    /// Artifacts a dependent's main library links against, in order.
    fn main_lib_artifacts(&self) -> Vec<Artifact>;

    /// Artifacts a dependent's test library links against, in order.
    fn test_lib_artifacts(&self) -> Vec<Artifact>;

    /// Packages this package depends on.
    fn dependencies(&self) -> Vec<Arc<dyn PackageDescriptor>> {
        Vec::new()
    }
}

/// A descriptor holding fixed artifact lists.
///
/// Used for dependencies known only through their exported artifacts,
/// e.g. ones loaded from a descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDescriptor {
    identity: PackageIdentity,
    main_lib: Vec<Artifact>,
    test_lib: Vec<Artifact>,
}

impl StaticDescriptor {
    /// Create a descriptor with empty artifact lists.
    pub fn new(identity: PackageIdentity) -> Self {
        StaticDescriptor {
            identity,
            main_lib: Vec::new(),
            test_lib: Vec::new(),
        }
    }

    /// Set the exported main library artifacts.
    pub fn with_main_lib(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.main_lib = artifacts.into_iter().collect();
        self
    }

    /// Set the exported test library artifacts.
    pub fn with_test_lib(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.test_lib = artifacts.into_iter().collect();
        self
    }

    /// Load a descriptor from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| DescriptorLoadError::read(path))?;

        Self::parse(&contents).with_context(|| DescriptorLoadError::parse(path))
    }

    /// Parse a descriptor from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: DescriptorManifest = toml::from_str(contents)?;
        manifest.into_descriptor()
    }
}

impl PackageDescriptor for StaticDescriptor {
    fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    fn main_lib_artifacts(&self) -> Vec<Artifact> {
        self.main_lib.clone()
    }

    fn test_lib_artifacts(&self) -> Vec<Artifact> {
        self.test_lib.clone()
    }
}

/// On-disk form of a [`StaticDescriptor`].
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorManifest {
    /// Package identity
    pub package: ManifestIdentity,

    /// Main library target names
    #[serde(default)]
    pub main_lib: Vec<String>,

    /// Test library target names
    #[serde(default)]
    pub test_lib: Vec<String>,
}

/// The `[package]` table of a descriptor file.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestIdentity {
    pub repo_path: String,
    pub name: String,
}

impl DescriptorManifest {
    /// Validate the identity and convert into a descriptor.
    pub fn into_descriptor(self) -> Result<StaticDescriptor> {
        let identity = PackageIdentity::parse(&self.package.repo_path, self.package.name)?;
        let package = identity.name().to_string();

        let main_lib = self
            .main_lib
            .into_iter()
            .map(|target| Artifact::new(package.clone(), target, TargetKind::MainLib));
        let test_lib = self
            .test_lib
            .into_iter()
            .map(|target| Artifact::new(package.clone(), target, TargetKind::TestLib));

        Ok(StaticDescriptor::new(identity)
            .with_main_lib(main_lib)
            .with_test_lib(test_lib))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let desc = StaticDescriptor::parse(
            r#"
main_lib = ["core"]
test_lib = ["core_test"]

[package]
repo_path = "github.com\\jurgen-kluft"
name = "core"
"#,
        )
        .unwrap();

        assert_eq!(
            desc.identity(),
            &PackageIdentity::new("github.com/jurgen-kluft", "core")
        );
        assert_eq!(desc.main_lib_artifacts(), vec![Artifact::main_lib("core")]);
        assert_eq!(desc.test_lib_artifacts(), vec![Artifact::test_lib("core")]);
        assert!(desc.dependencies().is_empty());
    }

    #[test]
    fn test_parse_descriptor_without_targets() {
        let desc = StaticDescriptor::parse(
            r#"
[package]
repo_path = "github.com/x"
name = "empty"
"#,
        )
        .unwrap();

        assert!(desc.main_lib_artifacts().is_empty());
        assert!(desc.test_lib_artifacts().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_name() {
        let err = StaticDescriptor::parse(
            r#"
[package]
repo_path = "github.com/x"
name = ""
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("invalid package identity"));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("core.toml");
        let err = StaticDescriptor::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read package descriptor"));
        assert_eq!(err.downcast_ref::<DescriptorLoadError>().unwrap().path, path);
    }
}
