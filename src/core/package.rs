//! Package - the assembled package record.
//!
//! A Package combines the identity, the dependency packages, and exactly one
//! main library and one test library target.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::descriptor::PackageDescriptor;
use crate::core::package_id::PackageIdentity;
use crate::core::target::{Artifact, Target};
use crate::util::hash::Fingerprint;

/// A complete package record.
#[derive(Debug, Clone)]
pub struct Package {
    /// The package identity
    identity: PackageIdentity,

    /// Packages this one depends on, in registration order
    dependencies: Vec<Arc<dyn PackageDescriptor>>,

    /// The main library
    main_lib: Target,

    /// The test library
    test_lib: Target,
}

impl Package {
    /// Create a package record from its identity and both targets.
    pub fn new(identity: PackageIdentity, main_lib: Target, test_lib: Target) -> Self {
        Package {
            identity,
            dependencies: Vec::new(),
            main_lib,
            test_lib,
        }
    }

    /// Register a dependency package.
    pub fn add_package(&mut self, dep: Arc<dyn PackageDescriptor>) {
        self.dependencies.push(dep);
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Get the dependency packages.
    pub fn packages(&self) -> &[Arc<dyn PackageDescriptor>] {
        &self.dependencies
    }

    /// Get the main library target.
    pub fn main_lib(&self) -> &Target {
        &self.main_lib
    }

    /// Get the main library target mutably.
    pub fn main_lib_mut(&mut self) -> &mut Target {
        &mut self.main_lib
    }

    /// Get the test library target.
    pub fn test_lib(&self) -> &Target {
        &self.test_lib
    }

    /// Get the test library target mutably.
    pub fn test_lib_mut(&mut self) -> &mut Target {
        &mut self.test_lib
    }

    /// Both targets, main library first.
    pub fn targets(&self) -> [&Target; 2] {
        [&self.main_lib, &self.test_lib]
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets().into_iter().find(|t| t.name == name)
    }

    /// Compute a digest of the full record contents.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();
        fp.update_str(self.identity.repo_path())
            .update_str(self.identity.name());

        fp.update_identities(self.dependencies.iter().map(|d| d.identity()));

        for target in self.targets() {
            fp.update_target(target);
        }

        fp.finish()
    }
}

impl PackageDescriptor for Package {
    fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    fn main_lib_artifacts(&self) -> Vec<Artifact> {
        vec![self.main_lib.artifact(self.identity.name())]
    }

    fn test_lib_artifacts(&self) -> Vec<Artifact> {
        vec![self.test_lib.artifact(self.identity.name())]
    }

    fn dependencies(&self) -> Vec<Arc<dyn PackageDescriptor>> {
        self.dependencies.clone()
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
            && self.main_lib == other.main_lib
            && self.test_lib == other.test_lib
            && self.dependencies.len() == other.dependencies.len()
            && self
                .dependencies
                .iter()
                .zip(&other.dependencies)
                .all(|(a, b)| a.identity() == b.identity())
    }
}

impl Eq for Package {}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identity)
    }
}

impl Serialize for Package {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Dependencies are emitted by identity only
        let dependencies: Vec<&PackageIdentity> =
            self.dependencies.iter().map(|d| d.identity()).collect();

        let mut state = serializer.serialize_struct("Package", 4)?;
        state.serialize_field("package", &self.identity)?;
        state.serialize_field("dependencies", &dependencies)?;
        state.serialize_field("main_lib", &self.main_lib)?;
        state.serialize_field("test_lib", &self.test_lib)?;
        state.end()
    }
}
