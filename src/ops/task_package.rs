//! The `task` package descriptor.
//!
//! `task` depends on `core`. Its main library links against the main
//! library artifacts `core` exports, its test library against the test
//! library artifacts.

use anyhow::Result;

use crate::core::{ManifestProvider, Package, PackageIdentity, PackageProvider, Target};
use crate::ops::core_package;
use crate::util::config::Config;
use crate::util::diagnostic::InvalidIdentityError;

/// Assembles package records for one identity.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    identity: PackageIdentity,
}

impl DescriptorBuilder {
    /// Create a builder for the given identity.
    pub fn new(identity: PackageIdentity) -> Self {
        DescriptorBuilder { identity }
    }

    /// Create a builder from the configured identity.
    pub fn from_config(config: &Config) -> Result<Self, InvalidIdentityError> {
        Ok(Self::new(config.identity()?))
    }

    /// Get the identity of the records this builder assembles.
    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    /// Assemble a package record depending on the package `provider` returns.
    ///
    /// The provider is called exactly once. Its error, if any, is returned
    /// as is and no record is produced.
    pub fn build(&self, provider: &dyn PackageProvider) -> Result<Package> {
        let name = self.identity.name();

        // dependencies
        let corepkg = provider.get_package()?;
        tracing::debug!("{}: dependency {}", name, corepkg.identity());

        // main library
        let mut mainlib = Target::main_lib(name);
        mainlib.add_dependencies(corepkg.main_lib_artifacts());
        tracing::debug!(
            "{}: main library `{}` with {} dependencies",
            name,
            mainlib.name,
            mainlib.dependencies.len()
        );

        // test library
        let mut testlib = Target::test_lib(name);
        testlib.add_dependencies(corepkg.test_lib_artifacts());
        tracing::debug!(
            "{}: test library `{}` with {} dependencies",
            name,
            testlib.name,
            testlib.dependencies.len()
        );

        let mut mainpkg = Package::new(self.identity.clone(), mainlib, testlib);
        mainpkg.add_package(corepkg);

        tracing::info!("Described package {}", mainpkg);
        Ok(mainpkg)
    }
}

/// Build the `task` package record with the default identity and the
/// built-in `core` provider.
pub fn get_package() -> Result<Package> {
    DescriptorBuilder::default().build(&core_package::get_package)
}

/// Select the provider for the dependency: a descriptor file when one is
/// configured, the built-in `core` descriptor otherwise.
pub fn dependency_provider(config: &Config) -> Box<dyn PackageProvider> {
    match &config.dependency.manifest {
        Some(path) => Box::new(ManifestProvider::new(path)),
        None => Box::new(core_package::get_package),
    }
}
