//! Package providers - how a dependency descriptor is obtained.
//!
//! A provider is the entry point of another package. It takes no input and
//! returns that package's descriptor, or fails. Providers are invoked on
//! every request; nothing is cached here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::core::descriptor::{PackageDescriptor, StaticDescriptor};

/// A source of one package descriptor.
pub trait PackageProvider: Send + Sync {
    /// Produce the package descriptor.
    fn get_package(&self) -> Result<Arc<dyn PackageDescriptor>>;
}

impl<F> PackageProvider for F
where
    F: Fn() -> Result<Arc<dyn PackageDescriptor>> + Send + Sync,
{
    fn get_package(&self) -> Result<Arc<dyn PackageDescriptor>> {
        self()
    }
}

/// A provider reading a descriptor file each time it is asked.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    path: PathBuf,
}

impl ManifestProvider {
    /// Create a provider for the descriptor file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ManifestProvider { path: path.into() }
    }
}

impl PackageProvider for ManifestProvider {
    fn get_package(&self) -> Result<Arc<dyn PackageDescriptor>> {
        tracing::debug!("loading package descriptor from {}", self.path.display());
        let desc = StaticDescriptor::load(&self.path)?;
        Ok(Arc::new(desc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::package_id::PackageIdentity;
    use tempfile::TempDir;

    #[test]
    fn test_closure_provider() {
        let provider = || -> Result<Arc<dyn PackageDescriptor>> {
            Ok(Arc::new(StaticDescriptor::new(PackageIdentity::new(
                "github.com/x",
                "core",
            ))))
        };

        let desc = provider.get_package().unwrap();
        assert_eq!(desc.identity().name(), "core");
    }

    #[test]
    fn test_manifest_provider_rereads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("core.toml");
        std::fs::write(
            &path,
            "main_lib = [\"core\"]\n[package]\nrepo_path = \"github.com/x\"\nname = \"core\"\n",
        )
        .unwrap();

        let provider = ManifestProvider::new(&path);
        assert_eq!(provider.get_package().unwrap().main_lib_artifacts().len(), 1);

        std::fs::write(
            &path,
            "main_lib = [\"core\", \"core_extra\"]\n[package]\nrepo_path = \"github.com/x\"\nname = \"core\"\n",
        )
        .unwrap();
        assert_eq!(provider.get_package().unwrap().main_lib_artifacts().len(), 2);
    }

    #[test]
    fn test_manifest_provider_core_descriptor() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("core.toml");
        std::fs::write(&path, crate::test_support::CORE_DESCRIPTOR_TOML).unwrap();

        let desc = ManifestProvider::new(&path).get_package().unwrap();
        assert_eq!(desc.identity().to_string(), "github.com/jurgen-kluft/core");
        assert_eq!(desc.test_lib_artifacts()[0].to_string(), "core:core_test");
    }

    #[test]
    fn test_manifest_provider_missing_file() {
        let tmp = TempDir::new().unwrap();
        let provider = ManifestProvider::new(tmp.path().join("nope.toml"));
        assert!(provider.get_package().is_err());
    }
}
