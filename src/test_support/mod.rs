//! Test utilities and fakes for unit tests.
//!
//! `FakeProvider` stands in for a dependency's entry point: it returns a
//! configurable descriptor, counts how often it is called, and can be told
//! to fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use task_pkg::test_support::FakeProvider;
//!
//! let provider = FakeProvider::new("github.com/x", "core").with_main_lib(["core_main"]);
//! let pkg = DescriptorBuilder::default().build(&provider)?;
//! assert_eq!(provider.calls(), 1);
//! ```

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use thiserror::Error;

use crate::core::{
    Artifact, PackageDescriptor, PackageIdentity, PackageProvider, StaticDescriptor, TargetKind,
};

pub use fixtures::*;

/// The error a failing [`FakeProvider`] returns.
#[derive(Debug, Error)]
#[error("fake provider failed: {0}")]
pub struct FakeProviderError(pub String);

/// A provider returning a descriptor held in memory.
#[derive(Debug)]
pub struct FakeProvider {
    identity: PackageIdentity,
    main_lib: Mutex<Vec<Artifact>>,
    test_lib: Mutex<Vec<Artifact>>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a provider for a package with no exported artifacts.
    pub fn new(repo_path: &str, name: &str) -> Self {
        FakeProvider {
            identity: PackageIdentity::new(repo_path, name),
            main_lib: Mutex::new(Vec::new()),
            test_lib: Mutex::new(Vec::new()),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Export main library artifacts with the given target names.
    pub fn with_main_lib<'a>(self, targets: impl IntoIterator<Item = &'a str>) -> Self {
        self.set_main_lib(targets);
        self
    }

    /// Export test library artifacts with the given target names.
    pub fn with_test_lib<'a>(self, targets: impl IntoIterator<Item = &'a str>) -> Self {
        *self.test_lib.lock().unwrap() = self.artifacts(targets, TargetKind::TestLib);
        self
    }

    /// Make every call fail with [`FakeProviderError`].
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Replace the exported main library artifacts.
    pub fn set_main_lib<'a>(&self, targets: impl IntoIterator<Item = &'a str>) {
        *self.main_lib.lock().unwrap() = self.artifacts(targets, TargetKind::MainLib);
    }

    /// Number of times the provider was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn artifacts<'a>(
        &self,
        targets: impl IntoIterator<Item = &'a str>,
        kind: TargetKind,
    ) -> Vec<Artifact> {
        targets
            .into_iter()
            .map(|t| Artifact::new(self.identity.name(), t, kind))
            .collect()
    }
}

impl PackageProvider for FakeProvider {
    fn get_package(&self) -> Result<Arc<dyn PackageDescriptor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(FakeProviderError(message.clone()).into());
        }

        let desc = StaticDescriptor::new(self.identity.clone())
            .with_main_lib(self.main_lib.lock().unwrap().clone())
            .with_test_lib(self.test_lib.lock().unwrap().clone());
        Ok(Arc::new(desc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_provider_counts_calls() {
        let provider = FakeProvider::new("github.com/x", "core").with_main_lib(["a"]);
        provider.get_package().unwrap();
        provider.get_package().unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_fake_provider_failure() {
        let provider = FakeProvider::new("github.com/x", "core").failing("boom");
        let err = provider.get_package().unwrap_err();
        assert_eq!(err.to_string(), "fake provider failed: boom");
        assert_eq!(provider.calls(), 1);
    }
}
