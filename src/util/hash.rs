//! Hashing utilities for descriptor fingerprints.

use sha2::{Digest, Sha256};

use crate::core::package_id::PackageIdentity;
use crate::core::target::{Artifact, Target, TargetLayout};

/// A hasher for building fingerprints from multiple components.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    /// Create a new fingerprint builder.
    pub fn new() -> Self {
        Fingerprint {
            hasher: Sha256::new(),
        }
    }

    /// Add a string component to the fingerprint.
    pub fn update_str(&mut self, s: &str) -> &mut Self {
        self.hasher.update(s.as_bytes());
        self.hasher.update(b"\0"); // Separator
        self
    }

    /// Add a list of strings, prefixed by its length.
    pub fn update_strs<'a>(&mut self, items: impl ExactSizeIterator<Item = &'a str>) -> &mut Self {
        self.hasher.update((items.len() as u64).to_le_bytes());
        for s in items {
            self.update_str(s);
        }
        self
    }

    /// Add a list of package identities, prefixed by its length.
    pub fn update_identities<'a>(
        &mut self,
        ids: impl ExactSizeIterator<Item = &'a PackageIdentity>,
    ) -> &mut Self {
        self.hasher.update((ids.len() as u64).to_le_bytes());
        for id in ids {
            self.update_str(id.repo_path()).update_str(id.name());
        }
        self
    }

    /// Add an artifact reference.
    pub fn update_artifact(&mut self, artifact: &Artifact) -> &mut Self {
        self.update_str(&artifact.package)
            .update_str(&artifact.target)
            .update_str(&artifact.kind.to_string())
    }

    /// Add a target with its layout and dependencies.
    pub fn update_target(&mut self, target: &Target) -> &mut Self {
        self.update_str(&target.name)
            .update_str(&target.kind.to_string())
            .update_layout(&target.layout);

        self.hasher
            .update((target.dependencies.len() as u64).to_le_bytes());
        for artifact in &target.dependencies {
            self.update_artifact(artifact);
        }
        self
    }

    fn update_layout(&mut self, layout: &TargetLayout) -> &mut Self {
        self.update_strs(layout.sources.iter().map(String::as_str))
            .update_strs(layout.include_dirs.iter().map(String::as_str))
            .update_strs(layout.defines.iter().map(String::as_str))
    }

    /// Finalize and return the fingerprint as a hex string.
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}
