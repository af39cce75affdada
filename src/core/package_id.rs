//! Package identification - WHERE a package lives and WHAT it is called.
//!
//! A PackageIdentity is the immutable (repository path, package name) pair
//! that names a package for the build orchestrator.

use std::fmt;

use serde::Serialize;

use crate::util::diagnostic::InvalidIdentityError;

/// Repository path of the packages published by this crate.
pub const DEFAULT_REPO_PATH: &str = "github.com/jurgen-kluft";

/// Name of the package described by this crate.
pub const DEFAULT_REPO_NAME: &str = "task";

/// A (repository path, package name) pair.
///
/// Repository paths are stored with forward slashes, so identities written
/// with Windows separators compare equal to their normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackageIdentity {
    repo_path: String,
    name: String,
}

impl PackageIdentity {
    /// Create an identity without validating the name.
    pub fn new(repo_path: impl AsRef<str>, name: impl Into<String>) -> Self {
        PackageIdentity {
            repo_path: normalize_repo_path(repo_path.as_ref()),
            name: name.into(),
        }
    }

    /// Create an identity, rejecting empty paths and malformed names.
    pub fn parse(
        repo_path: impl AsRef<str>,
        name: impl Into<String>,
    ) -> Result<Self, InvalidIdentityError> {
        let identity = Self::new(repo_path, name);

        if identity.repo_path.is_empty() {
            return Err(InvalidIdentityError::new(
                identity.to_string(),
                "repository path is empty",
            ));
        }

        if identity.name.is_empty() {
            return Err(InvalidIdentityError::new(
                identity.to_string(),
                "package name is empty",
            ));
        }

        if let Some(c) = identity
            .name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(InvalidIdentityError::new(
                identity.to_string(),
                format!("package name contains invalid character `{}`", c),
            ));
        }

        Ok(identity)
    }

    /// Get the repository path.
    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for PackageIdentity {
    fn default() -> Self {
        PackageIdentity::new(DEFAULT_REPO_PATH, DEFAULT_REPO_NAME)
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.repo_path, self.name)
    }
}

fn normalize_repo_path(path: &str) -> String {
    path.replace('\\', "/").trim_end_matches('/').to_string()
}
