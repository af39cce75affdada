//! Built-in descriptor of the `core` package, the dependency of `task`.

use std::sync::Arc;

use anyhow::Result;

use crate::core::package_id::DEFAULT_REPO_PATH;
use crate::core::{Package, PackageDescriptor, PackageIdentity, Target};

/// Name of the `core` package.
pub const CORE_NAME: &str = "core";

/// Identity of the `core` package.
pub fn identity() -> PackageIdentity {
    PackageIdentity::new(DEFAULT_REPO_PATH, CORE_NAME)
}

/// Provide the `core` package descriptor.
///
/// `core` has no dependencies of its own; its libraries export
/// `core:core` and `core:core_test`.
pub fn get_package() -> Result<Arc<dyn PackageDescriptor>> {
    let pkg = Package::new(
        identity(),
        Target::main_lib(CORE_NAME),
        Target::test_lib(CORE_NAME),
    );
    Ok(Arc::new(pkg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Artifact;

    #[test]
    fn test_core_descriptor() {
        let core = get_package().unwrap();
        assert_eq!(core.identity().to_string(), "github.com/jurgen-kluft/core");
        assert_eq!(core.main_lib_artifacts(), vec![Artifact::main_lib("core")]);
        assert_eq!(core.test_lib_artifacts(), vec![Artifact::test_lib("core")]);
        assert!(core.dependencies().is_empty());
    }
}
