//! Target definitions - what gets built.
//!
//! A Target is a library the orchestrator compiles for a package: the main
//! library or the test library. Each carries the ordered artifacts it links
//! against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix appended to a package name to form its test library name.
pub const TEST_LIB_SUFFIX: &str = "_test";

/// Preprocessor define set on every test library.
pub const TEST_DEFINE: &str = "TARGET_TEST";

/// The kind of target being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// The package's C++ library
    #[serde(alias = "lib")]
    MainLib,

    /// The library holding the package's unit tests
    #[serde(alias = "test")]
    TestLib,
}

impl TargetKind {
    /// Get the target name for a package of the given name.
    pub fn target_name(&self, package: &str) -> String {
        match self {
            TargetKind::MainLib => package.to_string(),
            TargetKind::TestLib => format!("{}{}", package, TEST_LIB_SUFFIX),
        }
    }

    /// Get the default source layout for this kind.
    pub fn default_layout(&self) -> TargetLayout {
        match self {
            TargetKind::MainLib => TargetLayout {
                sources: vec!["source/main/cpp/**/*.cpp".to_string()],
                include_dirs: vec!["source/main/include".to_string()],
                defines: Vec::new(),
            },
            TargetKind::TestLib => TargetLayout {
                sources: vec!["source/test/cpp/**/*.cpp".to_string()],
                include_dirs: vec![
                    "source/test/include".to_string(),
                    "source/main/include".to_string(),
                ],
                defines: vec![TEST_DEFINE.to_string()],
            },
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::MainLib => write!(f, "main library"),
            TargetKind::TestLib => write!(f, "test library"),
        }
    }
}

/// Where a target's sources and headers live, relative to the package root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLayout {
    /// Source file patterns (globs)
    #[serde(default)]
    pub sources: Vec<String>,

    /// Include directories
    #[serde(default)]
    pub include_dirs: Vec<String>,

    /// Preprocessor defines
    #[serde(default)]
    pub defines: Vec<String>,
}

/// A reference to a build target of some package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    /// Name of the package owning the target
    pub package: String,

    /// Target name within the package
    pub target: String,

    /// Kind of the referenced target
    pub kind: TargetKind,
}

impl Artifact {
    /// Create a new artifact reference.
    pub fn new(package: impl Into<String>, target: impl Into<String>, kind: TargetKind) -> Self {
        Artifact {
            package: package.into(),
            target: target.into(),
            kind,
        }
    }

    /// Reference the main library of a package.
    pub fn main_lib(package: impl Into<String>) -> Self {
        let package = package.into();
        let target = TargetKind::MainLib.target_name(&package);
        Self::new(package, target, TargetKind::MainLib)
    }

    /// Reference the test library of a package.
    pub fn test_lib(package: impl Into<String>) -> Self {
        let package = package.into();
        let target = TargetKind::TestLib.target_name(&package);
        Self::new(package, target, TargetKind::TestLib)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.target)
    }
}

/// A build target with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name
    pub name: String,

    /// Which library this is
    pub kind: TargetKind,

    /// Sources, include directories and defines
    #[serde(default)]
    pub layout: TargetLayout,

    /// Artifacts this target links against, in order
    #[serde(default)]
    pub dependencies: Vec<Artifact>,
}

impl Target {
    /// Create a target for a package with the default layout for its kind.
    pub fn new(package: &str, kind: TargetKind) -> Self {
        Target {
            name: kind.target_name(package),
            kind,
            layout: kind.default_layout(),
            dependencies: Vec::new(),
        }
    }

    /// Create the main library target of a package.
    pub fn main_lib(package: &str) -> Self {
        Self::new(package, TargetKind::MainLib)
    }

    /// Create the test library target of a package.
    pub fn test_lib(package: &str) -> Self {
        Self::new(package, TargetKind::TestLib)
    }

    /// Append artifacts to the dependency list, keeping their order.
    pub fn add_dependencies(&mut self, artifacts: impl IntoIterator<Item = Artifact>) {
        self.dependencies.extend(artifacts);
    }

    /// Builder-style variant of [`Target::add_dependencies`].
    pub fn with_dependencies(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.add_dependencies(artifacts);
        self
    }

    /// The artifact other packages use to depend on this target.
    pub fn artifact(&self, package: &str) -> Artifact {
        Artifact::new(package, self.name.clone(), self.kind)
    }
}
