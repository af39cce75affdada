//! User-friendly diagnostic messages.
//!
//! Every error shown by the CLI carries its root cause and, where one
//! exists, a suggested fix.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a descriptor file cannot be loaded.
    pub const DESCRIPTOR_LOAD_FAILED: &str =
        "check the path given to --dependency-manifest or [dependency].manifest";

    /// Suggestion when the configured identity is rejected.
    pub const INVALID_IDENTITY: &str =
        "package names may only contain letters, digits, `_` and `-`";

    /// Suggestion when a configuration file is malformed.
    pub const CONFIG_INVALID: &str = "run with --verbose to see which config files were loaded";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Build an error diagnostic from an error chain.
    ///
    /// The outermost error becomes the message, every cause a context line.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let mut diag = Diagnostic::error(err.to_string());
        for cause in err.chain().skip(1) {
            diag = diag.with_context(cause.to_string());
        }
        diag
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let error_prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };

        output.push_str(&format!("{}: {}\n", error_prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  caused by: {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            for suggestion in &self.suggestions {
                output.push_str(&format!("{}: {}\n", help_prefix, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// A package identity that failed validation.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("invalid package identity `{identity}`: {reason}")]
#[diagnostic(
    code(task_pkg::config::invalid_identity),
    help("package names may only contain letters, digits, `_` and `-`")
)]
pub struct InvalidIdentityError {
    pub identity: String,
    pub reason: String,
}

impl InvalidIdentityError {
    pub fn new(identity: impl Into<String>, reason: impl Into<String>) -> Self {
        InvalidIdentityError {
            identity: identity.into(),
            reason: reason.into(),
        }
    }
}

/// Package identities that depend on each other.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("dependency cycle detected at `{package}`")]
#[diagnostic(
    code(task_pkg::graph::cycle),
    help("two descriptors share an identity, or a package depends on itself")
)]
pub struct DependencyCycleError {
    pub package: String,
}

/// A package descriptor file that could not be read or parsed.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to {action} package descriptor: {}", .path.display())]
#[diagnostic(
    code(task_pkg::descriptor::load),
    help("check the path given to --dependency-manifest or [dependency].manifest")
)]
pub struct DescriptorLoadError {
    pub action: &'static str,
    pub path: PathBuf,
}

impl DescriptorLoadError {
    pub fn read(path: impl Into<PathBuf>) -> Self {
        DescriptorLoadError {
            action: "read",
            path: path.into(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>) -> Self {
        DescriptorLoadError {
            action: "parse",
            path: path.into(),
        }
    }
}

/// A configuration file that could not be read or parsed.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to {action} config: {}", .path.display())]
#[diagnostic(code(task_pkg::config::load))]
pub struct ConfigLoadError {
    pub action: &'static str,
    pub path: PathBuf,
}

impl ConfigLoadError {
    pub fn read(path: impl Into<PathBuf>) -> Self {
        ConfigLoadError {
            action: "read",
            path: path.into(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>) -> Self {
        ConfigLoadError {
            action: "parse",
            path: path.into(),
        }
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
