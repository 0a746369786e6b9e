//! Unified error types for the Stackform workspace.
//!
//! Composition has no partial-success semantics: every variant here is
//! fatal and aborts the construction pass that raised it.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StackformError {
    /// A declaration references a resource that was never declared, or
    /// one declared later in the same scope.
    #[error("dangling reference: no resource named \"{name}\" has been declared")]
    DanglingReference {
        /// Name of the missing resource.
        name: String,
    },

    /// Two resources share the same name within one registry.
    #[error("duplicate resource name: \"{name}\"")]
    DuplicateResource {
        /// The colliding resource name.
        name: String,
    },

    /// The same parameter name was declared twice in one scope.
    #[error("duplicate parameter \"{name}\" in scope \"{scope}\"")]
    DuplicateParameter {
        /// The colliding parameter name.
        name: String,
        /// Scope in which the collision occurred.
        scope: String,
    },

    /// A value references a parameter that the enclosing scope does not declare.
    #[error("unbound parameter: \"{name}\" is not declared in this scope")]
    UnboundParameter {
        /// Name of the missing parameter.
        name: String,
    },

    /// Two or more resources reference each other.
    #[error("cyclic dependency detected {chain}")]
    CyclicDependency {
        /// Description of the resources involved in the cycle.
        chain: String,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, StackformError>;
