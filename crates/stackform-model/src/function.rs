//! Compute function declarations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stackform_common::constants;
use stackform_common::types::ResourceName;

use crate::expr::Expr;

/// Location of a function's deployable code artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLocation {
    /// Bucket holding the artifact, referenced by logical name.
    pub bucket: ResourceName,
    /// Object key of the artifact within the bucket.
    pub key: String,
}

impl CodeLocation {
    /// Points at an artifact stored in the bucket named `bucket`.
    #[must_use]
    pub fn in_bucket(bucket: impl Into<ResourceName>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// A compute function backed by an uploaded code artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Physical function name.
    pub function_name: Expr,
    /// Runtime identifier.
    pub runtime: String,
    /// Code artifact location.
    pub code: CodeLocation,
    /// Handler path within the artifact.
    pub handler: String,
    /// Execution role, referenced by logical name.
    pub role: ResourceName,
    /// Environment variables injected at invocation.
    pub env: BTreeMap<String, Expr>,
}

impl FunctionDecl {
    /// Declares a function on the default runtime.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        function_name: impl Into<Expr>,
        code: CodeLocation,
        handler: impl Into<String>,
        role: impl Into<ResourceName>,
    ) -> Self {
        Self {
            name: name.into(),
            function_name: function_name.into(),
            runtime: constants::DEFAULT_FUNCTION_RUNTIME.into(),
            code,
            handler: handler.into(),
            role: role.into(),
            env: BTreeMap::new(),
        }
    }

    /// Overrides the runtime identifier.
    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Adds an environment variable.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        let _ = self.env.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_defaults_to_workspace_runtime() {
        let function = FunctionDecl::new(
            "get-tareas",
            Expr::param("LambdaGetAllName"),
            CodeLocation::in_bucket("code-bucket", "Lambdas/get-tareas.zip"),
            "lambdas/get-tareas.handler",
            "fn-role",
        );
        assert_eq!(function.runtime, constants::DEFAULT_FUNCTION_RUNTIME);
        assert_eq!(function.role.as_str(), "fn-role");
    }

    #[test]
    fn env_entries_are_keyed_uniquely() {
        let function = FunctionDecl::new(
            "post-tarea",
            "post-tarea",
            CodeLocation::in_bucket("code-bucket", "Lambdas/post-tarea.zip"),
            "lambdas/post-tarea.handler",
            "fn-role",
        )
        .env("TABLE_NAME", Expr::param("DynamoDBTableName"))
        .env("TABLE_NAME", Expr::lit("tareas"));
        assert_eq!(function.env.len(), 1);
        assert_eq!(function.env["TABLE_NAME"], Expr::lit("tareas"));
    }
}
