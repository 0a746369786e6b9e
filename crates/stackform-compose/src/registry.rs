//! Name-keyed resource registry with referential integrity.
//!
//! Declarations are accepted in order; every cross-reference must resolve
//! to a resource already present in this registry or in an enclosing
//! group's registry. Forward references are rejected at declaration time.

use std::collections::{HashMap, HashSet};

use stackform_common::error::{Result, StackformError};
use stackform_common::types::{Attr, RefToken, ResourceName};
use stackform_model::resource::Resource;

/// An insertion-ordered registry of resource declarations.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Resource>,
    index: HashMap<ResourceName, usize>,
    outer: HashSet<ResourceName>,
}

impl Registry {
    /// Creates an empty registry with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose references may also resolve to the given
    /// enclosing-group names.
    #[must_use]
    pub fn with_outer(outer: HashSet<ResourceName>) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            outer,
        }
    }

    /// Declares a resource, enforcing name uniqueness and referential
    /// integrity.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::DuplicateResource`] if a resource with the
    /// same name is already registered, or
    /// [`StackformError::DanglingReference`] if the declaration references
    /// a name not yet visible.
    pub fn declare(&mut self, resource: Resource) -> Result<()> {
        let name = resource.name().clone();
        if self.index.contains_key(&name) {
            return Err(StackformError::DuplicateResource {
                name: name.to_string(),
            });
        }
        for target in resource.references() {
            if !self.is_visible(target) {
                return Err(StackformError::DanglingReference {
                    name: target.to_string(),
                });
            }
        }
        tracing::debug!(resource = %name, kind = %resource.kind(), "declared");
        self.entries.push(resource);
        let _ = self.index.insert(name, self.entries.len() - 1);
        Ok(())
    }

    /// Returns true when `name` resolves in this registry or an enclosing one.
    #[must_use]
    pub fn is_visible(&self, name: &ResourceName) -> bool {
        self.index.contains_key(name) || self.outer.contains(name)
    }

    /// Returns the declaration registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &ResourceName) -> Option<&Resource> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Returns a stable reference token for `attr` of the resource named
    /// `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::DanglingReference`] if no such resource is
    /// visible.
    pub fn resolve(&self, name: &ResourceName, attr: Attr) -> Result<RefToken> {
        if !self.is_visible(name) {
            return Err(StackformError::DanglingReference {
                name: name.to_string(),
            });
        }
        Ok(RefToken::new(name.clone(), attr))
    }

    /// Iterates over declarations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter()
    }

    /// Iterates over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &ResourceName> {
        self.entries.iter().map(Resource::name)
    }

    /// Returns the number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the registry, returning the declarations in registration order.
    #[must_use]
    pub fn into_entries(self) -> Vec<Resource> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use stackform_model::api::{HttpMethod, RouteDecl};
    use stackform_model::expr::Expr;
    use stackform_model::function::{CodeLocation, FunctionDecl};
    use stackform_model::iam::RoleDecl;
    use stackform_model::storage::BucketDecl;
    use stackform_model::table::TableDecl;

    use super::*;

    fn function(name: &str) -> Resource {
        FunctionDecl::new(
            name,
            name,
            CodeLocation::in_bucket("code-bucket", format!("Lambdas/{name}.zip")),
            format!("lambdas/{name}.handler"),
            "fn-role",
        )
        .into()
    }

    fn leaves() -> Registry {
        let mut registry = Registry::new();
        registry
            .declare(BucketDecl::imported("code-bucket", "dhg-primer-reto-lambdas").into())
            .expect("bucket");
        registry
            .declare(RoleDecl::new("fn-role", "lambda.amazonaws.com").into())
            .expect("role");
        registry
    }

    #[test]
    fn declares_in_dependency_order() {
        let mut registry = leaves();
        registry.declare(function("get-tareas")).expect("function");
        assert_eq!(registry.len(), 3);
        let names: Vec<&str> = registry.names().map(ResourceName::as_str).collect();
        assert_eq!(names, vec!["code-bucket", "fn-role", "get-tareas"]);
    }

    #[test]
    fn forward_reference_is_rejected() {
        let mut registry = Registry::new();
        let err = registry.declare(function("get-tareas")).unwrap_err();
        assert!(matches!(err, StackformError::DanglingReference { .. }));
    }

    #[test]
    fn dangling_reference_names_the_missing_target() {
        let mut registry = leaves();
        registry.declare(function("get-tareas")).expect("function");
        let route = RouteDecl::new("get-one", "rest-api", HttpMethod::Get, "tarea", "get-tarea");
        let err = registry.declare(route.into()).unwrap_err();
        // The api reference fails first; declare an api and retry to hit
        // the integration reference.
        assert!(err.to_string().contains("rest-api"), "got: {err}");

        registry
            .declare(stackform_model::api::RestApiDecl::new("rest-api", "TareasAPI").into())
            .expect("api");
        let route = RouteDecl::new("get-one", "rest-api", HttpMethod::Get, "tarea", "get-tarea");
        let err = registry.declare(route.into()).unwrap_err();
        assert!(err.to_string().contains("get-tarea"), "got: {err}");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = Registry::new();
        registry
            .declare(TableDecl::new("tareas-table", "tareas", "idtarea").into())
            .expect("first");
        let err = registry
            .declare(TableDecl::new("tareas-table", "tareas-2", "idtarea").into())
            .unwrap_err();
        assert!(matches!(err, StackformError::DuplicateResource { .. }));
    }

    #[test]
    fn outer_names_are_visible() {
        let outer: HashSet<ResourceName> =
            [ResourceName::new("code-bucket"), ResourceName::new("fn-role")]
                .into_iter()
                .collect();
        let mut registry = Registry::with_outer(outer);
        registry.declare(function("get-tareas")).expect("function");
        assert!(registry.is_visible(&ResourceName::new("fn-role")));
        assert!(registry.get(&ResourceName::new("fn-role")).is_none());
    }

    #[test]
    fn resolve_returns_stable_tokens() {
        let mut registry = leaves();
        registry.declare(function("get-tareas")).expect("function");
        let name = ResourceName::new("get-tareas");
        let token = registry.resolve(&name, Attr::Arn).expect("token");
        assert_eq!(token.render(), "${get-tareas.arn}");
        let again = registry.resolve(&name, Attr::Arn).expect("token");
        assert_eq!(token, again);
    }

    #[test]
    fn resolve_unknown_name_dangles() {
        let registry = Registry::new();
        let err = registry
            .resolve(&ResourceName::new("ghost"), Attr::Arn)
            .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn expression_reference_to_undeclared_resource_dangles() {
        let mut registry = Registry::new();
        let table = TableDecl::new(
            "tareas-table",
            Expr::attr_of("missing-param-source", Attr::Name),
            "idtarea",
        );
        let err = registry.declare(table.into()).unwrap_err();
        assert!(err.to_string().contains("missing-param-source"));
    }
}
