//! Deployable group tree construction and composition.
//!
//! A [`Group`] collects parameters, resource declarations, and child
//! groups. [`Group::compose`] runs the single validation pass: scopes are
//! checked for duplicate parameters, every cross-reference is resolved
//! against the group's registry chain, the dependency graph is ordered,
//! and parameter values are threaded into children that explicitly
//! inherit them.

use std::collections::HashSet;

use stackform_common::config::ParameterOverrides;
use stackform_common::error::{Result, StackformError};
use stackform_common::types::ResourceName;
use stackform_model::param::Parameter;
use stackform_model::resource::Resource;

use crate::graph::DependencyGraph;
use crate::registry::Registry;
use crate::scope::ParameterScope;

/// An uncomposed deployable group: declarations plus child groups.
#[derive(Debug, Clone, Default)]
pub struct Group {
    name: String,
    parameters: Vec<Parameter>,
    resources: Vec<Resource>,
    inherited: Vec<String>,
    children: Vec<Group>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares a parameter in this group's scope.
    #[must_use]
    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Appends a resource declaration.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<Resource>) -> Self {
        self.resources.push(resource.into());
        self
    }

    /// Appends a pre-built list of declarations, preserving its order.
    #[must_use]
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.extend(resources);
        self
    }

    /// Marks a parameter as explicitly passed down from the parent group.
    ///
    /// At composition time the parent's resolved value is bound over this
    /// group's default, unchanged and under the same name.
    #[must_use]
    pub fn inherit_parameter(mut self, name: impl Into<String>) -> Self {
        self.inherited.push(name.into());
        self
    }

    /// Nests a child group.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns every declaration in the tree, depth-first in declaration
    /// order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Resource> {
        let mut all: Vec<&Resource> = self.resources.iter().collect();
        for child in &self.children {
            all.extend(child.flatten());
        }
        all
    }

    /// Composes the tree with declaration defaults only.
    ///
    /// # Errors
    ///
    /// See [`Group::compose_with`].
    pub fn compose(&self) -> Result<ComposedGroup> {
        self.compose_with(&ParameterOverrides::new())
    }

    /// Composes the tree, binding `overrides` in every scope that declares
    /// the overridden name.
    ///
    /// # Errors
    ///
    /// Returns the first composition failure: a duplicate parameter or
    /// resource, a dangling or cyclic reference, an unbound parameter, or
    /// an inheritance from a group with no parent.
    pub fn compose_with(&self, overrides: &ParameterOverrides) -> Result<ComposedGroup> {
        tracing::info!(group = %self.name, "composing group tree");
        self.compose_node(overrides, None, &HashSet::new())
    }

    fn compose_node(
        &self,
        overrides: &ParameterOverrides,
        parent: Option<&ParameterScope>,
        outer: &HashSet<ResourceName>,
    ) -> Result<ComposedGroup> {
        let mut scope = ParameterScope::new(&self.name);
        for param in &self.parameters {
            scope.declare(param.clone())?;
        }
        for (name, value) in overrides.iter() {
            if scope.contains(name) {
                scope.bind(name, value)?;
            }
        }
        for name in &self.inherited {
            let parent_scope = parent.ok_or_else(|| StackformError::Config {
                message: format!(
                    "group \"{}\" inherits parameter \"{name}\" but has no parent",
                    self.name
                ),
            })?;
            let value = parent_scope.value_of(name)?.to_owned();
            scope.bind(name, value)?;
        }

        let mut registry = Registry::with_outer(outer.clone());
        for resource in &self.resources {
            for expr in resource.exprs() {
                if let Some(param) = expr.param_name() {
                    if !scope.contains(param) {
                        return Err(StackformError::UnboundParameter { name: param.into() });
                    }
                }
            }
            registry.declare(resource.clone())?;
        }

        let deploy_order = DependencyGraph::from_registry(&registry).resolve_order()?;

        let mut child_outer = outer.clone();
        child_outer.extend(registry.names().cloned());
        let children = self
            .children
            .iter()
            .map(|child| child.compose_node(overrides, Some(&scope), &child_outer))
            .collect::<Result<Vec<ComposedGroup>>>()?;

        tracing::debug!(
            group = %self.name,
            resources = registry.len(),
            children = children.len(),
            "group composed"
        );

        Ok(ComposedGroup {
            name: self.name.clone(),
            parameters: scope.resolved(),
            resources: registry.into_entries(),
            deploy_order,
            children,
        })
    }
}

/// A fully resolved group: the terminal state of composition.
#[derive(Debug, Clone)]
pub struct ComposedGroup {
    /// Group name.
    pub name: String,
    /// Resolved parameter values in declaration order.
    pub parameters: Vec<(String, String)>,
    /// Declarations in declaration order.
    pub resources: Vec<Resource>,
    /// Topological provisioning order for this group's resources.
    pub deploy_order: Vec<ResourceName>,
    /// Composed child groups.
    pub children: Vec<ComposedGroup>,
}

impl ComposedGroup {
    /// Returns every declaration in the tree, depth-first in declaration
    /// order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Resource> {
        let mut all: Vec<&Resource> = self.resources.iter().collect();
        for child in &self.children {
            all.extend(child.flatten());
        }
        all
    }

    /// Returns the resolved value of a parameter declared by this group.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
