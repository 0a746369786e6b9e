//! Dependency graph management using `petgraph`.
//!
//! Builds a directed acyclic graph from resource cross-references and
//! resolves topological ordering for the provisioning engine.

use std::collections::HashMap;

use stackform_common::error::{Result, StackformError};
use stackform_common::types::ResourceName;

use crate::registry::Registry;

/// A dependency graph of resource declarations.
#[derive(Debug)]
pub struct DependencyGraph {
    /// Internal petgraph representation.
    graph: petgraph::Graph<ResourceName, ()>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: petgraph::Graph::new(),
        }
    }

    /// Builds the graph for every declaration in a registry.
    ///
    /// References into enclosing registries carry no edge; ordering across
    /// group boundaries is the group tree's concern.
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let mut graph = Self::new();
        let mut nodes = HashMap::new();
        for resource in registry.iter() {
            let idx = graph.add_resource(resource.name().clone());
            let _ = nodes.insert(resource.name().clone(), idx);
        }
        for resource in registry.iter() {
            let Some(&dependent) = nodes.get(resource.name()) else {
                continue;
            };
            for target in resource.references() {
                if let Some(&dependency) = nodes.get(target) {
                    graph.add_dependency(dependent, dependency);
                }
            }
        }
        graph
    }

    /// Adds a resource node to the graph.
    pub fn add_resource(&mut self, name: impl Into<ResourceName>) -> petgraph::graph::NodeIndex {
        self.graph.add_node(name.into())
    }

    /// Adds a dependency edge: `dependent` depends on `dependency`.
    ///
    /// The graph edge points from `dependency` to `dependent` so that
    /// topological sort yields dependencies first.
    pub fn add_dependency(
        &mut self,
        dependent: petgraph::graph::NodeIndex,
        dependency: petgraph::graph::NodeIndex,
    ) {
        let _ = self.graph.add_edge(dependency, dependent, ());
    }

    /// Returns a topological ordering of resources for provisioning.
    ///
    /// Dependencies appear before the resources that depend on them.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::CyclicDependency`] if the graph contains
    /// cycles.
    pub fn resolve_order(&self) -> Result<Vec<ResourceName>> {
        match petgraph::algo::toposort(&self.graph, None) {
            Ok(indices) => {
                let names: Vec<ResourceName> = indices
                    .iter()
                    .filter_map(|&idx| self.graph.node_weight(idx).cloned())
                    .collect();
                Ok(names)
            }
            Err(cycle) => {
                let chain = self
                    .graph
                    .node_weight(cycle.node_id())
                    .map_or_else(String::new, |name| format!("involving \"{name}\""));
                Err(StackformError::CyclicDependency { chain })
            }
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
