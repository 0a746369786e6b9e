//! Parameter scopes with explicit parent-to-child threading.
//!
//! Each group owns one scope. Sibling scopes are fully independent; a
//! value crosses a group boundary only when the child explicitly inherits
//! the parameter by name, in which case the parent's resolved value is
//! bound unchanged over the child's default.

use std::collections::{BTreeMap, HashMap};

use stackform_common::error::{Result, StackformError};
use stackform_model::param::Parameter;

/// The parameters declared by a single group, with any bound values.
#[derive(Debug, Clone)]
pub struct ParameterScope {
    scope_name: String,
    params: Vec<Parameter>,
    index: HashMap<String, usize>,
    bindings: BTreeMap<String, String>,
}

impl ParameterScope {
    /// Creates an empty scope named after its owning group.
    #[must_use]
    pub fn new(scope_name: impl Into<String>) -> Self {
        Self {
            scope_name: scope_name.into(),
            params: Vec::new(),
            index: HashMap::new(),
            bindings: BTreeMap::new(),
        }
    }

    /// Returns the owning group's name.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        &self.scope_name
    }

    /// Declares a parameter in this scope.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::DuplicateParameter`] if the name is
    /// already declared here.
    pub fn declare(&mut self, param: Parameter) -> Result<()> {
        if self.index.contains_key(&param.name) {
            return Err(StackformError::DuplicateParameter {
                name: param.name,
                scope: self.scope_name.clone(),
            });
        }
        let _ = self.index.insert(param.name.clone(), self.params.len());
        self.params.push(param);
        Ok(())
    }

    /// Binds a value over the declared default.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::UnboundParameter`] if the name is not
    /// declared in this scope.
    pub fn bind(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !self.index.contains_key(name) {
            return Err(StackformError::UnboundParameter { name: name.into() });
        }
        let _ = self.bindings.insert(name.into(), value.into());
        Ok(())
    }

    /// Returns true when `name` is declared in this scope.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolves a parameter to its bound value, or its default.
    ///
    /// Lookup is idempotent: repeated calls return the same value.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError::UnboundParameter`] if the name is not
    /// declared in this scope.
    pub fn value_of(&self, name: &str) -> Result<&str> {
        if let Some(bound) = self.bindings.get(name) {
            return Ok(bound);
        }
        self.index
            .get(name)
            .map(|&i| self.params[i].default.as_str())
            .ok_or_else(|| StackformError::UnboundParameter { name: name.into() })
    }

    /// Returns every parameter with its resolved value, in declaration order.
    #[must_use]
    pub fn resolved(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|p| {
                let value = self
                    .bindings
                    .get(&p.name)
                    .cloned()
                    .unwrap_or_else(|| p.default.clone());
                (p.name.clone(), value)
            })
            .collect()
    }
}
