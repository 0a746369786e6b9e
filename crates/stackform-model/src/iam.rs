//! Execution roles and permission grants.

use serde::{Deserialize, Serialize};
use stackform_common::types::ResourceName;

/// An execution role assumable by a provider service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Service principal allowed to assume the role.
    pub trusted_service: String,
    /// Actions the role is allowed to perform.
    pub actions: Vec<String>,
    /// Resource patterns the actions apply to.
    pub resources: Vec<String>,
}

impl RoleDecl {
    /// Declares a role trusted by `service` with an empty policy.
    #[must_use]
    pub fn new(name: impl Into<ResourceName>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trusted_service: service.into(),
            actions: Vec::new(),
            resources: vec!["*".into()],
        }
    }

    /// Appends actions to the role policy.
    #[must_use]
    pub fn allow(mut self, actions: &[&str]) -> Self {
        self.actions.extend(actions.iter().map(ToString::to_string));
        self
    }
}

/// A permission grant from a principal to a declared resource.
///
/// Covers both invoke grants on functions and read grants on buckets; the
/// target is a symbolic reference resolved by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Granted action (e.g. an invoke or object-read action).
    pub action: String,
    /// Principal receiving the grant.
    pub principal: String,
    /// Resource the grant applies to.
    pub target: ResourceName,
}

impl PermissionDecl {
    /// Declares a grant of `action` to `principal` on the resource named `target`.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        action: impl Into<String>,
        principal: impl Into<String>,
        target: impl Into<ResourceName>,
    ) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            principal: principal.into(),
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use stackform_common::constants;

    use super::*;

    #[test]
    fn role_accumulates_actions() {
        let role = RoleDecl::new("fn-role", constants::FUNCTION_SERVICE_PRINCIPAL)
            .allow(constants::TABLE_ACTIONS)
            .allow(constants::LOG_ACTIONS);
        assert_eq!(
            role.actions.len(),
            constants::TABLE_ACTIONS.len() + constants::LOG_ACTIONS.len()
        );
        assert_eq!(role.resources, vec!["*"]);
    }

    #[test]
    fn grant_targets_by_name() {
        let grant = PermissionDecl::new(
            "invoke-get-tareas",
            constants::INVOKE_FUNCTION_ACTION,
            constants::GATEWAY_SERVICE_PRINCIPAL,
            "get-tareas",
        );
        assert_eq!(grant.target.as_str(), "get-tareas");
    }
}
