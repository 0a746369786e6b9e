//! Domain primitive types used across the Stackform workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical name under which a resource is registered within a group.
///
/// Cross-references between declarations are expressed purely through
/// these names; live object identity is never used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Creates a resource name from a string value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResourceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Generated attribute of a materialized resource.
///
/// The provisioning engine substitutes the real value once the resource
/// exists; composition only ever handles the symbolic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attr {
    /// Provider-assigned resource identifier (ARN-shaped).
    Arn,
    /// Physical name assigned at materialization.
    Name,
    /// Generated DNS name (distributions, bucket endpoints).
    DomainName,
    /// Opaque generated identifier (certificates, access identities).
    Id,
}

impl Attr {
    /// Returns the attribute's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arn => "arn",
            Self::Name => "name",
            Self::DomainName => "domain_name",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stable reference token for an attribute of a declared resource.
///
/// Tokens are usable by dependent declarations before the target is
/// materialized. The rendered form `${target.attr}` is understood by the
/// external provisioning engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefToken {
    /// Name of the referenced resource.
    pub target: ResourceName,
    /// Attribute of the referenced resource.
    pub attr: Attr,
}

impl RefToken {
    /// Creates a token referencing `attr` of the resource named `target`.
    #[must_use]
    pub fn new(target: impl Into<ResourceName>, attr: Attr) -> Self {
        Self {
            target: target.into(),
            attr,
        }
    }

    /// Renders the token into its stable string form.
    #[must_use]
    pub fn render(&self) -> String {
        format!("${{{}.{}}}", self.target, self.attr)
    }
}

impl fmt::Display for RefToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
