//! Value expressions for declaration fields.
//!
//! Any field whose value may come from a parameter or from another
//! resource's generated attribute is an [`Expr`]. References are symbolic
//! names resolved by the composer's registry; declarations never hold live
//! handles to other declarations.

use serde::{Deserialize, Serialize};
use stackform_common::types::{Attr, RefToken, ResourceName};

/// A declaration field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// A literal string value.
    Lit(String),
    /// The value of a named parameter in the enclosing scope.
    Param(String),
    /// A generated attribute of a previously declared resource.
    Ref(RefToken),
}

impl Expr {
    /// Creates a literal expression.
    #[must_use]
    pub fn lit(value: impl Into<String>) -> Self {
        Self::Lit(value.into())
    }

    /// Creates a parameter lookup expression.
    #[must_use]
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    /// Creates a cross-reference to `attr` of the resource named `target`.
    #[must_use]
    pub fn attr_of(target: impl Into<ResourceName>, attr: Attr) -> Self {
        Self::Ref(RefToken::new(target, attr))
    }

    /// Returns the referenced resource name, if this is a cross-reference.
    #[must_use]
    pub fn ref_target(&self) -> Option<&ResourceName> {
        match self {
            Self::Ref(token) => Some(&token.target),
            Self::Lit(_) | Self::Param(_) => None,
        }
    }

    /// Returns the referenced parameter name, if this is a parameter lookup.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param(name) => Some(name),
            Self::Lit(_) | Self::Ref(_) => None,
        }
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::lit(value)
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Lit(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_has_no_targets() {
        let expr = Expr::lit("tareas");
        assert_eq!(expr.ref_target(), None);
        assert_eq!(expr.param_name(), None);
    }

    #[test]
    fn param_exposes_its_name() {
        let expr = Expr::param("DynamoDBTableName");
        assert_eq!(expr.param_name(), Some("DynamoDBTableName"));
        assert_eq!(expr.ref_target(), None);
    }

    #[test]
    fn reference_exposes_its_target() {
        let expr = Expr::attr_of("get-tareas", Attr::Arn);
        assert_eq!(
            expr.ref_target().map(ResourceName::as_str),
            Some("get-tareas")
        );
    }

    #[test]
    fn expr_serialization_roundtrip() {
        let expr = Expr::attr_of("site-cdn", Attr::DomainName);
        let json = serde_json::to_string(&expr).expect("serialize");
        let back: Expr = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, expr);
    }
}
