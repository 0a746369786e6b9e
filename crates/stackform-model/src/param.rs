//! Named parameters with typed defaults.

use serde::{Deserialize, Serialize};

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Free-form string value.
    #[default]
    String,
    /// Numeric value, carried as its string form.
    Number,
}

/// A named parameter declared by a group.
///
/// Parameters are referenced by name from any declaration in the same
/// scope via [`Expr::Param`](crate::expr::Expr::Param).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within its scope.
    pub name: String,
    /// Value type.
    pub ty: ParamType,
    /// Default value used when no override is bound.
    pub default: String,
}

impl Parameter {
    /// Declares a string parameter with a default value.
    #[must_use]
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::String,
            default: default.into(),
        }
    }

    /// Declares a number parameter with a default value.
    #[must_use]
    pub fn number(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::Number,
            default: default.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parameter_defaults() {
        let param = Parameter::string("DynamoDBTableName", "tareas");
        assert_eq!(param.name, "DynamoDBTableName");
        assert_eq!(param.ty, ParamType::String);
        assert_eq!(param.default, "tareas");
    }

    #[test]
    fn number_parameter_keeps_string_form() {
        let param = Parameter::number("CacheTtl", "300");
        assert_eq!(param.ty, ParamType::Number);
        assert_eq!(param.default, "300");
    }
}
