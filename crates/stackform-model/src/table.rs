//! Key-value table declarations.

use serde::{Deserialize, Serialize};
use stackform_common::types::ResourceName;

use crate::expr::Expr;

/// Billing mode of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMode {
    /// On-demand capacity, billed per request.
    #[default]
    PayPerRequest,
    /// Pre-provisioned read/write capacity.
    Provisioned,
}

/// Attribute type of a key column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// String-typed key attribute.
    #[default]
    String,
    /// Number-typed key attribute.
    Number,
}

/// A managed key-value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Physical table name.
    pub table_name: Expr,
    /// Partition (hash) key attribute name.
    pub partition_key: String,
    /// Type of the partition key attribute.
    pub key_type: AttributeType,
    /// Billing mode.
    pub billing: BillingMode,
}

impl TableDecl {
    /// Declares a pay-per-request table with a string partition key.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        table_name: impl Into<Expr>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            partition_key: partition_key.into(),
            key_type: AttributeType::String,
            billing: BillingMode::PayPerRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_defaults_to_pay_per_request() {
        let table = TableDecl::new("tareas-table", Expr::param("DynamoDBTableName"), "idtarea");
        assert_eq!(table.billing, BillingMode::PayPerRequest);
        assert_eq!(table.key_type, AttributeType::String);
        assert_eq!(table.partition_key, "idtarea");
    }
}
