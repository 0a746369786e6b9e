//! The task table group.

use stackform_compose::group::Group;
use stackform_model::expr::Expr;
use stackform_model::param::Parameter;
use stackform_model::table::TableDecl;

/// Builds the `db` group: one pay-per-request table keyed by `idtarea`.
#[must_use]
pub fn db_group() -> Group {
    Group::new("db")
        .with_parameter(Parameter::string("DynamoDBTableName", "tareas"))
        .with_resource(TableDecl::new(
            "tareas-table",
            Expr::param("DynamoDBTableName"),
            "idtarea",
        ))
}

#[cfg(test)]
mod tests {
    use stackform_model::table::BillingMode;

    use super::*;

    #[test]
    fn db_group_composes_with_defaults() {
        let composed = db_group().compose().expect("compose");
        assert_eq!(composed.parameter("DynamoDBTableName"), Some("tareas"));
        assert_eq!(composed.resources.len(), 1);
    }

    #[test]
    fn table_is_pay_per_request() {
        let composed = db_group().compose().expect("compose");
        let stackform_model::resource::Resource::Table(table) = &composed.resources[0] else {
            panic!("expected a table declaration");
        };
        assert_eq!(table.billing, BillingMode::PayPerRequest);
        assert_eq!(table.partition_key, "idtarea");
    }
}
