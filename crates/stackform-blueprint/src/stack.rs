//! The root stack nesting the db, backend, and frontend groups.

use stackform_compose::group::Group;
use stackform_model::param::Parameter;

use crate::backend::backend_group;
use crate::db::db_group;
use crate::frontend::frontend_group;

/// Builds the root stack.
///
/// The table name is declared once at the root and threaded explicitly
/// into the db and backend groups; the frontend has no shared parameters
/// and composes from its own defaults.
#[must_use]
pub fn root_stack() -> Group {
    Group::new("tareas")
        .with_parameter(Parameter::string("DynamoDBTableName", "tareas"))
        .with_child(db_group().inherit_parameter("DynamoDBTableName"))
        .with_child(backend_group().inherit_parameter("DynamoDBTableName"))
        .with_child(frontend_group())
}

#[cfg(test)]
mod tests {
    use stackform_common::config::ParameterOverrides;

    use super::*;

    #[test]
    fn root_stack_composes() {
        let composed = root_stack().compose().expect("compose");
        assert_eq!(composed.children.len(), 3);
        let names: Vec<&str> = composed.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["db", "backend", "frontend"]);
    }

    #[test]
    fn table_name_threads_into_db_and_backend() {
        let mut overrides = ParameterOverrides::new();
        overrides.set("DynamoDBTableName", "tareas-prod");
        let composed = root_stack().compose_with(&overrides).expect("compose");

        let db = &composed.children[0];
        let backend = &composed.children[1];
        assert_eq!(db.parameter("DynamoDBTableName"), Some("tareas-prod"));
        assert_eq!(backend.parameter("DynamoDBTableName"), Some("tareas-prod"));
    }

    #[test]
    fn frontend_keeps_its_own_defaults() {
        let composed = root_stack().compose().expect("compose");
        let frontend = &composed.children[2];
        assert_eq!(frontend.parameter("DomainName"), Some("davidhidalgo.live"));
        assert_eq!(frontend.parameter("DynamoDBTableName"), None);
    }
}
