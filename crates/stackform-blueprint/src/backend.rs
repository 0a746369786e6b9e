//! The backend group: task functions and the REST API routing to them.

use stackform_common::constants;
use stackform_compose::group::Group;
use stackform_model::api::{CorsPreflight, HttpMethod, RestApiDecl, RouteDecl, StageDecl};
use stackform_model::expr::Expr;
use stackform_model::function::{CodeLocation, FunctionDecl};
use stackform_model::iam::{PermissionDecl, RoleDecl};
use stackform_model::param::Parameter;
use stackform_model::storage::BucketDecl;

/// Pre-existing bucket holding the function code artifacts.
const CODE_BUCKET_NAME: &str = "dhg-primer-reto-lambdas";

/// The five task functions: logical name, naming parameter, artifact stem.
const TASK_FUNCTIONS: &[(&str, &str, &str)] = &[
    ("get-tareas", "LambdaGetAllName", "get-tareas"),
    ("get-tarea", "LambdaGetName", "get-tarea"),
    ("post-tarea", "LambdaPostName", "post-tarea"),
    ("patch-tarea", "LambdaPatchName", "patch-tarea"),
    ("delete-tarea", "LambdaDeleteName", "delete-tarea"),
];

fn task_function(logical: &str, name_param: &str, artifact: &str) -> FunctionDecl {
    FunctionDecl::new(
        logical,
        Expr::param(name_param),
        CodeLocation::in_bucket("code-bucket", format!("Lambdas/{artifact}.zip")),
        format!("lambdas/{artifact}.handler"),
        "fn-role",
    )
    .env("TABLE_NAME", Expr::param("DynamoDBTableName"))
}

fn task_route(
    name: &str,
    method: HttpMethod,
    path: &str,
    integration: &str,
    cors_methods: &[HttpMethod],
) -> RouteDecl {
    RouteDecl::new(name, "rest-api", method, path, integration)
        .cors(CorsPreflight::any_origin(cors_methods))
}

fn invoke_grant(function: &str) -> PermissionDecl {
    PermissionDecl::new(
        format!("invoke-{function}"),
        constants::INVOKE_FUNCTION_ACTION,
        constants::GATEWAY_SERVICE_PRINCIPAL,
        function,
    )
}

/// Builds the `backend` group.
///
/// Declaration order follows the provisioning dependencies: role and code
/// bucket first, then the functions, then the API with its routes and
/// stage, and finally one invoke grant per function.
#[must_use]
pub fn backend_group() -> Group {
    const TAREAS_CORS: &[HttpMethod] = &[HttpMethod::Get, HttpMethod::Options];
    const TAREA_CORS: &[HttpMethod] = &[
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
    ];

    let mut group = Group::new("backend")
        .with_parameter(Parameter::string("LambdaGetAllName", "get-tareas"))
        .with_parameter(Parameter::string("LambdaGetName", "get-tarea"))
        .with_parameter(Parameter::string("LambdaPostName", "post-tarea"))
        .with_parameter(Parameter::string("LambdaPatchName", "patch-tarea"))
        .with_parameter(Parameter::string("LambdaDeleteName", "delete-tarea"))
        .with_parameter(Parameter::string("DynamoDBTableName", "tareas"))
        .with_parameter(Parameter::string("APIName", "TareasAPI"))
        .with_parameter(Parameter::string("EnvironmentName", "api"))
        .with_resource(
            RoleDecl::new("fn-role", constants::FUNCTION_SERVICE_PRINCIPAL)
                .allow(constants::TABLE_ACTIONS)
                .allow(constants::LOG_ACTIONS),
        )
        .with_resource(BucketDecl::imported("code-bucket", CODE_BUCKET_NAME));

    for (logical, name_param, artifact) in TASK_FUNCTIONS {
        group = group.with_resource(task_function(logical, name_param, artifact));
    }

    group = group
        .with_resource(RestApiDecl::new("rest-api", Expr::param("APIName")))
        .with_resource(task_route(
            "tareas-get",
            HttpMethod::Get,
            "tareas",
            "get-tareas",
            TAREAS_CORS,
        ))
        .with_resource(task_route(
            "tarea-get",
            HttpMethod::Get,
            "tarea",
            "get-tarea",
            TAREA_CORS,
        ))
        .with_resource(task_route(
            "tarea-post",
            HttpMethod::Post,
            "tarea",
            "post-tarea",
            TAREA_CORS,
        ))
        .with_resource(task_route(
            "tarea-patch",
            HttpMethod::Patch,
            "tarea",
            "patch-tarea",
            TAREA_CORS,
        ))
        .with_resource(task_route(
            "tarea-delete",
            HttpMethod::Delete,
            "tarea",
            "delete-tarea",
            TAREA_CORS,
        ))
        .with_resource(StageDecl::new(
            "api-stage",
            "rest-api",
            Expr::param("EnvironmentName"),
        ));

    for (logical, _, _) in TASK_FUNCTIONS {
        group = group.with_resource(invoke_grant(logical));
    }

    group
}

#[cfg(test)]
mod tests {
    use stackform_compose::group::ComposedGroup;
    use stackform_model::resource::ResourceKind;

    use super::*;

    fn composed() -> ComposedGroup {
        backend_group().compose().expect("backend should compose")
    }

    #[test]
    fn backend_group_composes_with_defaults() {
        let composed = composed();
        assert_eq!(composed.parameter("APIName"), Some("TareasAPI"));
        assert_eq!(composed.parameter("EnvironmentName"), Some("api"));
    }

    #[test]
    fn declares_five_functions_and_their_grants() {
        let composed = composed();
        let count = |kind: ResourceKind| {
            composed
                .resources
                .iter()
                .filter(|r| r.kind() == kind)
                .count()
        };
        assert_eq!(count(ResourceKind::Function), 5);
        assert_eq!(count(ResourceKind::Permission), 5);
        assert_eq!(count(ResourceKind::Route), 5);
    }

    #[test]
    fn grants_deploy_after_their_functions() {
        let composed = composed();
        let pos = |name: &str| {
            composed
                .deploy_order
                .iter()
                .position(|n| n.as_str() == name)
                .expect(name)
        };
        for (logical, _, _) in TASK_FUNCTIONS {
            assert!(pos(logical) < pos(&format!("invoke-{logical}")));
        }
        assert!(pos("fn-role") < pos("get-tareas"));
        assert!(pos("rest-api") < pos("tarea-delete"));
    }
}
