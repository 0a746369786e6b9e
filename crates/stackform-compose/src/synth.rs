//! Rendering a composed group tree into the provisioning document.
//!
//! The document is the workspace's only output: a JSON tree the external
//! provisioning engine consumes. Parameter expressions are rendered to
//! their resolved values; cross-references stay in their stable
//! `${name.attr}` token form for the engine to substitute at
//! materialization.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;
use stackform_common::error::{Result, StackformError};
use stackform_common::types::{Attr, RefToken, ResourceName};
use stackform_model::expr::Expr;
use stackform_model::resource::Resource;
use stackform_model::table::AttributeType;

use crate::group::ComposedGroup;

/// A resolved parameter as it appears in the document.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterValue {
    /// Parameter name.
    pub name: String,
    /// Resolved value.
    pub value: String,
}

/// A rendered resource declaration.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDocument {
    /// Logical name.
    pub name: String,
    /// Resource kind.
    pub kind: String,
    /// Kind-specific rendered properties.
    pub properties: serde_json::Value,
}

/// A rendered deployable group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDocument {
    /// Group name.
    pub name: String,
    /// Resolved parameters in declaration order.
    pub parameters: Vec<ParameterValue>,
    /// Rendered resources in declaration order. Imported resources are
    /// omitted: they pre-exist and are not materialized.
    pub resources: Vec<ResourceDocument>,
    /// Topological provisioning order.
    pub deploy_order: Vec<String>,
    /// Rendered child groups.
    pub children: Vec<GroupDocument>,
}

/// Renders a composed group tree into its document form.
///
/// # Errors
///
/// Returns [`StackformError::UnboundParameter`] if a rendered expression
/// names a parameter absent from its group's resolved scope.
pub fn document(group: &ComposedGroup) -> Result<GroupDocument> {
    let params: BTreeMap<&str, &str> = group
        .parameters
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();

    let mut resources = Vec::new();
    for resource in &group.resources {
        if let Some(rendered) = render_resource(resource, &params)? {
            resources.push(rendered);
        }
    }

    let children = group
        .children
        .iter()
        .map(document)
        .collect::<Result<Vec<GroupDocument>>>()?;

    Ok(GroupDocument {
        name: group.name.clone(),
        parameters: group
            .parameters
            .iter()
            .map(|(name, value)| ParameterValue {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
        resources,
        deploy_order: group.deploy_order.iter().map(ToString::to_string).collect(),
        children,
    })
}

/// Renders a composed group tree to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if rendering or serialization fails.
pub fn to_json_string(group: &ComposedGroup) -> Result<String> {
    let doc = document(group)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn render_expr(expr: &Expr, params: &BTreeMap<&str, &str>) -> Result<String> {
    match expr {
        Expr::Lit(value) => Ok(value.clone()),
        Expr::Param(name) => params
            .get(name.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| StackformError::UnboundParameter { name: name.clone() }),
        Expr::Ref(token) => Ok(token.render()),
    }
}

fn token(target: &ResourceName, attr: Attr) -> String {
    RefToken::new(target.clone(), attr).render()
}

/// Invocation target string for a routed function, in the shape the
/// gateway service expects.
fn invocation_uri(function: &ResourceName) -> String {
    format!(
        "arn:aws:apigateway:${{aws:region}}:lambda:path/2015-03-31/functions/{}/invocations",
        token(function, Attr::Arn)
    )
}

#[allow(clippy::too_many_lines)]
fn render_resource(
    resource: &Resource,
    params: &BTreeMap<&str, &str>,
) -> Result<Option<ResourceDocument>> {
    let properties = match resource {
        Resource::Table(d) => json!({
            "table_name": render_expr(&d.table_name, params)?,
            "partition_key": d.partition_key,
            "key_attribute_type": match d.key_type {
                AttributeType::String => "S",
                AttributeType::Number => "N",
            },
            "billing_mode": d.billing,
        }),
        Resource::Function(d) => {
            let mut env = serde_json::Map::new();
            for (key, value) in &d.env {
                let _ = env.insert(key.clone(), render_expr(value, params)?.into());
            }
            json!({
                "function_name": render_expr(&d.function_name, params)?,
                "runtime": d.runtime,
                "code": {
                    "bucket": token(&d.code.bucket, Attr::Name),
                    "key": d.code.key,
                },
                "handler": d.handler,
                "role": token(&d.role, Attr::Arn),
                "environment": env,
            })
        }
        Resource::Role(d) => json!({
            "trusted_service": d.trusted_service,
            "actions": d.actions,
            "resources": d.resources,
        }),
        Resource::Bucket(d) => {
            if d.imported {
                tracing::debug!(bucket = %d.name, "imported bucket skipped by synthesis");
                return Ok(None);
            }
            let mut tags = serde_json::Map::new();
            for (key, value) in &d.tags {
                let _ = tags.insert(key.clone(), render_expr(value, params)?.into());
            }
            json!({
                "bucket_name": render_expr(&d.bucket_name, params)?,
                "encryption": d.encryption,
                "tags": tags,
            })
        }
        Resource::RestApi(d) => json!({
            "api_name": render_expr(&d.api_name, params)?,
        }),
        Resource::Route(d) => {
            let cors = d
                .cors
                .as_ref()
                .map(serde_json::to_value)
                .transpose()?;
            json!({
                "api": token(&d.api, Attr::Id),
                "method": d.method.as_str(),
                "path": d.path,
                "integration_uri": invocation_uri(&d.integration),
                "auth": d.auth,
                "cors": cors,
            })
        }
        Resource::Stage(d) => json!({
            "api": token(&d.api, Attr::Id),
            "stage_name": render_expr(&d.stage_name, params)?,
        }),
        Resource::Permission(d) => json!({
            "action": d.action,
            "principal": d.principal,
            "target": token(&d.target, Attr::Arn),
        }),
        Resource::Certificate(d) => json!({
            "domain": render_expr(&d.domain, params)?,
            "validation": {
                "method": "DNS",
                "hosted_zone_id": render_expr(&d.validation_zone, params)?,
            },
        }),
        Resource::Distribution(d) => {
            let aliases = d
                .aliases
                .iter()
                .map(|a| render_expr(a, params))
                .collect::<Result<Vec<String>>>()?;
            let mut tags = serde_json::Map::new();
            for (key, value) in &d.tags {
                let _ = tags.insert(key.clone(), render_expr(value, params)?.into());
            }
            json!({
                "aliases": aliases,
                "origin": {
                    "id": d.origin.as_str(),
                    "domain_name": token(&d.origin, Attr::DomainName),
                },
                "default_root_object": d.default_root_object,
                "compress": d.compress,
                "viewer_certificate": {
                    "certificate": token(&d.certificate, Attr::Arn),
                    "minimum_protocol_version": "TLSv1",
                    "ssl_support_method": "sni-only",
                },
                "error_response": d.error_response,
                "tags": tags,
            })
        }
        Resource::DnsRecord(d) => json!({
            "zone_id": render_expr(&d.zone_id, params)?,
            "record_name": render_expr(&d.record_name, params)?,
            "record_type": d.record_type,
            "alias_target": {
                "domain_name": token(&d.alias_target, Attr::DomainName),
                "zone_id": d.alias_zone_id,
                "evaluate_target_health": false,
            },
        }),
    };

    Ok(Some(ResourceDocument {
        name: resource.name().to_string(),
        kind: resource.kind().to_string(),
        properties,
    }))
}

#[cfg(test)]
mod tests {
    use stackform_model::api::{HttpMethod, RestApiDecl, RouteDecl};
    use stackform_model::function::{CodeLocation, FunctionDecl};
    use stackform_model::iam::RoleDecl;
    use stackform_model::param::Parameter;
    use stackform_model::storage::BucketDecl;
    use stackform_model::table::TableDecl;

    use super::*;
    use crate::group::Group;

    fn backend() -> Group {
        Group::new("backend")
            .with_parameter(Parameter::string("DynamoDBTableName", "tareas"))
            .with_resource(BucketDecl::imported("code-bucket", "dhg-primer-reto-lambdas"))
            .with_resource(RoleDecl::new("fn-role", "lambda.amazonaws.com"))
            .with_resource(
                FunctionDecl::new(
                    "get-tareas",
                    "get-tareas",
                    CodeLocation::in_bucket("code-bucket", "Lambdas/get-tareas.zip"),
                    "lambdas/get-tareas.handler",
                    "fn-role",
                )
                .env("TABLE_NAME", Expr::param("DynamoDBTableName")),
            )
            .with_resource(RestApiDecl::new("rest-api", "TareasAPI"))
            .with_resource(RouteDecl::new(
                "list-tareas",
                "rest-api",
                HttpMethod::Get,
                "tareas",
                "get-tareas",
            ))
    }

    #[test]
    fn parameters_render_to_resolved_values() {
        let composed = backend().compose().expect("compose");
        let doc = document(&composed).expect("document");
        let function = doc
            .resources
            .iter()
            .find(|r| r.name == "get-tareas")
            .expect("function");
        assert_eq!(function.properties["environment"]["TABLE_NAME"], "tareas");
    }

    #[test]
    fn imported_buckets_are_omitted() {
        let composed = backend().compose().expect("compose");
        let doc = document(&composed).expect("document");
        assert!(doc.resources.iter().all(|r| r.name != "code-bucket"));
        assert!(doc.deploy_order.contains(&"code-bucket".to_owned()));
    }

    #[test]
    fn cross_references_stay_symbolic() {
        let composed = backend().compose().expect("compose");
        let doc = document(&composed).expect("document");
        let function = doc
            .resources
            .iter()
            .find(|r| r.name == "get-tareas")
            .expect("function");
        assert_eq!(function.properties["role"], "${fn-role.arn}");

        let route = doc
            .resources
            .iter()
            .find(|r| r.name == "list-tareas")
            .expect("route");
        let uri = route.properties["integration_uri"]
            .as_str()
            .expect("uri string");
        assert!(uri.contains("${get-tareas.arn}"), "got: {uri}");
        assert!(uri.ends_with("/invocations"), "got: {uri}");
    }

    #[test]
    fn json_output_is_stable() {
        let composed = backend().compose().expect("compose");
        let first = to_json_string(&composed).expect("json");
        let second = to_json_string(&composed).expect("json");
        assert_eq!(first, second);
    }
}
