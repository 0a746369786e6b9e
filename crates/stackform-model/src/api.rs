//! REST API, route, and stage declarations.

use std::fmt;

use serde::{Deserialize, Serialize};
use stackform_common::types::ResourceName;

use crate::expr::Expr;

/// HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
    /// HTTP OPTIONS (preflight).
    Options,
}

impl HttpMethod {
    /// Returns the method's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Authorization mode of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// No authorization; the route is public.
    #[default]
    None,
    /// Caller must sign requests with provider credentials.
    Iam,
}

/// Preflight CORS settings attached to a route's path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsPreflight {
    /// Allowed origins.
    pub allow_origins: Vec<String>,
    /// Allowed methods.
    pub allow_methods: Vec<HttpMethod>,
    /// Allowed request headers.
    pub allow_headers: Vec<String>,
}

impl CorsPreflight {
    /// Allows any origin for the given methods, with the standard
    /// signed-request headers.
    #[must_use]
    pub fn any_origin(methods: &[HttpMethod]) -> Self {
        Self {
            allow_origins: vec!["*".into()],
            allow_methods: methods.to_vec(),
            allow_headers: vec![
                "Content-Type".into(),
                "X-Amz-Date".into(),
                "Authorization".into(),
                "X-Api-Key".into(),
                "X-Amz-Security-Token".into(),
            ],
        }
    }
}

/// A REST API container for routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Physical API name.
    pub api_name: Expr,
}

impl RestApiDecl {
    /// Declares a REST API.
    #[must_use]
    pub fn new(name: impl Into<ResourceName>, api_name: impl Into<Expr>) -> Self {
        Self {
            name: name.into(),
            api_name: api_name.into(),
        }
    }
}

/// A route binding an HTTP method and path to a function integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// API the route belongs to, referenced by logical name.
    pub api: ResourceName,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path part under the API root (e.g. `tareas`).
    pub path: String,
    /// Integrated function, referenced by logical name.
    pub integration: ResourceName,
    /// Authorization mode.
    pub auth: AuthMode,
    /// Preflight CORS settings for the route's path, if any.
    pub cors: Option<CorsPreflight>,
}

impl RouteDecl {
    /// Declares a public proxy route to the function named `integration`.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        api: impl Into<ResourceName>,
        method: HttpMethod,
        path: impl Into<String>,
        integration: impl Into<ResourceName>,
    ) -> Self {
        Self {
            name: name.into(),
            api: api.into(),
            method,
            path: path.into(),
            integration: integration.into(),
            auth: AuthMode::None,
            cors: None,
        }
    }

    /// Sets the authorization mode.
    #[must_use]
    pub const fn auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Attaches preflight CORS settings.
    #[must_use]
    pub fn cors(mut self, cors: CorsPreflight) -> Self {
        self.cors = Some(cors);
        self
    }
}

/// A deployed stage of a REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// API the stage deploys, referenced by logical name.
    pub api: ResourceName,
    /// Stage name (e.g. the environment name).
    pub stage_name: Expr,
}

impl StageDecl {
    /// Declares a stage of the API named `api`.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        api: impl Into<ResourceName>,
        stage_name: impl Into<Expr>,
    ) -> Self {
        Self {
            name: name.into(),
            api: api.into(),
            stage_name: stage_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_defaults_to_public() {
        let route = RouteDecl::new("list-tareas", "rest-api", HttpMethod::Get, "tareas", "get-tareas");
        assert_eq!(route.auth, AuthMode::None);
        assert!(route.cors.is_none());
    }

    #[test]
    fn cors_any_origin_covers_requested_methods() {
        let cors = CorsPreflight::any_origin(&[HttpMethod::Get, HttpMethod::Options]);
        assert_eq!(cors.allow_origins, vec!["*"]);
        assert!(cors.allow_methods.contains(&HttpMethod::Options));
        assert!(cors.allow_headers.iter().any(|h| h == "Content-Type"));
    }

    #[test]
    fn method_wire_names_are_uppercase() {
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
