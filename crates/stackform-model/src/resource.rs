//! The flat resource declaration enum consumed by the composer.
//!
//! There is deliberately no trait hierarchy here: a declaration is a plain
//! record, and the composer only needs three uniform views of it — its
//! logical name, the names it references, and the expressions it carries.

use std::fmt;

use serde::{Deserialize, Serialize};
use stackform_common::types::ResourceName;

use crate::api::{RestApiDecl, RouteDecl, StageDecl};
use crate::edge::{CertificateDecl, DistributionDecl, DnsRecordDecl};
use crate::expr::Expr;
use crate::function::FunctionDecl;
use crate::iam::{PermissionDecl, RoleDecl};
use crate::storage::BucketDecl;
use crate::table::TableDecl;

/// Kind discriminant of a resource declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Key-value table.
    Table,
    /// Compute function.
    Function,
    /// Execution role.
    Role,
    /// Object-store bucket.
    Bucket,
    /// REST API container.
    RestApi,
    /// API route.
    Route,
    /// API stage.
    Stage,
    /// Permission grant.
    Permission,
    /// TLS certificate.
    Certificate,
    /// Content-delivery distribution.
    Distribution,
    /// DNS record.
    DnsRecord,
}

impl ResourceKind {
    /// Returns the kind's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Function => "function",
            Self::Role => "role",
            Self::Bucket => "bucket",
            Self::RestApi => "rest_api",
            Self::Route => "route",
            Self::Stage => "stage",
            Self::Permission => "permission",
            Self::Certificate => "certificate",
            Self::Distribution => "distribution",
            Self::DnsRecord => "dns_record",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single resource declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Key-value table.
    Table(TableDecl),
    /// Compute function.
    Function(FunctionDecl),
    /// Execution role.
    Role(RoleDecl),
    /// Object-store bucket.
    Bucket(BucketDecl),
    /// REST API container.
    RestApi(RestApiDecl),
    /// API route.
    Route(RouteDecl),
    /// API stage.
    Stage(StageDecl),
    /// Permission grant.
    Permission(PermissionDecl),
    /// TLS certificate.
    Certificate(CertificateDecl),
    /// Content-delivery distribution.
    Distribution(DistributionDecl),
    /// DNS record.
    DnsRecord(DnsRecordDecl),
}

impl Resource {
    /// Returns the declaration's logical name.
    #[must_use]
    pub const fn name(&self) -> &ResourceName {
        match self {
            Self::Table(d) => &d.name,
            Self::Function(d) => &d.name,
            Self::Role(d) => &d.name,
            Self::Bucket(d) => &d.name,
            Self::RestApi(d) => &d.name,
            Self::Route(d) => &d.name,
            Self::Stage(d) => &d.name,
            Self::Permission(d) => &d.name,
            Self::Certificate(d) => &d.name,
            Self::Distribution(d) => &d.name,
            Self::DnsRecord(d) => &d.name,
        }
    }

    /// Returns the declaration's kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Table(_) => ResourceKind::Table,
            Self::Function(_) => ResourceKind::Function,
            Self::Role(_) => ResourceKind::Role,
            Self::Bucket(_) => ResourceKind::Bucket,
            Self::RestApi(_) => ResourceKind::RestApi,
            Self::Route(_) => ResourceKind::Route,
            Self::Stage(_) => ResourceKind::Stage,
            Self::Permission(_) => ResourceKind::Permission,
            Self::Certificate(_) => ResourceKind::Certificate,
            Self::Distribution(_) => ResourceKind::Distribution,
            Self::DnsRecord(_) => ResourceKind::DnsRecord,
        }
    }

    /// Returns every expression carried by the declaration.
    #[must_use]
    pub fn exprs(&self) -> Vec<&Expr> {
        match self {
            Self::Table(d) => vec![&d.table_name],
            Self::Function(d) => {
                let mut exprs = vec![&d.function_name];
                exprs.extend(d.env.values());
                exprs
            }
            Self::Role(_) | Self::Route(_) | Self::Permission(_) => Vec::new(),
            Self::Bucket(d) => {
                let mut exprs = vec![&d.bucket_name];
                exprs.extend(d.tags.iter().map(|(_, v)| v));
                exprs
            }
            Self::RestApi(d) => vec![&d.api_name],
            Self::Stage(d) => vec![&d.stage_name],
            Self::Certificate(d) => vec![&d.domain, &d.validation_zone],
            Self::Distribution(d) => {
                let mut exprs: Vec<&Expr> = d.aliases.iter().collect();
                exprs.extend(d.tags.iter().map(|(_, v)| v));
                exprs
            }
            Self::DnsRecord(d) => vec![&d.zone_id, &d.record_name],
        }
    }

    /// Returns every resource name the declaration references, in field
    /// order: structural references first, then references embedded in
    /// expressions.
    #[must_use]
    pub fn references(&self) -> Vec<&ResourceName> {
        let mut refs: Vec<&ResourceName> = match self {
            Self::Function(d) => vec![&d.code.bucket, &d.role],
            Self::Route(d) => vec![&d.api, &d.integration],
            Self::Stage(d) => vec![&d.api],
            Self::Permission(d) => vec![&d.target],
            Self::Distribution(d) => vec![&d.origin, &d.certificate],
            Self::DnsRecord(d) => vec![&d.alias_target],
            Self::Table(_)
            | Self::Role(_)
            | Self::Bucket(_)
            | Self::RestApi(_)
            | Self::Certificate(_) => Vec::new(),
        };
        refs.extend(self.exprs().into_iter().filter_map(Expr::ref_target));
        refs
    }
}

impl From<TableDecl> for Resource {
    fn from(decl: TableDecl) -> Self {
        Self::Table(decl)
    }
}

impl From<FunctionDecl> for Resource {
    fn from(decl: FunctionDecl) -> Self {
        Self::Function(decl)
    }
}

impl From<RoleDecl> for Resource {
    fn from(decl: RoleDecl) -> Self {
        Self::Role(decl)
    }
}

impl From<BucketDecl> for Resource {
    fn from(decl: BucketDecl) -> Self {
        Self::Bucket(decl)
    }
}

impl From<RestApiDecl> for Resource {
    fn from(decl: RestApiDecl) -> Self {
        Self::RestApi(decl)
    }
}

impl From<RouteDecl> for Resource {
    fn from(decl: RouteDecl) -> Self {
        Self::Route(decl)
    }
}

impl From<StageDecl> for Resource {
    fn from(decl: StageDecl) -> Self {
        Self::Stage(decl)
    }
}

impl From<PermissionDecl> for Resource {
    fn from(decl: PermissionDecl) -> Self {
        Self::Permission(decl)
    }
}

impl From<CertificateDecl> for Resource {
    fn from(decl: CertificateDecl) -> Self {
        Self::Certificate(decl)
    }
}

impl From<DistributionDecl> for Resource {
    fn from(decl: DistributionDecl) -> Self {
        Self::Distribution(decl)
    }
}

impl From<DnsRecordDecl> for Resource {
    fn from(decl: DnsRecordDecl) -> Self {
        Self::DnsRecord(decl)
    }
}
