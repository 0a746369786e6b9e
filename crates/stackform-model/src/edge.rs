//! Certificate, content-delivery distribution, and DNS record declarations.

use serde::{Deserialize, Serialize};
use stackform_common::constants;
use stackform_common::types::ResourceName;

use crate::expr::Expr;

/// A DNS-validated TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Domain the certificate covers.
    pub domain: Expr,
    /// Hosted zone used for DNS validation records.
    pub validation_zone: Expr,
}

impl CertificateDecl {
    /// Declares a certificate for `domain`, validated through `validation_zone`.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        domain: impl Into<Expr>,
        validation_zone: impl Into<Expr>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            validation_zone: validation_zone.into(),
        }
    }
}

/// Custom error page served by a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Origin error code being remapped.
    pub error_code: u16,
    /// Status code returned to the viewer.
    pub response_code: u16,
    /// Page served in place of the origin error.
    pub page_path: String,
    /// Minimum seconds the remapped response is cached.
    pub caching_min_ttl: u64,
}

/// A content-delivery distribution fronting a bucket origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Origin bucket, referenced by logical name.
    pub origin: ResourceName,
    /// Alternate domain names served by the distribution.
    pub aliases: Vec<Expr>,
    /// TLS certificate, referenced by logical name.
    pub certificate: ResourceName,
    /// Object served for the root path.
    pub default_root_object: String,
    /// Whether responses are compressed.
    pub compress: bool,
    /// Custom error page mapping, if any.
    pub error_response: Option<ErrorResponse>,
    /// Provider tags attached at materialization.
    pub tags: Vec<(String, Expr)>,
}

impl DistributionDecl {
    /// Declares a distribution serving `index.html` from the bucket named `origin`.
    #[must_use]
    pub fn new(
        name: impl Into<ResourceName>,
        origin: impl Into<ResourceName>,
        certificate: impl Into<ResourceName>,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            aliases: Vec::new(),
            certificate: certificate.into(),
            default_root_object: "index.html".into(),
            compress: true,
            error_response: None,
            tags: Vec::new(),
        }
    }

    /// Adds an alternate domain name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<Expr>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets a custom error page mapping.
    #[must_use]
    pub fn error_response(mut self, response: ErrorResponse) -> Self {
        self.error_response = Some(response);
        self
    }

    /// Attaches a provider tag.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }
}

/// Type of a DNS record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address or alias record.
    A,
    /// IPv6 address or alias record.
    Aaaa,
    /// Canonical name record.
    Cname,
}

/// A DNS alias record pointing at a distribution's generated domain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Hosted zone the record is created in.
    pub zone_id: Expr,
    /// Fully qualified record name.
    pub record_name: Expr,
    /// Record type.
    pub record_type: RecordType,
    /// Distribution the alias points at, referenced by logical name.
    pub alias_target: ResourceName,
    /// Fixed hosted zone id of the delivery network's alias targets.
    pub alias_zone_id: String,
}

impl DnsRecordDecl {
    /// Declares an A-alias record in `zone_id` pointing at the distribution
    /// named `alias_target`.
    #[must_use]
    pub fn alias(
        name: impl Into<ResourceName>,
        zone_id: impl Into<Expr>,
        record_name: impl Into<Expr>,
        alias_target: impl Into<ResourceName>,
    ) -> Self {
        Self {
            name: name.into(),
            zone_id: zone_id.into(),
            record_name: record_name.into(),
            record_type: RecordType::A,
            alias_target: alias_target.into(),
            alias_zone_id: constants::CDN_ALIAS_ZONE_ID.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_serves_index_by_default() {
        let cdn = DistributionDecl::new("site-cdn", "site-bucket", "site-cert")
            .alias(Expr::param("DomainName"));
        assert_eq!(cdn.default_root_object, "index.html");
        assert!(cdn.compress);
        assert_eq!(cdn.aliases.len(), 1);
    }

    #[test]
    fn alias_record_targets_the_cdn_zone() {
        let record = DnsRecordDecl::alias(
            "site-dns",
            Expr::param("HostedDnsZoneId"),
            Expr::param("DomainName"),
            "site-cdn",
        );
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.alias_zone_id, constants::CDN_ALIAS_ZONE_ID);
    }
}
