//! The frontend group: static site bucket, distribution, and DNS record.

use stackform_common::constants;
use stackform_compose::group::Group;
use stackform_model::edge::{CertificateDecl, DistributionDecl, DnsRecordDecl, ErrorResponse};
use stackform_model::expr::Expr;
use stackform_model::iam::PermissionDecl;
use stackform_model::param::Parameter;
use stackform_model::storage::{BucketDecl, SseAlgorithm};

/// Principal of the content-delivery service reading the site bucket.
const CDN_SERVICE_PRINCIPAL: &str = "cloudfront.amazonaws.com";

/// Builds the `frontend` group.
///
/// The certificate and bucket lead, the distribution references both, and
/// the DNS record points at the distribution's generated domain name.
#[must_use]
pub fn frontend_group() -> Group {
    Group::new("frontend")
        .with_parameter(Parameter::string("DomainName", "davidhidalgo.live"))
        .with_parameter(Parameter::string("S3BucketName", "dhg-primer-reto-frontend"))
        .with_parameter(Parameter::string("HostedDnsZoneId", "Z02532832CD89DPG6UEAB"))
        .with_resource(CertificateDecl::new(
            "site-cert",
            Expr::param("DomainName"),
            Expr::param("HostedDnsZoneId"),
        ))
        .with_resource(
            BucketDecl::new("site-bucket", Expr::param("S3BucketName"))
                .encrypted(SseAlgorithm::Aes256)
                .tag("Domain", Expr::param("DomainName")),
        )
        .with_resource(
            DistributionDecl::new("site-cdn", "site-bucket", "site-cert")
                .alias(Expr::param("DomainName"))
                .error_response(ErrorResponse {
                    error_code: 403,
                    response_code: 404,
                    page_path: "/404.html".into(),
                    caching_min_ttl: 300,
                })
                .tag("Domain", Expr::param("DomainName")),
        )
        .with_resource(PermissionDecl::new(
            "read-site-bucket",
            constants::READ_OBJECT_ACTION,
            CDN_SERVICE_PRINCIPAL,
            "site-bucket",
        ))
        .with_resource(DnsRecordDecl::alias(
            "site-dns",
            Expr::param("HostedDnsZoneId"),
            Expr::param("DomainName"),
            "site-cdn",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_group_composes_with_defaults() {
        let composed = frontend_group().compose().expect("compose");
        assert_eq!(composed.parameter("DomainName"), Some("davidhidalgo.live"));
        assert_eq!(composed.resources.len(), 5);
    }

    #[test]
    fn distribution_deploys_after_its_origin_and_certificate() {
        let composed = frontend_group().compose().expect("compose");
        let pos = |name: &str| {
            composed
                .deploy_order
                .iter()
                .position(|n| n.as_str() == name)
                .expect(name)
        };
        assert!(pos("site-bucket") < pos("site-cdn"));
        assert!(pos("site-cert") < pos("site-cdn"));
        assert!(pos("site-cdn") < pos("site-dns"));
    }
}
