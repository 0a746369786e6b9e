//! Object-store bucket declarations.

use serde::{Deserialize, Serialize};
use stackform_common::types::ResourceName;

use crate::expr::Expr;

/// Server-side encryption algorithm applied to stored objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SseAlgorithm {
    /// Provider-managed AES-256 encryption.
    Aes256,
}

/// An object-store bucket.
///
/// Imported buckets already exist outside this deployment; they register a
/// resolvable name but are skipped by synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDecl {
    /// Logical name within the group.
    pub name: ResourceName,
    /// Physical bucket name.
    pub bucket_name: Expr,
    /// Encryption applied to stored objects, if any.
    pub encryption: Option<SseAlgorithm>,
    /// Whether the bucket pre-exists outside this deployment.
    pub imported: bool,
    /// Provider tags attached at materialization.
    pub tags: Vec<(String, Expr)>,
}

impl BucketDecl {
    /// Declares a bucket owned by this deployment.
    #[must_use]
    pub fn new(name: impl Into<ResourceName>, bucket_name: impl Into<Expr>) -> Self {
        Self {
            name: name.into(),
            bucket_name: bucket_name.into(),
            encryption: None,
            imported: false,
            tags: Vec::new(),
        }
    }

    /// References a bucket that already exists outside this deployment.
    #[must_use]
    pub fn imported(name: impl Into<ResourceName>, bucket_name: impl Into<Expr>) -> Self {
        Self {
            name: name.into(),
            bucket_name: bucket_name.into(),
            encryption: None,
            imported: true,
            tags: Vec::new(),
        }
    }

    /// Enables server-side encryption.
    #[must_use]
    pub const fn encrypted(mut self, algorithm: SseAlgorithm) -> Self {
        self.encryption = Some(algorithm);
        self
    }

    /// Attaches a provider tag.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_bucket_is_not_imported() {
        let bucket = BucketDecl::new("site-bucket", Expr::param("S3BucketName"))
            .encrypted(SseAlgorithm::Aes256)
            .tag("Domain", Expr::param("DomainName"));
        assert!(!bucket.imported);
        assert_eq!(bucket.encryption, Some(SseAlgorithm::Aes256));
        assert_eq!(bucket.tags.len(), 1);
    }

    #[test]
    fn imported_bucket_keeps_its_name() {
        let bucket = BucketDecl::imported("code-bucket", "dhg-primer-reto-lambdas");
        assert!(bucket.imported);
        assert_eq!(bucket.bucket_name, Expr::lit("dhg-primer-reto-lambdas"));
    }
}
