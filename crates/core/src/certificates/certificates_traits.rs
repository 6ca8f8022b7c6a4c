use crate::certificates::certificates_model::{
    CertificateDetail, CertificateSummary, GeneratedCertificate, NetWorthData, NewCertificate,
};
use crate::document::RenderedDocument;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for certificate repository operations
#[async_trait]
pub trait CertificateRepositoryTrait: Send + Sync {
    /// Persists the certificate and all of its child rows in one transaction.
    async fn create(&self, new_certificate: NewCertificate) -> Result<CertificateSummary>;
    fn get(&self, certificate_id: &str) -> Result<Option<CertificateDetail>>;
    fn get_snapshot(&self, certificate_id: &str) -> Result<Option<String>>;
    fn get_document(&self, certificate_id: &str) -> Result<Option<RenderedDocument>>;
    /// Newest first, skipping `offset` rows.
    fn list(
        &self,
        person_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CertificateSummary>>;
    async fn delete(&self, certificate_id: String) -> Result<usize>;
}

/// Trait for certificate service operations
#[async_trait]
pub trait CertificateServiceTrait: Send + Sync {
    /// Validates, renders, then saves. A failed save is reported as a warning.
    async fn generate(
        &self,
        data: NetWorthData,
        person_id: Option<String>,
    ) -> Result<GeneratedCertificate>;
    fn get_certificate(&self, certificate_id: &str) -> Result<CertificateDetail>;
    fn get_snapshot(&self, certificate_id: &str) -> Result<String>;
    fn get_document(&self, certificate_id: &str) -> Result<RenderedDocument>;
    fn list_certificates(
        &self,
        person_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CertificateSummary>>;
    async fn delete_certificate(&self, certificate_id: String) -> Result<()>;
}
