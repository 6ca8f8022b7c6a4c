use async_trait::async_trait;
use std::sync::Arc;

use super::certificates_model::{
    CertificateDetail, CertificateMetadata, CertificateSummary, GeneratedCertificate,
    NetWorthData, NewCertificate,
};
use super::certificates_traits::{CertificateRepositoryTrait, CertificateServiceTrait};
use super::validation::validate_for_generation;
use crate::constants::SNAPSHOT_SCHEMA_VERSION;
use crate::document::{DocumentRenderer, RenderedDocument};
use crate::errors::{Error, Result, ValidationError};

pub struct CertificateService {
    repository: Arc<dyn CertificateRepositoryTrait>,
    renderer: Arc<dyn DocumentRenderer>,
    source: String,
}

impl CertificateService {
    pub const DEFAULT_SOURCE: &'static str = "networth-server";

    pub fn new(
        repository: Arc<dyn CertificateRepositoryTrait>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            repository,
            renderer,
            source: Self::DEFAULT_SOURCE.to_string(),
        }
    }

    /// Label recorded in each saved certificate's metadata.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

#[async_trait]
impl CertificateServiceTrait for CertificateService {
    async fn generate(
        &self,
        data: NetWorthData,
        person_id: Option<String>,
    ) -> Result<GeneratedCertificate> {
        let problems = validate_for_generation(&data, person_id.is_some());
        if !problems.is_empty() {
            return Err(ValidationError::InvalidInput(problems.join("; ")).into());
        }

        let summary = data.summary()?;
        let document = self.renderer.render(&data, &summary)?;

        let new_certificate = NewCertificate {
            person_id,
            data,
            document: Some(document.clone()),
            metadata: CertificateMetadata {
                schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
                source: self.source.clone(),
            },
        };

        let (certificate_id, warning) = match self.repository.create(new_certificate).await {
            Ok(saved) => {
                log::info!("Saved certificate {} ({})", saved.id, saved.display_name);
                (Some(saved.id), None)
            }
            Err(e) => {
                log::error!("Certificate generated but not saved: {}", e);
                (
                    None,
                    Some(format!("Document was generated but saving failed: {}", e)),
                )
            }
        };

        Ok(GeneratedCertificate {
            document,
            summary,
            certificate_id,
            warning,
        })
    }

    fn get_certificate(&self, certificate_id: &str) -> Result<CertificateDetail> {
        self.repository
            .get(certificate_id)?
            .ok_or_else(|| Error::NotFound(format!("Certificate {}", certificate_id)))
    }

    fn get_snapshot(&self, certificate_id: &str) -> Result<String> {
        self.repository
            .get_snapshot(certificate_id)?
            .ok_or_else(|| Error::NotFound(format!("Certificate {}", certificate_id)))
    }

    fn get_document(&self, certificate_id: &str) -> Result<RenderedDocument> {
        self.repository
            .get_document(certificate_id)?
            .ok_or_else(|| {
                Error::NotFound(format!("Document for certificate {}", certificate_id))
            })
    }

    fn list_certificates(
        &self,
        person_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CertificateSummary>> {
        if limit <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "limit must be positive, got {}",
                limit
            ))
            .into());
        }
        if offset < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "offset must not be negative, got {}",
                offset
            ))
            .into());
        }
        self.repository.list(person_id, limit, offset)
    }

    async fn delete_certificate(&self, certificate_id: String) -> Result<()> {
        let deleted = self.repository.delete(certificate_id.clone()).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Certificate {}", certificate_id)));
        }
        log::info!("Deleted certificate {}", certificate_id);
        Ok(())
    }
}
