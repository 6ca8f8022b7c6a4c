use super::*;
use crate::document::{DocumentRenderer, DocxCertificateRenderer, RenderedDocument};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockRepository {
    saved: Mutex<Vec<NewCertificate>>,
    fail_create: bool,
}

#[async_trait]
impl CertificateRepositoryTrait for MockRepository {
    async fn create(&self, new_certificate: NewCertificate) -> Result<CertificateSummary> {
        if self.fail_create {
            return Err(DatabaseError::ForeignKeyViolation("person_id".to_string()).into());
        }
        let summary = new_certificate.data.summary()?;
        let record = CertificateSummary {
            id: format!("cert-{}", self.saved.lock().unwrap().len() + 1),
            person_id: new_certificate.person_id.clone(),
            display_name: new_certificate.data.display_name(),
            certificate_date: new_certificate.data.certificate_date,
            foreign_currency: new_certificate.data.foreign_currency,
            exchange_rate: new_certificate.data.exchange_rate,
            total_movable_assets_inr: summary.total_movable_assets_inr,
            total_immovable_assets_inr: summary.total_immovable_assets_inr,
            total_liabilities_inr: summary.total_liabilities_inr,
            net_worth_inr: summary.net_worth_inr,
            net_worth_foreign: summary.net_worth_foreign,
            has_document: new_certificate.document.is_some(),
            created_at: Utc::now().naive_utc(),
        };
        self.saved.lock().unwrap().push(new_certificate);
        Ok(record)
    }

    fn get(&self, _certificate_id: &str) -> Result<Option<CertificateDetail>> {
        Ok(None)
    }

    fn get_snapshot(&self, certificate_id: &str) -> Result<Option<String>> {
        Ok((certificate_id == "cert-1").then(|| "{}".to_string()))
    }

    fn get_document(&self, _certificate_id: &str) -> Result<Option<RenderedDocument>> {
        Ok(None)
    }

    fn list(
        &self,
        _person_id: Option<&str>,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<CertificateSummary>> {
        Ok(Vec::new())
    }

    async fn delete(&self, certificate_id: String) -> Result<usize> {
        Ok(usize::from(certificate_id == "cert-1"))
    }
}

struct BrokenRenderer;

impl DocumentRenderer for BrokenRenderer {
    fn render(&self, _data: &NetWorthData, _summary: &NetWorthSummary) -> Result<RenderedDocument> {
        Err(Error::Render("template missing".to_string()))
    }
}

fn ready_data() -> NetWorthData {
    let mut data = NetWorthData::new_for_date(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
    data.embassy_name = "Embassy of the United States".to_string();
    data.individuals = vec![Individual {
        full_name: "Kiran Shah".to_string(),
        passport_number: Some("P7654321".to_string()),
        address: Some("22 Residency Road, Pune".to_string()),
    }];
    data.add_record(BankAccount {
        holder_name: "Kiran Shah".to_string(),
        balance_inr: 250_000.0,
        ..Default::default()
    });
    data
}

fn service(repository: Arc<MockRepository>) -> CertificateService {
    CertificateService::new(repository, Arc::new(DocxCertificateRenderer::new()))
}

#[tokio::test]
async fn generate_renders_and_saves() {
    let repository = Arc::new(MockRepository::default());
    let generated = service(repository.clone())
        .with_source("test-suite")
        .generate(ready_data(), Some("person-1".to_string()))
        .await
        .unwrap();

    assert_eq!(generated.certificate_id.as_deref(), Some("cert-1"));
    assert!(generated.warning.is_none());
    assert_eq!(generated.summary.net_worth_inr, 250_000.0);
    assert!(!generated.document.bytes.is_empty());

    let saved = repository.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].metadata.source, "test-suite");
    assert_eq!(saved[0].metadata.schema_version, "1.0");
    assert_eq!(saved[0].document.as_ref(), Some(&generated.document));
}

#[tokio::test]
async fn save_failure_still_returns_document() {
    let repository = Arc::new(MockRepository {
        fail_create: true,
        ..Default::default()
    });
    let generated = service(repository)
        .generate(ready_data(), Some("missing-person".to_string()))
        .await
        .unwrap();

    assert!(generated.certificate_id.is_none());
    let warning = generated.warning.unwrap();
    assert!(warning.starts_with("Document was generated but saving failed"));
    assert!(!generated.document.bytes.is_empty());
}

#[tokio::test]
async fn render_failure_is_an_error() {
    let repository = Arc::new(MockRepository::default());
    let service = CertificateService::new(repository.clone(), Arc::new(BrokenRenderer));
    let err = service
        .generate(ready_data(), Some("person-1".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Render(_)));
    assert!(repository.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn validation_problems_block_generation() {
    let mut data = ready_data();
    data.embassy_name.clear();
    let err = service(Arc::new(MockRepository::default()))
        .generate(data, None)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Embassy name is required"));
    assert!(message.contains("Select or create a client"));
}

#[tokio::test]
async fn lookups_map_missing_rows_to_not_found() {
    let service = service(Arc::new(MockRepository::default()));

    assert_eq!(service.get_snapshot("cert-1").unwrap(), "{}");
    assert!(matches!(service.get_snapshot("nope"), Err(Error::NotFound(_))));
    assert!(matches!(service.get_certificate("nope"), Err(Error::NotFound(_))));
    assert!(matches!(service.get_document("nope"), Err(Error::NotFound(_))));
    assert!(service.list_certificates(None, 0, 0).is_err());
    assert!(service.list_certificates(None, 10, -1).is_err());
    assert!(service.list_certificates(None, 10, 0).unwrap().is_empty());

    service.delete_certificate("cert-1".to_string()).await.unwrap();
    assert!(matches!(
        service.delete_certificate("nope".to_string()).await,
        Err(Error::NotFound(_))
    ));
}
