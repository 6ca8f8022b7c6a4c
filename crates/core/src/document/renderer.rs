use super::certificate_builder::build_certificate;
use super::docx::to_docx;
use super::document_model::{RenderedDocument, DOCX_MIME_TYPE};
use crate::certificates::{NetWorthData, NetWorthSummary};
use crate::constants::UNNAMED_INDIVIDUAL;
use crate::errors::{Error, Result};

/// Turns a populated certificate into a downloadable artifact.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, data: &NetWorthData, summary: &NetWorthSummary) -> Result<RenderedDocument>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxCertificateRenderer;

impl DocxCertificateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for DocxCertificateRenderer {
    fn render(&self, data: &NetWorthData, summary: &NetWorthSummary) -> Result<RenderedDocument> {
        if summary.exchange_rate != data.exchange_rate
            || summary.foreign_currency != data.foreign_currency
        {
            return Err(Error::Render(
                "summary was computed for a different currency or rate".to_string(),
            ));
        }

        let document = build_certificate(data, summary);
        Ok(RenderedDocument {
            bytes: to_docx(&document)?,
            file_name: certificate_file_name(data, "docx"),
            mime_type: DOCX_MIME_TYPE.to_string(),
        })
    }
}

/// `NetWorth_Certificate_<First_Name>_<YYYYMMDD>.<extension>`, named after the
/// first individual and dated with the certificate date. Only ASCII letters,
/// digits and `_-.` are kept so the name is safe in a Content-Disposition header.
pub fn certificate_file_name(data: &NetWorthData, extension: &str) -> String {
    let safe = data
        .individuals
        .first()
        .map(|i| ascii_file_stem(&i.full_name))
        .filter(|stem| stem.chars().any(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| ascii_file_stem(UNNAMED_INDIVIDUAL));

    format!(
        "NetWorth_Certificate_{}_{}.{}",
        safe,
        data.certificate_date.format("%Y%m%d"),
        extension
    )
}

fn ascii_file_stem(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}
