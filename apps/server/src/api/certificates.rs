use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::DocumentPayload;
use crate::{error::ApiResult, main_lib::AppState};
use networth_core::certificates::{
    CertificateDetail, CertificateSummary, NetWorthData, NetWorthSummary,
};

const DEFAULT_LIST_LIMIT: i64 = 20;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    data: NetWorthData,
    #[serde(default)]
    person_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    certificate_id: Option<String>,
    warning: Option<String>,
    summary: NetWorthSummary,
    document: DocumentPayload,
}

/// Renders and stores a certificate. A failed save still returns the document.
async fn generate_certificate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let generated = state
        .certificate_service
        .generate(request.data, request.person_id)
        .await?;
    if let Some(warning) = &generated.warning {
        tracing::warn!("{}", warning);
    }

    Ok(Json(GenerateResponse {
        document: DocumentPayload::from(&generated.document),
        certificate_id: generated.certificate_id,
        warning: generated.warning,
        summary: generated.summary,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    person_id: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

async fn list_certificates(
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CertificateSummary>>> {
    let certificates = state.certificate_service.list_certificates(
        query.person_id.as_deref(),
        query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        query.offset.unwrap_or(0),
    )?;
    Ok(Json(certificates))
}

async fn get_certificate(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CertificateDetail>> {
    let certificate = state.certificate_service.get_certificate(&id)?;
    Ok(Json(certificate))
}

async fn delete_certificate(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.certificate_service.delete_certificate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stored document bytes, served as a download.
async fn get_document(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let document = state.certificate_service.get_document(&id)?;
    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, document.mime_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}

/// The JSON snapshot exactly as it was stored.
async fn get_snapshot(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let snapshot = state.certificate_service.get_snapshot(&id)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/certificates",
            get(list_certificates).post(generate_certificate),
        )
        .route(
            "/certificates/{id}",
            get(get_certificate).delete(delete_certificate),
        )
        .route("/certificates/{id}/document", get(get_document))
        .route("/certificates/{id}/snapshot", get(get_snapshot))
}
