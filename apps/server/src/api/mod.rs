mod certificates;
mod exchange_rates;
mod net_worth;
mod persons;

use std::sync::Arc;

use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Router};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};
use networth_core::document::RenderedDocument;

pub async fn healthz() -> &'static str {
    "ok"
}

/// A rendered document inlined in a JSON response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
    pub content_base64: String,
}

impl From<&RenderedDocument> for DocumentPayload {
    fn from(doc: &RenderedDocument) -> Self {
        Self {
            file_name: doc.file_name.clone(),
            mime_type: doc.mime_type.clone(),
            size: doc.bytes.len(),
            content_base64: BASE64.encode(&doc.bytes),
        }
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin {}", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(net_worth::router())
        .merge(exchange_rates::router())
        .merge(persons::router())
        .merge(certificates::router());

    Ok(Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
