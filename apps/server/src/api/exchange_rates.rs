use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use networth_core::fx::{ForeignCurrency, RateRefresh};

#[derive(Deserialize)]
struct RefreshQuery {
    fallback: Option<f64>,
}

/// Latest rate for `currency`, or the caller's fallback with a warning.
async fn refresh_exchange_rate(
    Path(currency): Path<String>,
    Query(query): Query<RefreshQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RateRefresh>> {
    let currency: ForeignCurrency = currency.parse()?;
    let fallback = query.fallback.unwrap_or(state.default_exchange_rate);
    if !fallback.is_finite() || fallback < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "fallback rate must be a non-negative number, got {}",
            fallback
        )));
    }

    let refresh = state.fx_service.refresh_rate(currency, fallback).await;
    if let Some(warning) = &refresh.warning {
        tracing::warn!("{}", warning);
    }
    Ok(Json(refresh))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange-rates/{currency}", get(refresh_exchange_rate))
}
