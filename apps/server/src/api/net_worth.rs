use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::DocumentPayload;
use crate::{error::ApiResult, main_lib::AppState};
use networth_core::{
    certificates::{validate_for_generation, NetWorthData, NetWorthSummary, Partner},
    constants::HOME_CURRENCY,
    fx::ForeignCurrency,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrenciesResponse {
    home_currency: &'static str,
    default_currency: ForeignCurrency,
    currencies: Vec<ForeignCurrency>,
}

async fn get_currencies() -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        home_currency: HOME_CURRENCY,
        default_currency: ForeignCurrency::default(),
        currencies: ForeignCurrency::ALL.to_vec(),
    })
}

async fn get_partners() -> Json<Vec<Partner>> {
    Json(Partner::all())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectPartnerRequest {
    data: NetWorthData,
    signer_name: String,
}

/// Returns `data` signed by the chosen partner.
async fn select_partner(
    Json(request): Json<SelectPartnerRequest>,
) -> ApiResult<Json<NetWorthData>> {
    let mut data = request.data;
    data.preparer.select_partner(&request.signer_name)?;
    Ok(Json(data))
}

/// Defaults for a fresh form session.
async fn new_net_worth(State(state): State<Arc<AppState>>) -> Json<NetWorthData> {
    let mut data = NetWorthData::new_for_today();
    data.exchange_rate = state.default_exchange_rate;
    Json(data)
}

async fn summarize(Json(data): Json<NetWorthData>) -> ApiResult<Json<NetWorthSummary>> {
    Ok(Json(data.summary()?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateRequest {
    data: NetWorthData,
    #[serde(default)]
    person_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    ready: bool,
    problems: Vec<String>,
}

async fn validate(Json(request): Json<ValidateRequest>) -> Json<ValidateResponse> {
    let problems = validate_for_generation(&request.data, request.person_id.is_some());
    Json(ValidateResponse {
        ready: problems.is_empty(),
        problems,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResponse {
    summary: NetWorthSummary,
    document: DocumentPayload,
}

/// Preview rendering; nothing is stored.
async fn render(
    State(state): State<Arc<AppState>>,
    Json(data): Json<NetWorthData>,
) -> ApiResult<Json<RenderResponse>> {
    let summary = data.summary()?;
    let document = state.renderer.render(&data, &summary)?;
    Ok(Json(RenderResponse {
        document: DocumentPayload::from(&document),
        summary,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(get_currencies))
        .route("/partners", get(get_partners))
        .route("/net-worth/new", post(new_net_worth))
        .route("/net-worth/summary", post(summarize))
        .route("/net-worth/validate", post(validate))
        .route("/net-worth/render", post(render))
        .route("/net-worth/partner", post(select_partner))
}
