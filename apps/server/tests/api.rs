use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use networth_core::certificates::{BankAccount, Individual, Liability, NetWorthData};
use networth_core::document::DOCX_MIME_TYPE;
use networth_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
};

struct TestApp {
    _dir: TempDir,
    router: Router,
}

async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        // Nothing listens here, so every rate lookup falls back.
        rate_api_url: "http://127.0.0.1:9/latest".to_string(),
        rate_timeout: Duration::from_millis(500),
        default_exchange_rate: 63.34,
        log_format: LogFormat::Text,
    };
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config).unwrap(),
        _dir: dir,
    }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

fn ready_data() -> NetWorthData {
    let mut data = NetWorthData::new_for_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    data.embassy_name = "High Commission of Canada".to_string();
    data.individuals = vec![Individual {
        full_name: "Asha Rao".to_string(),
        passport_number: Some("Z1234567".to_string()),
        address: Some("12 MG Road, Pune".to_string()),
    }];
    data.add_record(BankAccount {
        holder_name: "Asha Rao".to_string(),
        account_number: "001".to_string(),
        bank_name: "State Bank".to_string(),
        balance_inr: 550_000.0,
        statement_date: None,
    });
    data.add_record(Liability {
        description: "Car loan".to_string(),
        amount_inr: 50_000.0,
        details: None,
    });
    data
}

#[tokio::test]
async fn healthz_works() {
    let app = test_app().await;
    let (status, body) = app.send(Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn currencies_lists_the_supported_set() {
    let app = test_app().await;
    let (status, body) = app.json(Method::GET, "/api/v1/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["homeCurrency"], "INR");
    assert_eq!(body["defaultCurrency"], "CAD");
    assert_eq!(body["currencies"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn new_session_uses_configured_defaults() {
    let app = test_app().await;
    let (status, body) = app.json(Method::POST, "/api/v1/net-worth/new", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exchangeRate"], 63.34);
    assert_eq!(body["foreignCurrency"], "CAD");
    assert_eq!(body["individuals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn summary_computes_totals_for_posted_data() {
    let app = test_app().await;
    let data = serde_json::to_value(ready_data()).unwrap();
    let (status, body) = app
        .json(Method::POST, "/api/v1/net-worth/summary", Some(data))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMovableAssetsInr"], 550_000.0);
    assert_eq!(body["totalLiabilitiesInr"], 50_000.0);
    assert_eq!(body["netWorthInr"], 500_000.0);
}

#[tokio::test]
async fn negative_rate_is_unprocessable() {
    let app = test_app().await;
    let mut data = ready_data();
    data.exchange_rate = -1.0;
    let (status, body) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/summary",
            Some(serde_json::to_value(data).unwrap()),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn validate_reports_problems() {
    let app = test_app().await;
    let empty = NetWorthData::new_for_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    let (status, body) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/validate",
            Some(json!({ "data": empty })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], false);
    let problems: Vec<String> = serde_json::from_value(body["problems"].clone()).unwrap();
    assert!(problems.contains(&"Embassy name is required".to_string()));
    assert!(problems.contains(&"Select or create a client before generating".to_string()));

    let (_, body) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/validate",
            Some(json!({ "data": ready_data(), "personId": "p1" })),
        )
        .await;
    assert_eq!(body["ready"], true);
}

#[tokio::test]
async fn render_returns_a_word_document() {
    let app = test_app().await;
    let (status, body) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/render",
            Some(serde_json::to_value(ready_data()).unwrap()),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["document"]["fileName"],
        "NetWorth_Certificate_Asha_Rao_20250115.docx"
    );
    assert_eq!(body["document"]["mimeType"], DOCX_MIME_TYPE);
    assert!(body["document"]["size"].as_u64().unwrap() > 0);
    assert_eq!(body["summary"]["netWorthInr"], 500_000.0);
}

#[tokio::test]
async fn unreachable_rate_provider_falls_back() {
    let app = test_app().await;
    let (status, body) = app
        .json(Method::GET, "/api/v1/exchange-rates/usd?fallback=83.5", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["rate"], 83.5);
    assert_eq!(body["source"], "FALLBACK");
    assert!(body["warning"].as_str().unwrap().contains("83.50"));

    let (_, body) = app
        .json(Method::GET, "/api/v1/exchange-rates/cad", None)
        .await;
    assert_eq!(body["rate"], 63.34);
}

#[tokio::test]
async fn bad_rate_requests_are_rejected() {
    let app = test_app().await;
    let (status, _) = app
        .json(Method::GET, "/api/v1/exchange-rates/INR", None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .json(Method::GET, "/api/v1/exchange-rates/cad?fallback=-2", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn persons_can_be_created_and_listed() {
    let app = test_app().await;
    let (status, created) = app
        .json(
            Method::POST,
            "/api/v1/persons",
            Some(json!({ "displayName": "  Asha Rao ", "email": "asha@example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["displayName"], "Asha Rao");

    let (_, listed) = app.json(Method::GET, "/api/v1/persons", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = app
        .json(Method::GET, &format!("/api/v1/persons/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);

    let (status, _) = app
        .json(Method::POST, "/api/v1/persons", Some(json!({ "displayName": " " })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn certificate_lifecycle() {
    let app = test_app().await;
    let (_, person) = app
        .json(
            Method::POST,
            "/api/v1/persons",
            Some(json!({ "displayName": "Asha Rao" })),
        )
        .await;
    let person_id = person["id"].as_str().unwrap().to_string();

    let (status, generated) = app
        .json(
            Method::POST,
            "/api/v1/certificates",
            Some(json!({ "data": ready_data(), "personId": person_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(generated["warning"].is_null());
    let id = generated["certificateId"].as_str().unwrap().to_string();

    let (_, listed) = app
        .json(
            Method::GET,
            &format!("/api/v1/certificates?personId={}&limit=5", person_id),
            None,
        )
        .await;
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["netWorthInr"], 500_000.0);
    assert_eq!(listed[0]["hasDocument"], true);

    let (status, detail) = app
        .json(Method::GET, &format!("/api/v1/certificates/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"]["bankAccounts"][0]["balanceInr"], 550_000.0);

    let (status, docx) = app
        .send(
            Method::GET,
            &format!("/api/v1/certificates/{}/document", id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(docx.starts_with(b"PK"));

    let (_, page) = app
        .json(
            Method::GET,
            &format!("/api/v1/certificates?personId={}&limit=5&offset=1", person_id),
            None,
        )
        .await;
    assert!(page.as_array().unwrap().is_empty());

    let (status, snapshot) = app
        .json(
            Method::GET,
            &format!("/api/v1/certificates/{}/snapshot", id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["embassyName"], "High Commission of Canada");

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/v1/certificates/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(Method::GET, &format!("/api/v1/certificates/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_without_client_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = app
        .json(
            Method::POST,
            "/api/v1/certificates",
            Some(json!({ "data": ready_data() })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Select or create a client before generating"));
}

#[tokio::test]
async fn partners_can_be_listed_and_selected() {
    let app = test_app().await;
    let (status, partners) = app.json(Method::GET, "/api/v1/partners", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(partners[1]["name"], "CA PRERIT PAREKH");
    assert_eq!(partners[1]["membershipNo"], "194438");

    let (status, data) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/partner",
            Some(json!({ "data": ready_data(), "signerName": "CA PRERIT PAREKH" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["preparer"]["membershipNo"], "194438");

    let (status, _) = app
        .json(
            Method::POST,
            "/api/v1/net-worth/partner",
            Some(json!({ "data": ready_data(), "signerName": "Nobody" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
