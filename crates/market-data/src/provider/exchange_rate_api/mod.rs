//! ExchangeRate-API provider.
//!
//! Fetches `GET {base_url}/{BASE}` and expects a body of the form
//! `{"base": "INR", "rates": {"CAD": 0.0158, ...}}`. No API key is required
//! for the public v4 endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::RateTable;
use crate::provider::ExchangeRateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Public endpoint; the base currency code is appended as a path segment.
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// API response from ExchangeRate-API
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Base currency echoed by the service
    #[serde(default)]
    base: Option<String>,
    /// Foreign units per 1 base unit
    rates: HashMap<String, f64>,
}

/// ExchangeRate-API provider.
///
/// # Example
///
/// ```ignore
/// use networth_market_data::ExchangeRateApiProvider;
///
/// let provider = ExchangeRateApiProvider::new();
/// let table = provider.latest_rates("INR").await?;
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRateApiProvider {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BASE_URL, REQUEST_TIMEOUT)
    }

    /// Create a provider against a custom endpoint (mirrors, test servers).
    pub fn with_config(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, base_currency: &str) -> String {
        format!("{}/{}", self.base_url, base_currency.to_uppercase())
    }

    /// Parse a response body into a rate table.
    pub(crate) fn parse_body(
        base_currency: &str,
        body: &str,
    ) -> Result<RateTable, MarketDataError> {
        let parsed: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Malformed response: {}", e),
            })?;

        let base = parsed.base.unwrap_or_else(|| base_currency.to_string());
        if !base.eq_ignore_ascii_case(base_currency) {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Expected base {}, got {}", base_currency, base),
            });
        }

        Ok(RateTable::new(base, parsed.rates, PROVIDER_ID))
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, MarketDataError> {
        let url = self.url_for(base_currency);
        tracing::debug!("Fetching exchange rates from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().await?;
        Self::parse_body(base_currency, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        let body = r#"{
            "provider": "https://www.exchangerate-api.com",
            "base": "INR",
            "date": "2025-01-19",
            "rates": {"INR": 1, "CAD": 0.01579, "USD": 0.01156}
        }"#;
        let table = ExchangeRateApiProvider::parse_body("INR", body).unwrap();
        assert_eq!(table.base, "INR");
        assert_eq!(table.source, PROVIDER_ID);
        assert_eq!(table.rates.len(), 3);
        assert!((table.quote("CAD").unwrap() - 0.01579).abs() < 1e-12);
    }

    #[test]
    fn test_parse_body_without_base_uses_requested() {
        let body = r#"{"rates":{"GBP":0.0093}}"#;
        let table = ExchangeRateApiProvider::parse_body("INR", body).unwrap();
        assert_eq!(table.base, "INR");
    }

    #[test]
    fn test_parse_body_base_mismatch() {
        let body = r#"{"base":"USD","rates":{"CAD":1.36}}"#;
        let err = ExchangeRateApiProvider::parse_body("INR", body).unwrap_err();
        assert!(matches!(err, MarketDataError::ProviderError { .. }));
    }

    #[test]
    fn test_parse_body_malformed() {
        let err = ExchangeRateApiProvider::parse_body("INR", "<html>busy</html>").unwrap_err();
        match err {
            MarketDataError::ProviderError { provider, message } => {
                assert_eq!(provider, PROVIDER_ID);
                assert!(message.starts_with("Malformed response"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_url_for_trims_and_uppercases() {
        let provider =
            ExchangeRateApiProvider::with_config("http://localhost:9/v4/latest/", REQUEST_TIMEOUT);
        assert_eq!(provider.url_for("inr"), "http://localhost:9/v4/latest/INR");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let provider = ExchangeRateApiProvider::with_config(
            "http://127.0.0.1:9/v4/latest",
            Duration::from_millis(500),
        );
        assert!(provider.latest_rates("INR").await.is_err());
    }
}
