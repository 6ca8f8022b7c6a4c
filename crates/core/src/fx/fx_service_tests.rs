use super::*;
use crate::errors::Error;
use async_trait::async_trait;
use networth_market_data::{ExchangeRateProvider, MarketDataError, RateTable};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

enum Behavior {
    Rates(Vec<(&'static str, f64)>),
    Fail,
    Hang,
}

struct MockProvider {
    behavior: Behavior,
}

#[async_trait]
impl ExchangeRateProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, MarketDataError> {
        match &self.behavior {
            Behavior::Rates(pairs) => {
                let rates: HashMap<String, f64> = pairs
                    .iter()
                    .map(|(code, rate)| (code.to_string(), *rate))
                    .collect();
                Ok(RateTable::new(base_currency, rates, "MOCK"))
            }
            Behavior::Fail => Err(MarketDataError::ProviderError {
                provider: "MOCK".to_string(),
                message: "HTTP 503".to_string(),
            }),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(MarketDataError::Timeout {
                    provider: "MOCK".to_string(),
                })
            }
        }
    }
}

fn service(behavior: Behavior) -> FxService {
    FxService::new(Arc::new(MockProvider { behavior }))
}

#[tokio::test]
async fn fetch_rate_inverts_and_rounds() {
    // 1 INR = 0.0158 CAD  =>  1 CAD = 63.291... INR
    let fx = service(Behavior::Rates(vec![("INR", 1.0), ("CAD", 0.0158)]));
    let rate = fx.fetch_rate(ForeignCurrency::Cad).await.unwrap();
    assert_eq!(rate, 63.29);
}

#[tokio::test]
async fn fetch_rate_missing_currency_is_error() {
    let fx = service(Behavior::Rates(vec![("INR", 1.0), ("USD", 0.012)]));
    let err = fx.fetch_rate(ForeignCurrency::Cad).await.unwrap_err();
    assert!(matches!(err, Error::Fx(FxError::CurrencyNotFound(code)) if code == "CAD"));
}

#[tokio::test]
async fn refresh_rate_uses_provider_when_available() {
    let fx = service(Behavior::Rates(vec![("USD", 0.012)]));
    let refresh = fx.refresh_rate(ForeignCurrency::Usd, 63.34).await;

    assert_eq!(refresh.source, RateSource::Provider);
    assert_eq!(refresh.rate, 83.33);
    assert!(refresh.warning.is_none());
    assert!(refresh.fetched_at.is_some());
}

#[tokio::test]
async fn refresh_rate_falls_back_on_provider_error() {
    let fx = service(Behavior::Fail);
    let refresh = fx.refresh_rate(ForeignCurrency::Cad, 63.34).await;

    assert!(refresh.is_fallback());
    assert_eq!(refresh.rate, 63.34);
    let warning = refresh.warning.unwrap();
    assert!(warning.contains("CAD"));
    assert!(warning.contains("63.34"));
}

#[tokio::test]
async fn refresh_rate_falls_back_on_zero_quote() {
    let fx = service(Behavior::Rates(vec![("EUR", 0.0)]));
    let refresh = fx.refresh_rate(ForeignCurrency::Eur, 90.0).await;

    assert!(refresh.is_fallback());
    assert_eq!(refresh.rate, 90.0);
}

#[tokio::test(start_paused = true)]
async fn refresh_rate_falls_back_after_timeout() {
    let fx = service(Behavior::Hang).with_timeout(Duration::from_millis(500));
    let refresh = fx.refresh_rate(ForeignCurrency::Gbp, 105.5).await;

    assert!(refresh.is_fallback());
    assert_eq!(refresh.rate, 105.5);
    assert!(refresh.warning.unwrap().contains("500 ms"));
}
