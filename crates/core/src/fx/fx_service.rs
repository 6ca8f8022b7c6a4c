use super::currency::ForeignCurrency;
use super::currency_converter::round_to_display;
use super::fx_errors::FxError;
use super::fx_model::RateRefresh;
use super::fx_traits::FxServiceTrait;
use crate::constants::HOME_CURRENCY;
use crate::errors::Result;
use async_trait::async_trait;
use networth_market_data::ExchangeRateProvider;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct FxService {
    provider: Arc<dyn ExchangeRateProvider>,
    timeout: Duration,
}

impl FxService {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            provider,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the overall deadline for one fetch, including body parsing.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch_unrounded(
        &self,
        currency: ForeignCurrency,
    ) -> std::result::Result<f64, FxError> {
        let fetch = self.provider.latest_rates(HOME_CURRENCY);
        let table = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| FxError::Timeout {
                provider: self.provider.id().to_string(),
                timeout_ms: self.timeout.as_millis(),
            })??;

        let per_unit = table.base_units_per(currency.code())?;
        if !per_unit.is_finite() || per_unit <= 0.0 {
            return Err(FxError::InvalidRate(format!(
                "{} per {} = {}",
                HOME_CURRENCY,
                currency.code(),
                per_unit
            )));
        }
        Ok(per_unit)
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn fetch_rate(&self, currency: ForeignCurrency) -> Result<f64> {
        let rate = round_to_display(self.fetch_unrounded(currency).await?);
        log::debug!(
            "Fetched {} rate from {}: {}",
            currency,
            self.provider.id(),
            rate
        );
        Ok(rate)
    }

    async fn refresh_rate(&self, currency: ForeignCurrency, fallback_rate: f64) -> RateRefresh {
        match self.fetch_unrounded(currency).await {
            Ok(rate) => RateRefresh::fetched(currency, round_to_display(rate), chrono::Utc::now()),
            Err(e) => {
                log::warn!(
                    "Exchange rate refresh for {} failed, keeping {}: {}",
                    currency,
                    fallback_rate,
                    e
                );
                RateRefresh::fallback(
                    currency,
                    fallback_rate,
                    format!(
                        "Could not fetch the latest {} rate ({}). Using {:.2}.",
                        currency, e, fallback_rate
                    ),
                )
            }
        }
    }
}
