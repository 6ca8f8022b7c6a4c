use super::currency::ForeignCurrency;
use super::fx_model::RateRefresh;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Fetch home-currency units per 1 unit of `currency`, rounded to two places.
    async fn fetch_rate(&self, currency: ForeignCurrency) -> Result<f64>;

    /// Like `fetch_rate`, but any failure degrades to `fallback_rate` with a
    /// warning instead of an error.
    async fn refresh_rate(&self, currency: ForeignCurrency, fallback_rate: f64) -> RateRefresh;
}
