//! Exchange-rate provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RateTable;

/// Trait for exchange-rate providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use networth_market_data::{ExchangeRateProvider, MarketDataError, RateTable};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl ExchangeRateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn latest_rates(&self, base: &str) -> Result<RateTable, MarketDataError> {
///         Ok(RateTable::new(base, Default::default(), self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and warnings.
    fn id(&self) -> &'static str;

    /// Fetch the latest table of rates quoted against `base_currency`.
    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, MarketDataError>;
}
