use thiserror::Error;

/// Failures while refreshing an exchange rate. All of them are recoverable:
/// the caller keeps its last known rate.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Rate provider {provider} did not answer within {timeout_ms} ms")]
    Timeout { provider: String, timeout_ms: u128 },

    #[error("Rate provider failed: {0}")]
    ProviderFailed(String),

    #[error("Currency {0} not found in exchange rates")]
    CurrencyNotFound(String),

    #[error("Provider returned an unusable rate: {0}")]
    InvalidRate(String),
}

impl From<networth_market_data::MarketDataError> for FxError {
    fn from(err: networth_market_data::MarketDataError) -> Self {
        use networth_market_data::MarketDataError;
        match err {
            MarketDataError::CurrencyNotFound(code) => FxError::CurrencyNotFound(code),
            MarketDataError::InvalidRate { currency, rate } => {
                FxError::InvalidRate(format!("{} = {}", currency, rate))
            }
            other => FxError::ProviderFailed(other.to_string()),
        }
    }
}
