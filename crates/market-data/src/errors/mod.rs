//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not quote the requested currency.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// The provider quoted a zero, negative or non-finite rate.
    #[error("Invalid rate for {currency}: {rate}")]
    InvalidRate {
        /// Currency the rate was quoted for
        currency: String,
        /// The offending value
        rate: f64,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-success status, bad payload).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether a later manual refresh could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MarketDataError::Timeout { .. } | MarketDataError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        let timeout = MarketDataError::Timeout {
            provider: "EXCHANGE_RATE_API".to_string(),
        };
        assert!(timeout.is_transient());
        assert!(!MarketDataError::CurrencyNotFound("XYZ".to_string()).is_transient());
        assert!(!MarketDataError::InvalidRate {
            currency: "CAD".to_string(),
            rate: 0.0
        }
        .is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = MarketDataError::ProviderError {
            provider: "EXCHANGE_RATE_API".to_string(),
            message: "HTTP 503".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider error: EXCHANGE_RATE_API - HTTP 503"
        );
    }
}
