use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::Currency;
use crate::errors::MarketDataError;

/// Latest rates published by a provider against a single base currency.
///
/// `rates[code]` is the number of `code` units one base unit buys.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency the table is quoted against
    pub base: Currency,

    /// Foreign units per 1 base unit, keyed by currency code
    pub rates: HashMap<Currency, f64>,

    /// When the table was received
    pub fetched_at: DateTime<Utc>,

    /// Provider that produced the table
    pub source: String,
}

impl RateTable {
    pub fn new(base: impl Into<Currency>, rates: HashMap<Currency, f64>, source: &str) -> Self {
        Self {
            base: base.into(),
            rates,
            fetched_at: Utc::now(),
            source: source.to_string(),
        }
    }

    /// Raw quote for `currency` as published (foreign units per base unit).
    pub fn quote(&self, currency: &str) -> Result<f64, MarketDataError> {
        let rate = self
            .rates
            .get(currency)
            .copied()
            .ok_or_else(|| MarketDataError::CurrencyNotFound(currency.to_string()))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(MarketDataError::InvalidRate {
                currency: currency.to_string(),
                rate,
            });
        }
        Ok(rate)
    }

    /// Base units per 1 unit of `currency` (the inverted quote).
    pub fn base_units_per(&self, currency: &str) -> Result<f64, MarketDataError> {
        Ok(1.0 / self.quote(currency)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RateTable {
        let mut rates = HashMap::new();
        rates.insert("INR".to_string(), 1.0);
        rates.insert("CAD".to_string(), 0.016);
        rates.insert("USD".to_string(), 0.012);
        rates.insert("BAD".to_string(), 0.0);
        RateTable::new("INR", rates, "TEST")
    }

    #[test]
    fn test_base_units_per_inverts_quote() {
        let t = table();
        assert!((t.base_units_per("CAD").unwrap() - 62.5).abs() < 1e-9);
        assert!((t.base_units_per("USD").unwrap() - 1.0 / 0.012).abs() < 1e-9);
    }

    #[test]
    fn test_missing_currency() {
        let err = table().base_units_per("EUR").unwrap_err();
        assert!(matches!(err, MarketDataError::CurrencyNotFound(c) if c == "EUR"));
    }

    #[test]
    fn test_zero_quote_is_rejected() {
        let err = table().base_units_per("BAD").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidRate { .. }));
    }
}
