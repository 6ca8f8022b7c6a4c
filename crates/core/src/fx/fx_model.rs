use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::ForeignCurrency;

/// Where a refreshed rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSource {
    Provider,
    Fallback,
}

/// Outcome of a rate refresh. A fallback always carries a warning for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRefresh {
    pub currency: ForeignCurrency,
    /// Home-currency units per 1 foreign unit, rounded to two places when fetched
    pub rate: f64,
    pub source: RateSource,
    pub warning: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl RateRefresh {
    pub fn fetched(currency: ForeignCurrency, rate: f64, fetched_at: DateTime<Utc>) -> Self {
        Self {
            currency,
            rate,
            source: RateSource::Provider,
            warning: None,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn fallback(currency: ForeignCurrency, rate: f64, warning: String) -> Self {
        Self {
            currency,
            rate,
            source: RateSource::Fallback,
            warning: Some(warning),
            fetched_at: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RateSource::Fallback
    }
}
