//! Supported foreign currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Currency a certificate reports totals in, alongside the home currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ForeignCurrency {
    #[default]
    Cad,
    Usd,
    Eur,
    Gbp,
    Aud,
    Jpy,
    Chf,
    Nzd,
    Sgd,
    Hkd,
}

impl ForeignCurrency {
    pub const ALL: [ForeignCurrency; 10] = [
        ForeignCurrency::Cad,
        ForeignCurrency::Usd,
        ForeignCurrency::Eur,
        ForeignCurrency::Gbp,
        ForeignCurrency::Aud,
        ForeignCurrency::Jpy,
        ForeignCurrency::Chf,
        ForeignCurrency::Nzd,
        ForeignCurrency::Sgd,
        ForeignCurrency::Hkd,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            ForeignCurrency::Cad => "CAD",
            ForeignCurrency::Usd => "USD",
            ForeignCurrency::Eur => "EUR",
            ForeignCurrency::Gbp => "GBP",
            ForeignCurrency::Aud => "AUD",
            ForeignCurrency::Jpy => "JPY",
            ForeignCurrency::Chf => "CHF",
            ForeignCurrency::Nzd => "NZD",
            ForeignCurrency::Sgd => "SGD",
            ForeignCurrency::Hkd => "HKD",
        }
    }
}

impl fmt::Display for ForeignCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ForeignCurrency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ForeignCurrency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedCurrency(wanted.to_string()))
    }
}
