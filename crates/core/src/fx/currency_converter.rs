use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Converts a home-currency amount at `rate` home units per foreign unit.
///
/// A zero rate is a reachable state before the first fetch completes, so it
/// yields zero instead of an infinity.
pub fn to_foreign(amount_inr: f64, rate: f64) -> f64 {
    if rate == 0.0 {
        return 0.0;
    }
    amount_inr / rate
}

/// Rounds half away from zero to two places, on the shortest decimal form of
/// the value rather than its binary expansion (so 2.675 becomes 2.68).
pub fn round_to_display(value: f64) -> f64 {
    match value.to_string().parse::<Decimal>().ok() {
        Some(d) => d
            .round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .to_f64()
            .unwrap_or(value),
        None => value,
    }
}

/// A validated exchange rate. Construction is the single place where the rate
/// invariant is checked before any foreign figure is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyConverter {
    rate: f64,
}

impl CurrencyConverter {
    /// Accepts any finite, non-negative rate. Zero is allowed and converts
    /// everything to zero.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() {
            return Err(Error::InvalidExchangeRate(format!(
                "rate must be a finite number, got {}",
                rate
            )));
        }
        if rate < 0.0 {
            return Err(Error::InvalidExchangeRate(format!(
                "rate must not be negative, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn to_foreign(&self, amount_inr: f64) -> f64 {
        to_foreign(amount_inr, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_foreign_divides() {
        assert_eq!(to_foreign(100_000.0, 63.34), 100_000.0 / 63.34);
        assert_eq!(to_foreign(0.0, 63.34), 0.0);
    }

    #[test]
    fn test_to_foreign_zero_rate_is_zero() {
        assert_eq!(to_foreign(550_000.0, 0.0), 0.0);
        assert_eq!(to_foreign(-1.0, 0.0), 0.0);
    }

    #[test]
    fn test_converter_rejects_negative_and_nan() {
        assert!(matches!(
            CurrencyConverter::new(-63.34),
            Err(Error::InvalidExchangeRate(_))
        ));
        assert!(CurrencyConverter::new(f64::NAN).is_err());
        assert!(CurrencyConverter::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_converter_accepts_zero() {
        let converter = CurrencyConverter::new(0.0).unwrap();
        assert_eq!(converter.to_foreign(1_000.0), 0.0);
    }

    #[test]
    fn test_round_to_display() {
        assert_eq!(round_to_display(63.336), 63.34);
        assert_eq!(round_to_display(2.675), 2.68);
        assert_eq!(round_to_display(-1.005), -1.01);
        assert_eq!(round_to_display(10.0), 10.0);
    }
}
