//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `ExchangeRateProvider` trait that all providers implement
//! - Concrete provider implementations
//!
//! Callers own timeout and fallback policy. Providers report failures as
//! `MarketDataError` and never substitute a default rate themselves.

mod traits;

pub mod exchange_rate_api;

pub use traits::ExchangeRateProvider;
