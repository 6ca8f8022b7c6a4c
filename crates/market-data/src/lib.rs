//! Net Worth Market Data Crate
//!
//! Provider-agnostic exchange-rate fetching for the certificate application.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +----------------------+
//! |   FX service     | --> | ExchangeRateProvider |  (trait)
//! +------------------+     +----------------------+
//!                                  |
//!                                  v
//!                       +-------------------------+
//!                       | ExchangeRateApiProvider |  (HTTP)
//!                       +-------------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    RateTable     |  (code -> rate)
//!                          +------------------+
//! ```
//!
//! Providers return rates quoted as "foreign units per 1 base unit", exactly
//! as public rate services publish them. [`RateTable::base_units_per`] inverts
//! a quote into "base units per 1 foreign unit", which is how certificates
//! state their exchange rate.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Currency, ProviderId, RateTable};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::ExchangeRateProvider;
