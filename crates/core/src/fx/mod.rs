//! FX (Foreign Exchange) module - currencies, conversion, and rate refresh.

pub mod currency;
pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

#[cfg(test)]
mod fx_service_tests;

pub use currency::ForeignCurrency;
pub use currency_converter::{round_to_display, to_foreign, CurrencyConverter};
pub use fx_errors::FxError;
pub use fx_model::{RateRefresh, RateSource};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
