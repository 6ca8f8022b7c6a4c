/// Provider identifier (e.g., "EXCHANGE_RATE_API")
pub type ProviderId = &'static str;

/// Currency code (ISO 4217)
pub type Currency = String;
