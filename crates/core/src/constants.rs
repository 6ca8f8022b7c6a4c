/// Currency every raw amount is entered in.
pub const HOME_CURRENCY: &str = "INR";

/// Exchange rate (home units per foreign unit) used before the first fetch.
pub const DEFAULT_EXCHANGE_RATE: f64 = 63.34;

/// Foreign currency preselected for a fresh certificate.
pub const DEFAULT_FOREIGN_CURRENCY: &str = "CAD";

/// Display name used when a certificate has no named individuals.
pub const UNNAMED_INDIVIDUAL: &str = "Unnamed Individual";

/// Gold is quoted per this many grams.
pub const GOLD_RATE_UNIT_GRAMS: f64 = 10.0;

/// Decimal places for fetched exchange rates and displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Date format printed on certificates.
pub const CERTIFICATE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Snapshot schema version written next to every persisted certificate.
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0";

// Preparer identity pre-filled on new certificates.
pub const DEFAULT_FIRM_NAME: &str = "Patel Parekh & Associates";
pub const DEFAULT_FIRM_REGISTRATION_NO: &str = "154335W";
pub const DEFAULT_SIGNER_NAME: &str = "CA HARSH B PATEL";
pub const DEFAULT_MEMBERSHIP_NO: &str = "600794";
pub const DEFAULT_DESIGNATION: &str = "Partner";
pub const DEFAULT_PLACE: &str = "Vijapur";

/// Signing partners of the firm with their membership numbers.
pub const PARTNERS: &[(&str, &str)] = &[
    ("CA HARSH B PATEL", "600794"),
    ("CA PRERIT PAREKH", "194438"),
];
