//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `rate_table` - A provider's snapshot of rates against one base currency

mod rate_table;
mod types;

pub use rate_table::RateTable;
pub use types::{Currency, ProviderId};
