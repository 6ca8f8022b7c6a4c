//! Database models for certificates and their category rows.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use networth_core::certificates::{
    BankAccount, CertificateSummary, Deposit, GoldHolding, Individual, InsurancePolicy, Liability,
    MutualFund, NpsAccount, PartnershipFirm, PfAccount, PostOfficeScheme, Property, ShareLot,
    Vehicle,
};
use networth_core::fx::ForeignCurrency;

use crate::errors::StorageError;

/// Parent row written once per generated certificate.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::certificates)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewCertificateDB {
    pub id: String,
    pub person_id: Option<String>,
    pub display_name: String,
    pub certificate_date: NaiveDate,
    pub engagement_date: NaiveDate,
    pub embassy_name: String,
    pub embassy_address: String,
    pub foreign_currency: String,
    pub exchange_rate: f64,
    pub category_notes: String,
    pub firm_name: String,
    pub firm_registration_no: String,
    pub signer_name: String,
    pub membership_no: String,
    pub designation: String,
    pub place: String,
    pub total_movable_assets_inr: f64,
    pub total_immovable_assets_inr: f64,
    pub total_liabilities_inr: f64,
    pub net_worth_inr: f64,
    pub net_worth_foreign: f64,
    pub data_snapshot: String,
    pub metadata_json: String,
    pub document_file_name: Option<String>,
    pub document_mime_type: Option<String>,
    pub document_file_size: Option<i32>,
    pub document_bytes: Option<Vec<u8>>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Parent row without the snapshot and document payload.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::certificates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CertificateDB {
    pub id: String,
    pub person_id: Option<String>,
    pub display_name: String,
    pub certificate_date: NaiveDate,
    pub engagement_date: NaiveDate,
    pub embassy_name: String,
    pub embassy_address: String,
    pub foreign_currency: String,
    pub exchange_rate: f64,
    pub category_notes: String,
    pub firm_name: String,
    pub firm_registration_no: String,
    pub signer_name: String,
    pub membership_no: String,
    pub designation: String,
    pub place: String,
    pub total_movable_assets_inr: f64,
    pub total_immovable_assets_inr: f64,
    pub total_liabilities_inr: f64,
    pub net_worth_inr: f64,
    pub net_worth_foreign: f64,
    pub metadata_json: String,
    pub document_file_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<&CertificateDB> for CertificateSummary {
    type Error = StorageError;

    fn try_from(db: &CertificateDB) -> Result<Self, StorageError> {
        Ok(Self {
            id: db.id.clone(),
            person_id: db.person_id.clone(),
            display_name: db.display_name.clone(),
            certificate_date: db.certificate_date,
            foreign_currency: parse_currency(&db.foreign_currency)?,
            exchange_rate: db.exchange_rate,
            total_movable_assets_inr: db.total_movable_assets_inr,
            total_immovable_assets_inr: db.total_immovable_assets_inr,
            total_liabilities_inr: db.total_liabilities_inr,
            net_worth_inr: db.net_worth_inr,
            net_worth_foreign: db.net_worth_foreign,
            has_document: db.document_file_name.is_some(),
            created_at: db.created_at,
        })
    }
}

pub(crate) fn parse_currency(code: &str) -> Result<ForeignCurrency, StorageError> {
    code.parse::<ForeignCurrency>()
        .map_err(|e| StorageError::InvalidRow(e.to_string()))
}

/// Stored document columns.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::certificates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentDB {
    pub document_file_name: Option<String>,
    pub document_mime_type: Option<String>,
    pub document_bytes: Option<Vec<u8>>,
}

/// A row in one of the per-category child tables.
///
/// `position` is the record's index in its list; rows are read back ordered by it.
pub trait ChildRow: Sized {
    type Record;

    fn from_record(
        certificate_id: &str,
        position: i32,
        record: &Self::Record,
    ) -> Result<Self, StorageError>;

    fn into_record(self) -> Result<Self::Record, StorageError>;
}

/// Child rows whose columns mirror the record's fields one to one.
macro_rules! child_row {
    ($row:ident, $table:ident, $record:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
        #[diesel(table_name = crate::schema::$table)]
        #[diesel(check_for_backend(diesel::sqlite::Sqlite))]
        #[diesel(treat_none_as_default_value = false)]
        pub struct $row {
            pub certificate_id: String,
            pub position: i32,
            $(pub $field: $ty,)*
        }

        impl ChildRow for $row {
            type Record = $record;

            fn from_record(
                certificate_id: &str,
                position: i32,
                record: &$record,
            ) -> Result<Self, StorageError> {
                Ok(Self {
                    certificate_id: certificate_id.to_string(),
                    position,
                    $($field: record.$field.clone(),)*
                })
            }

            fn into_record(self) -> Result<$record, StorageError> {
                Ok($record {
                    $($field: self.$field,)*
                })
            }
        }
    };
}

child_row!(IndividualDB, certificate_individuals, Individual {
    full_name: String,
    passport_number: Option<String>,
    address: Option<String>,
});

child_row!(BankAccountDB, bank_accounts, BankAccount {
    holder_name: String,
    account_number: String,
    bank_name: String,
    balance_inr: f64,
    statement_date: Option<NaiveDate>,
});

child_row!(InsurancePolicyDB, insurance_policies, InsurancePolicy {
    holder_name: String,
    policy_number: String,
    amount_inr: f64,
});

child_row!(PfAccountDB, pf_accounts, PfAccount {
    holder_name: String,
    pf_account_number: String,
    amount_inr: f64,
});

child_row!(DepositDB, deposits, Deposit {
    holder_name: String,
    account_number: String,
    amount_inr: f64,
});

child_row!(NpsAccountDB, nps_accounts, NpsAccount {
    owner_name: String,
    pran_number: String,
    amount_inr: f64,
});

child_row!(MutualFundDB, mutual_funds, MutualFund {
    holder_name: String,
    folio_number: String,
    scheme_name: String,
    amount_inr: f64,
});

child_row!(VehicleDB, vehicles, Vehicle {
    vehicle_type: String,
    make_model_year: String,
    registration_number: String,
    market_value_inr: f64,
});

child_row!(PostOfficeSchemeDB, post_office_schemes, PostOfficeScheme {
    scheme_type: String,
    account_number: String,
    amount_inr: f64,
});

child_row!(PartnershipFirmDB, partnership_firms, PartnershipFirm {
    firm_name: String,
    partner_name: String,
    holding_percentage: f64,
    capital_balance_inr: f64,
    valuation_date: Option<NaiveDate>,
});

child_row!(GoldHoldingDB, gold_holdings, GoldHolding {
    owner_name: String,
    weight_grams: f64,
    rate_per_10g: f64,
    valuation_date: Option<NaiveDate>,
    valuer_name: Option<String>,
});

child_row!(PropertyDB, properties, Property {
    owner_name: String,
    property_type: String,
    address: String,
    valuation_inr: f64,
    valuation_date: Option<NaiveDate>,
    valuer_name: Option<String>,
});

child_row!(LiabilityDB, liabilities, Liability {
    description: String,
    amount_inr: f64,
    details: Option<String>,
});

/// Share lots store their quantity as a signed SQLite integer.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::shares)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShareLotDB {
    pub certificate_id: String,
    pub position: i32,
    pub company_name: String,
    pub quantity: i64,
    pub market_price_inr: f64,
}

impl ChildRow for ShareLotDB {
    type Record = ShareLot;

    fn from_record(
        certificate_id: &str,
        position: i32,
        record: &ShareLot,
    ) -> Result<Self, StorageError> {
        let quantity = i64::try_from(record.quantity).map_err(|_| {
            StorageError::InvalidRow(format!(
                "share quantity {} for {} is too large to store",
                record.quantity, record.company_name
            ))
        })?;
        Ok(Self {
            certificate_id: certificate_id.to_string(),
            position,
            company_name: record.company_name.clone(),
            quantity,
            market_price_inr: record.market_price_inr,
        })
    }

    fn into_record(self) -> Result<ShareLot, StorageError> {
        let quantity = u64::try_from(self.quantity).map_err(|_| {
            StorageError::InvalidRow(format!(
                "negative share quantity {} stored for {}",
                self.quantity, self.company_name
            ))
        })?;
        Ok(ShareLot {
            company_name: self.company_name,
            quantity,
            market_price_inr: self.market_price_inr,
        })
    }
}
