//! Descriptive columns of each category's itemized annexure table.

use crate::certificates::records::*;
use crate::document::formatting::{format_amount, format_date};

pub(crate) trait AnnexureColumns: CategoryRecord {
    /// Headers between the serial column and the amount columns.
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Liabilities are itemized in the home currency only.
    fn shows_foreign() -> bool {
        true
    }
}

fn or_blank(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl AnnexureColumns for BankAccount {
    fn headers() -> &'static [&'static str] {
        &["Name of the Account Holder", "Account No.", "Bank Name"]
    }

    fn cells(&self) -> Vec<String> {
        let mut bank = self.bank_name.clone();
        if let Some(date) = self.statement_date {
            bank = format!("{} (as on {})", bank, format_date(date));
        }
        vec![self.holder_name.clone(), self.account_number.clone(), bank]
    }
}

impl AnnexureColumns for InsurancePolicy {
    fn headers() -> &'static [&'static str] {
        &["Policy Holder", "Policy No."]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.holder_name.clone(), self.policy_number.clone()]
    }
}

impl AnnexureColumns for PfAccount {
    fn headers() -> &'static [&'static str] {
        &["Name of the Account Holder", "PF Account No."]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.holder_name.clone(), self.pf_account_number.clone()]
    }
}

impl AnnexureColumns for Deposit {
    fn headers() -> &'static [&'static str] {
        &["Name of Investment Holder", "A/C Number"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.holder_name.clone(), self.account_number.clone()]
    }
}

impl AnnexureColumns for NpsAccount {
    fn headers() -> &'static [&'static str] {
        &["Name of Owner", "PRAN No."]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.owner_name.clone(), self.pran_number.clone()]
    }
}

impl AnnexureColumns for MutualFund {
    fn headers() -> &'static [&'static str] {
        &["Name of the Account Holder", "Folio Number", "Scheme Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.holder_name.clone(),
            self.folio_number.clone(),
            self.scheme_name.clone(),
        ]
    }
}

impl AnnexureColumns for ShareLot {
    fn headers() -> &'static [&'static str] {
        &["Name of Company", "Quantity", "Market Price (Rs.)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.company_name.clone(),
            self.quantity.to_string(),
            format_amount(self.market_price_inr),
        ]
    }
}

impl AnnexureColumns for Vehicle {
    fn headers() -> &'static [&'static str] {
        &["Type of Vehicle", "Make / Model / Year", "Registration No."]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.vehicle_type.clone(),
            self.make_model_year.clone(),
            self.registration_number.clone(),
        ]
    }
}

impl AnnexureColumns for PostOfficeScheme {
    fn headers() -> &'static [&'static str] {
        &["Scheme Type", "Account No."]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.scheme_type.clone(), self.account_number.clone()]
    }
}

impl AnnexureColumns for PartnershipFirm {
    fn headers() -> &'static [&'static str] {
        &["Name of Firm", "Name of Partner", "Holding (%)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.firm_name.clone(),
            self.partner_name.clone(),
            format!("{}", self.holding_percentage),
        ]
    }
}

impl AnnexureColumns for GoldHolding {
    fn headers() -> &'static [&'static str] {
        &["Name of Party", "Weight (gram)", "Rate/10 g (Rs.)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.owner_name.clone(),
            format!("{}", self.weight_grams),
            format_amount(self.rate_per_10g),
        ]
    }
}

impl AnnexureColumns for Property {
    fn headers() -> &'static [&'static str] {
        &["Name of Owner", "Particulars of Property", "Valuer"]
    }

    fn cells(&self) -> Vec<String> {
        let particulars = if self.property_type.trim().is_empty() {
            self.address.clone()
        } else {
            format!("{}, {}", self.property_type, self.address)
        };
        let valuer = match (&self.valuer_name, self.valuation_date) {
            (Some(name), Some(date)) => format!("{} ({})", name, format_date(date)),
            (Some(name), None) => name.clone(),
            (None, Some(date)) => format_date(date),
            (None, None) => String::new(),
        };
        vec![self.owner_name.clone(), particulars, valuer]
    }
}

impl AnnexureColumns for Liability {
    fn headers() -> &'static [&'static str] {
        &["Description", "Details"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.description.clone(), or_blank(&self.details)]
    }

    fn shows_foreign() -> bool {
        false
    }
}
