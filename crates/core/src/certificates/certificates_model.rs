//! Certificate domain models.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::records::*;
use crate::constants::{
    DEFAULT_DESIGNATION, DEFAULT_EXCHANGE_RATE, DEFAULT_FIRM_NAME, DEFAULT_FIRM_REGISTRATION_NO,
    DEFAULT_MEMBERSHIP_NO, DEFAULT_PLACE, DEFAULT_SIGNER_NAME, PARTNERS, UNNAMED_INDIVIDUAL,
};
use crate::document::RenderedDocument;
use crate::errors::{CalculatorError, Result, ValidationError};
use crate::fx::ForeignCurrency;

/// A person covered by a certificate. Owned by the certificate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub full_name: String,
    #[serde(default)]
    pub passport_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Individual {
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Passport number, if present and not blank.
    pub fn passport(&self) -> Option<&str> {
        non_blank(self.passport_number.as_deref())
    }

    /// Address, if present and not blank.
    pub fn address_text(&self) -> Option<&str> {
        non_blank(self.address.as_deref())
    }

    /// "Name (Passport No.: X)", or just the name when there is no passport.
    pub fn name_with_passport(&self) -> String {
        match self.passport() {
            Some(passport) => format!("{} (Passport No.: {})", self.full_name.trim(), passport),
            None => self.full_name.trim().to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Identity of the practitioner attesting the certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparerDetails {
    pub firm_name: String,
    pub firm_registration_no: String,
    pub signer_name: String,
    pub membership_no: String,
    pub designation: String,
    pub place: String,
}

impl Default for PreparerDetails {
    fn default() -> Self {
        Self {
            firm_name: DEFAULT_FIRM_NAME.to_string(),
            firm_registration_no: DEFAULT_FIRM_REGISTRATION_NO.to_string(),
            signer_name: DEFAULT_SIGNER_NAME.to_string(),
            membership_no: DEFAULT_MEMBERSHIP_NO.to_string(),
            designation: DEFAULT_DESIGNATION.to_string(),
            place: DEFAULT_PLACE.to_string(),
        }
    }
}

impl PreparerDetails {
    /// Signs as `signer_name`, taking the membership number from the partner
    /// roster. Matching ignores case and surrounding whitespace.
    pub fn select_partner(&mut self, signer_name: &str) -> Result<()> {
        let partner = Partner::find(signer_name).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Unknown signing partner: {}",
                signer_name.trim()
            ))
        })?;
        self.signer_name = partner.name.to_string();
        self.membership_no = partner.membership_no.to_string();
        Ok(())
    }
}

/// A partner who may sign certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: &'static str,
    pub membership_no: &'static str,
}

impl Partner {
    pub fn all() -> Vec<Partner> {
        PARTNERS
            .iter()
            .map(|&(name, membership_no)| Partner {
                name,
                membership_no,
            })
            .collect()
    }

    pub fn find(name: &str) -> Option<Partner> {
        let wanted = name.trim();
        Self::all()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
    }
}

/// Free-text notes printed under a category's annexure table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryNotes(BTreeMap<Category, String>);

impl CategoryNotes {
    pub fn get(&self, category: Category) -> Option<&str> {
        non_blank(self.0.get(&category).map(String::as_str))
    }

    /// Sets the note for `category`; a blank note clears it.
    pub fn set(&mut self, category: Category, note: impl Into<String>) {
        let note = note.into();
        if note.trim().is_empty() {
            self.0.remove(&category);
        } else {
            self.0.insert(category, note);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.0.iter().map(|(c, n)| (*c, n.as_str()))
    }
}

/// The root aggregate: everything printed on one certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthData {
    pub certificate_date: NaiveDate,
    pub engagement_date: NaiveDate,
    #[serde(default)]
    pub embassy_name: String,
    #[serde(default)]
    pub embassy_address: String,
    pub foreign_currency: ForeignCurrency,
    /// Home-currency units per 1 foreign unit. Missing means not fetched yet,
    /// which reads as 0 and zeroes every foreign figure.
    #[serde(default)]
    pub exchange_rate: f64,
    #[serde(default)]
    pub individuals: Vec<Individual>,

    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(default)]
    pub insurance_policies: Vec<InsurancePolicy>,
    #[serde(default)]
    pub pf_accounts: Vec<PfAccount>,
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub nps_accounts: Vec<NpsAccount>,
    #[serde(default)]
    pub mutual_funds: Vec<MutualFund>,
    #[serde(default)]
    pub shares: Vec<ShareLot>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub post_office_schemes: Vec<PostOfficeScheme>,
    #[serde(default)]
    pub partnership_firms: Vec<PartnershipFirm>,
    #[serde(default)]
    pub gold_holdings: Vec<GoldHolding>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,

    #[serde(default)]
    pub notes: CategoryNotes,
    #[serde(default)]
    pub preparer: PreparerDetails,
}

impl NetWorthData {
    /// An empty certificate dated `date` with one blank individual.
    pub fn new_for_date(date: NaiveDate) -> Self {
        Self {
            certificate_date: date,
            engagement_date: date,
            embassy_name: String::new(),
            embassy_address: String::new(),
            foreign_currency: ForeignCurrency::default(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            individuals: vec![Individual::default()],
            bank_accounts: Vec::new(),
            insurance_policies: Vec::new(),
            pf_accounts: Vec::new(),
            deposits: Vec::new(),
            nps_accounts: Vec::new(),
            mutual_funds: Vec::new(),
            shares: Vec::new(),
            vehicles: Vec::new(),
            post_office_schemes: Vec::new(),
            partnership_firms: Vec::new(),
            gold_holdings: Vec::new(),
            properties: Vec::new(),
            liabilities: Vec::new(),
            notes: CategoryNotes::default(),
            preparer: PreparerDetails::default(),
        }
    }

    /// Fresh-session defaults, dated today in local time.
    pub fn new_for_today() -> Self {
        Self::new_for_date(Local::now().date_naive())
    }

    pub fn records<R: CategoryRecord>(&self) -> &[R] {
        R::list(self)
    }

    pub fn add_record<R: CategoryRecord>(&mut self, record: R) {
        R::list_mut(self).push(record);
    }

    /// Replaces the record at `index` in place, returning the previous one.
    pub fn replace_record<R: CategoryRecord>(&mut self, index: usize, record: R) -> Result<R> {
        let list = R::list_mut(self);
        let len = list.len();
        let slot = list
            .get_mut(index)
            .ok_or_else(|| out_of_range(R::CATEGORY.key(), index, len))?;
        Ok(std::mem::replace(slot, record))
    }

    pub fn remove_record<R: CategoryRecord>(&mut self, index: usize) -> Result<R> {
        let list = R::list_mut(self);
        if index >= list.len() {
            return Err(out_of_range(R::CATEGORY.key(), index, list.len()));
        }
        Ok(list.remove(index))
    }

    pub fn remove_individual(&mut self, index: usize) -> Result<Individual> {
        if index >= self.individuals.len() {
            return Err(out_of_range("individuals", index, self.individuals.len()));
        }
        Ok(self.individuals.remove(index))
    }

    pub fn record_count(&self, category: Category) -> usize {
        match category {
            Category::BankAccounts => self.bank_accounts.len(),
            Category::InsurancePolicies => self.insurance_policies.len(),
            Category::PfAccounts => self.pf_accounts.len(),
            Category::Deposits => self.deposits.len(),
            Category::NpsAccounts => self.nps_accounts.len(),
            Category::MutualFunds => self.mutual_funds.len(),
            Category::Shares => self.shares.len(),
            Category::Vehicles => self.vehicles.len(),
            Category::PostOfficeSchemes => self.post_office_schemes.len(),
            Category::PartnershipFirms => self.partnership_firms.len(),
            Category::GoldHoldings => self.gold_holdings.len(),
            Category::Properties => self.properties.len(),
            Category::Liabilities => self.liabilities.len(),
        }
    }

    /// INR amounts of a category's records, failing on the first malformed one.
    pub fn record_amounts(
        &self,
        category: Category,
    ) -> std::result::Result<Vec<f64>, CalculatorError> {
        match category {
            Category::BankAccounts => checked_amounts(&self.bank_accounts),
            Category::InsurancePolicies => checked_amounts(&self.insurance_policies),
            Category::PfAccounts => checked_amounts(&self.pf_accounts),
            Category::Deposits => checked_amounts(&self.deposits),
            Category::NpsAccounts => checked_amounts(&self.nps_accounts),
            Category::MutualFunds => checked_amounts(&self.mutual_funds),
            Category::Shares => checked_amounts(&self.shares),
            Category::Vehicles => checked_amounts(&self.vehicles),
            Category::PostOfficeSchemes => checked_amounts(&self.post_office_schemes),
            Category::PartnershipFirms => checked_amounts(&self.partnership_firms),
            Category::GoldHoldings => checked_amounts(&self.gold_holdings),
            Category::Properties => checked_amounts(&self.properties),
            Category::Liabilities => checked_amounts(&self.liabilities),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.individuals)
    }

    /// Distinct non-blank addresses, in first-seen order.
    pub fn distinct_addresses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for address in self.individuals.iter().filter_map(Individual::address_text) {
            if !seen.contains(&address) {
                seen.push(address);
            }
        }
        seen
    }
}

fn out_of_range(category: &str, index: usize, len: usize) -> crate::errors::Error {
    ValidationError::IndexOutOfRange {
        category: category.to_string(),
        index,
        len,
    }
    .into()
}

/// One display string for a list of individuals.
///
/// Blank names are skipped. No names gives the placeholder, then "A",
/// "A & B" and "A & B + N more".
pub fn display_name(individuals: &[Individual]) -> String {
    let names: Vec<&str> = individuals
        .iter()
        .map(|i| i.full_name.trim())
        .filter(|n| !n.is_empty())
        .collect();

    match names.as_slice() {
        [] => UNNAMED_INDIVIDUAL.to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{} & {}", first, second),
        [first, second, rest @ ..] => format!("{} & {} + {} more", first, second, rest.len()),
    }
}

/// Provenance stored next to each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateMetadata {
    pub schema_version: String,
    pub source: String,
}

/// Input for persisting a certificate.
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub person_id: Option<String>,
    pub data: NetWorthData,
    pub document: Option<RenderedDocument>,
    pub metadata: CertificateMetadata,
}

/// List view of a stored certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub id: String,
    pub person_id: Option<String>,
    pub display_name: String,
    pub certificate_date: NaiveDate,
    pub foreign_currency: ForeignCurrency,
    pub exchange_rate: f64,
    pub total_movable_assets_inr: f64,
    pub total_immovable_assets_inr: f64,
    pub total_liabilities_inr: f64,
    pub net_worth_inr: f64,
    pub net_worth_foreign: f64,
    pub has_document: bool,
    pub created_at: NaiveDateTime,
}

/// A stored certificate rebuilt from its rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
    pub summary: CertificateSummary,
    pub metadata: CertificateMetadata,
    pub data: NetWorthData,
}

/// Result of generating a certificate. Saving is best effort: a failed save
/// leaves `certificate_id` empty and explains why in `warning`.
#[derive(Debug, Clone)]
pub struct GeneratedCertificate {
    pub document: RenderedDocument,
    pub summary: super::NetWorthSummary,
    pub certificate_id: Option<String>,
    pub warning: Option<String>,
}
