//! Category records. Every INR amount is a pure function of the record's own fields.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::certificates_model::NetWorthData;
use crate::constants::GOLD_RATE_UNIT_GRAMS;
use crate::errors::CalculatorError;
use crate::fx::to_foreign;

/// Behaviour shared by all thirteen record types.
pub trait CategoryRecord:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const CATEGORY: Category;

    /// Home-currency amount this record contributes to its category total.
    fn amount_inr(&self) -> f64;

    fn amount_foreign(&self, rate: f64) -> f64 {
        to_foreign(self.amount_inr(), rate)
    }

    /// Raw numeric inputs by field name.
    fn numeric_fields(&self) -> Vec<(&'static str, f64)>;

    fn list(data: &NetWorthData) -> &Vec<Self>;

    fn list_mut(data: &mut NetWorthData) -> &mut Vec<Self>;

    /// Rejects NaN and infinities in the inputs and in the derived amount.
    fn checked_amount_inr(&self, index: usize) -> Result<f64, CalculatorError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(CalculatorError::NonFiniteField {
                    category: Self::CATEGORY.key().to_string(),
                    index,
                    field,
                });
            }
        }
        let amount = self.amount_inr();
        if !amount.is_finite() {
            return Err(CalculatorError::NonFiniteAmount {
                category: Self::CATEGORY.key().to_string(),
                index,
            });
        }
        Ok(amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub holder_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub balance_inr: f64,
    #[serde(default)]
    pub statement_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub holder_name: String,
    pub policy_number: String,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PfAccount {
    pub holder_name: String,
    pub pf_account_number: String,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub holder_name: String,
    pub account_number: String,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsAccount {
    pub owner_name: String,
    pub pran_number: String,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub holder_name: String,
    pub folio_number: String,
    pub scheme_name: String,
    pub amount_inr: f64,
}

/// A holding of one listed company, valued at market price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLot {
    pub company_name: String,
    pub quantity: u64,
    pub market_price_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_type: String,
    pub make_model_year: String,
    pub registration_number: String,
    pub market_value_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOfficeScheme {
    pub scheme_type: String,
    pub account_number: String,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipFirm {
    pub firm_name: String,
    pub partner_name: String,
    pub holding_percentage: f64,
    pub capital_balance_inr: f64,
    #[serde(default)]
    pub valuation_date: Option<NaiveDate>,
}

/// Gold valued at a rate quoted per 10 grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldHolding {
    pub owner_name: String,
    pub weight_grams: f64,
    pub rate_per_10g: f64,
    #[serde(default)]
    pub valuation_date: Option<NaiveDate>,
    #[serde(default)]
    pub valuer_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub owner_name: String,
    pub property_type: String,
    pub address: String,
    pub valuation_inr: f64,
    #[serde(default)]
    pub valuation_date: Option<NaiveDate>,
    #[serde(default)]
    pub valuer_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub description: String,
    pub amount_inr: f64,
    #[serde(default)]
    pub details: Option<String>,
}

// Records whose amount is one stored field.
macro_rules! stored_amount_record {
    ($ty:ty, $category:expr, $list:ident, $amount:ident) => {
        impl CategoryRecord for $ty {
            const CATEGORY: Category = $category;

            fn amount_inr(&self) -> f64 {
                self.$amount
            }

            fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
                vec![(stringify!($amount), self.$amount)]
            }

            fn list(data: &NetWorthData) -> &Vec<Self> {
                &data.$list
            }

            fn list_mut(data: &mut NetWorthData) -> &mut Vec<Self> {
                &mut data.$list
            }
        }
    };
}

stored_amount_record!(BankAccount, Category::BankAccounts, bank_accounts, balance_inr);
stored_amount_record!(
    InsurancePolicy,
    Category::InsurancePolicies,
    insurance_policies,
    amount_inr
);
stored_amount_record!(PfAccount, Category::PfAccounts, pf_accounts, amount_inr);
stored_amount_record!(Deposit, Category::Deposits, deposits, amount_inr);
stored_amount_record!(NpsAccount, Category::NpsAccounts, nps_accounts, amount_inr);
stored_amount_record!(MutualFund, Category::MutualFunds, mutual_funds, amount_inr);
stored_amount_record!(Vehicle, Category::Vehicles, vehicles, market_value_inr);
stored_amount_record!(
    PostOfficeScheme,
    Category::PostOfficeSchemes,
    post_office_schemes,
    amount_inr
);
stored_amount_record!(Property, Category::Properties, properties, valuation_inr);
stored_amount_record!(Liability, Category::Liabilities, liabilities, amount_inr);

impl CategoryRecord for ShareLot {
    const CATEGORY: Category = Category::Shares;

    fn amount_inr(&self) -> f64 {
        self.quantity as f64 * self.market_price_inr
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("market_price_inr", self.market_price_inr)]
    }

    fn list(data: &NetWorthData) -> &Vec<Self> {
        &data.shares
    }

    fn list_mut(data: &mut NetWorthData) -> &mut Vec<Self> {
        &mut data.shares
    }
}

impl CategoryRecord for PartnershipFirm {
    const CATEGORY: Category = Category::PartnershipFirms;

    fn amount_inr(&self) -> f64 {
        self.capital_balance_inr
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("holding_percentage", self.holding_percentage),
            ("capital_balance_inr", self.capital_balance_inr),
        ]
    }

    fn list(data: &NetWorthData) -> &Vec<Self> {
        &data.partnership_firms
    }

    fn list_mut(data: &mut NetWorthData) -> &mut Vec<Self> {
        &mut data.partnership_firms
    }
}

impl CategoryRecord for GoldHolding {
    const CATEGORY: Category = Category::GoldHoldings;

    fn amount_inr(&self) -> f64 {
        (self.weight_grams / GOLD_RATE_UNIT_GRAMS) * self.rate_per_10g
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("weight_grams", self.weight_grams),
            ("rate_per_10g", self.rate_per_10g),
        ]
    }

    fn list(data: &NetWorthData) -> &Vec<Self> {
        &data.gold_holdings
    }

    fn list_mut(data: &mut NetWorthData) -> &mut Vec<Self> {
        &mut data.gold_holdings
    }
}

/// Checked INR amounts of every record in `records`, in list order.
pub(crate) fn checked_amounts<R: CategoryRecord>(
    records: &[R],
) -> Result<Vec<f64>, CalculatorError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.checked_amount_inr(index))
        .collect()
}
