//! The single descriptor for every asset and liability category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Whether a category counts towards movable assets, immovable assets or
/// liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryClass {
    Movable,
    Immovable,
    Liability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BankAccounts,
    InsurancePolicies,
    PfAccounts,
    Deposits,
    NpsAccounts,
    MutualFunds,
    Shares,
    Vehicles,
    PostOfficeSchemes,
    PartnershipFirms,
    GoldHoldings,
    Properties,
    Liabilities,
}

impl Category {
    /// Every category, in annexure order.
    pub const ALL: [Category; 13] = [
        Category::BankAccounts,
        Category::InsurancePolicies,
        Category::PfAccounts,
        Category::Deposits,
        Category::NpsAccounts,
        Category::MutualFunds,
        Category::Shares,
        Category::Vehicles,
        Category::PostOfficeSchemes,
        Category::PartnershipFirms,
        Category::GoldHoldings,
        Category::Properties,
        Category::Liabilities,
    ];

    /// The eleven categories summed into movable assets.
    pub const MOVABLE: [Category; 11] = [
        Category::BankAccounts,
        Category::InsurancePolicies,
        Category::PfAccounts,
        Category::Deposits,
        Category::NpsAccounts,
        Category::MutualFunds,
        Category::Shares,
        Category::Vehicles,
        Category::PostOfficeSchemes,
        Category::PartnershipFirms,
        Category::GoldHoldings,
    ];

    /// Stable key used in JSON, storage and notes.
    pub fn key(&self) -> &'static str {
        match self {
            Category::BankAccounts => "bank_accounts",
            Category::InsurancePolicies => "insurance_policies",
            Category::PfAccounts => "pf_accounts",
            Category::Deposits => "deposits",
            Category::NpsAccounts => "nps_accounts",
            Category::MutualFunds => "mutual_funds",
            Category::Shares => "shares",
            Category::Vehicles => "vehicles",
            Category::PostOfficeSchemes => "post_office_schemes",
            Category::PartnershipFirms => "partnership_firms",
            Category::GoldHoldings => "gold_holdings",
            Category::Properties => "properties",
            Category::Liabilities => "liabilities",
        }
    }

    /// Row label in the movable assets summary.
    pub fn label(&self) -> &'static str {
        match self {
            Category::BankAccounts => "Bank Account",
            Category::InsurancePolicies => "LIC",
            Category::PfAccounts => "P.F. Account",
            Category::Deposits => "Deposit",
            Category::NpsAccounts => "NPS",
            Category::MutualFunds => "Investment in Mutual Fund",
            Category::Shares => "Shares & Securities",
            Category::Vehicles => "Vehicles",
            Category::PostOfficeSchemes => "Post Office Schemes",
            Category::PartnershipFirms => "Investments in Partnership Firms",
            Category::GoldHoldings => "Gold",
            Category::Properties => "Immovable Property",
            Category::Liabilities => "Liabilities",
        }
    }

    /// Heading of the itemized annexure table.
    pub fn annexure_heading(&self) -> String {
        match self.class() {
            CategoryClass::Movable => {
                let letter = self.sub_annexure().unwrap_or_default();
                let title = match self {
                    Category::BankAccounts => "Bank Account",
                    Category::InsurancePolicies => "Life Insurance Policies",
                    Category::PfAccounts => "P.F. Account",
                    Category::Deposits => "Deposit",
                    Category::NpsAccounts => "NPS",
                    Category::MutualFunds => "Investment in Mutual Fund",
                    Category::Shares => "Shares & Securities",
                    Category::Vehicles => "Vehicles",
                    Category::PostOfficeSchemes => "Post Office Schemes",
                    Category::PartnershipFirms => "Investments in Partnership Firms",
                    _ => "Gold",
                };
                format!("Sub Annexure ({}) - {}", letter, title)
            }
            CategoryClass::Immovable => "Annexure (ii) - Immovable Assets".to_string(),
            CategoryClass::Liability => "Annexure (iii) - Liabilities".to_string(),
        }
    }

    /// Letter of the sub-annexure under Annexure (i). Only movable categories have one.
    pub fn sub_annexure(&self) -> Option<&'static str> {
        let letter = match self {
            Category::BankAccounts => "A",
            Category::InsurancePolicies => "B",
            Category::PfAccounts => "C",
            Category::Deposits => "D",
            Category::NpsAccounts => "E",
            Category::MutualFunds => "F",
            Category::Shares => "G",
            Category::Vehicles => "H",
            Category::PostOfficeSchemes => "I",
            Category::PartnershipFirms => "J",
            Category::GoldHoldings => "K",
            Category::Properties | Category::Liabilities => return None,
        };
        Some(letter)
    }

    pub fn class(&self) -> CategoryClass {
        match self {
            Category::Properties => CategoryClass::Immovable,
            Category::Liabilities => CategoryClass::Liability,
            _ => CategoryClass::Movable,
        }
    }

    pub fn is_movable(&self) -> bool {
        self.class() == CategoryClass::Movable
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!("Unknown category '{}'", s)).into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movable_excludes_property_and_liabilities() {
        assert_eq!(Category::MOVABLE.len(), 11);
        assert!(!Category::MOVABLE.contains(&Category::Properties));
        assert!(!Category::MOVABLE.contains(&Category::Liabilities));
        for category in Category::ALL {
            assert_eq!(
                Category::MOVABLE.contains(&category),
                category.is_movable(),
                "{}",
                category
            );
        }
    }

    #[test]
    fn test_key_round_trip_and_serde_agree() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{}\"", category.key())
            );
        }
        assert!("savings".parse::<Category>().is_err());
    }

    #[test]
    fn test_annexure_headings() {
        assert_eq!(
            Category::BankAccounts.annexure_heading(),
            "Sub Annexure (A) - Bank Account"
        );
        assert_eq!(
            Category::GoldHoldings.annexure_heading(),
            "Sub Annexure (K) - Gold"
        );
        assert_eq!(
            Category::Properties.annexure_heading(),
            "Annexure (ii) - Immovable Assets"
        );
        assert_eq!(Category::Liabilities.sub_annexure(), None);
    }
}
