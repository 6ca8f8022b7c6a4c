//! Aggregate totals and net worth.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryClass};
use super::certificates_model::NetWorthData;
use crate::errors::Result;
use crate::fx::{CurrencyConverter, ForeignCurrency};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub record_count: usize,
    pub total_inr: f64,
    pub total_foreign: f64,
}

/// Every derived figure of a certificate, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    pub foreign_currency: ForeignCurrency,
    pub exchange_rate: f64,
    /// One entry per category, in annexure order
    pub categories: Vec<CategoryTotal>,
    pub total_movable_assets_inr: f64,
    pub total_movable_assets_foreign: f64,
    pub total_immovable_assets_inr: f64,
    pub total_immovable_assets_foreign: f64,
    pub total_liabilities_inr: f64,
    pub total_liabilities_foreign: f64,
    pub net_worth_inr: f64,
    pub net_worth_foreign: f64,
}

impl NetWorthSummary {
    pub fn category(&self, category: Category) -> Option<&CategoryTotal> {
        self.categories.iter().find(|t| t.category == category)
    }

    pub fn category_total_inr(&self, category: Category) -> f64 {
        self.category(category).map(|t| t.total_inr).unwrap_or(0.0)
    }

    pub fn category_total_foreign(&self, category: Category) -> f64 {
        self.category(category)
            .map(|t| t.total_foreign)
            .unwrap_or(0.0)
    }

    /// Movable categories that have at least one record.
    pub fn non_empty_movable(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.categories
            .iter()
            .filter(|t| t.category.is_movable() && t.record_count > 0)
    }
}

impl NetWorthData {
    /// Computes all totals.
    ///
    /// Fails on a negative or non-finite exchange rate and on any record with
    /// a non-finite amount. A zero rate gives zero foreign amounts.
    pub fn summary(&self) -> Result<NetWorthSummary> {
        let converter = CurrencyConverter::new(self.exchange_rate)?;

        let mut categories = Vec::with_capacity(Category::ALL.len());
        let mut movable = 0.0;
        let mut immovable = 0.0;
        let mut liabilities = 0.0;

        for category in Category::ALL {
            let amounts = self.record_amounts(category)?;
            let total_inr: f64 = amounts.iter().sum();
            match category.class() {
                CategoryClass::Movable => movable += total_inr,
                CategoryClass::Immovable => immovable += total_inr,
                CategoryClass::Liability => liabilities += total_inr,
            }
            categories.push(CategoryTotal {
                category,
                record_count: amounts.len(),
                total_inr,
                total_foreign: converter.to_foreign(total_inr),
            });
        }

        let net_worth = movable + immovable - liabilities;
        log::debug!(
            "Net worth for {}: {} INR across {} records",
            self.display_name(),
            net_worth,
            categories.iter().map(|t| t.record_count).sum::<usize>()
        );

        Ok(NetWorthSummary {
            foreign_currency: self.foreign_currency,
            exchange_rate: converter.rate(),
            categories,
            total_movable_assets_inr: movable,
            total_movable_assets_foreign: converter.to_foreign(movable),
            total_immovable_assets_inr: immovable,
            total_immovable_assets_foreign: converter.to_foreign(immovable),
            total_liabilities_inr: liabilities,
            total_liabilities_foreign: converter.to_foreign(liabilities),
            net_worth_inr: net_worth,
            net_worth_foreign: converter.to_foreign(net_worth),
        })
    }

    pub fn category_total_inr(&self, category: Category) -> Result<f64> {
        Ok(self.record_amounts(category)?.iter().sum())
    }

    pub fn total_movable_assets_inr(&self) -> Result<f64> {
        Ok(self.summary()?.total_movable_assets_inr)
    }

    pub fn total_immovable_assets_inr(&self) -> Result<f64> {
        Ok(self.summary()?.total_immovable_assets_inr)
    }

    pub fn total_liabilities_inr(&self) -> Result<f64> {
        Ok(self.summary()?.total_liabilities_inr)
    }

    pub fn net_worth_inr(&self) -> Result<f64> {
        Ok(self.summary()?.net_worth_inr)
    }

    pub fn net_worth_foreign(&self) -> Result<f64> {
        Ok(self.summary()?.net_worth_foreign)
    }
}
