use super::*;
use crate::errors::{CalculatorError, Error};
use chrono::NaiveDate;

fn empty(rate: f64) -> NetWorthData {
    let mut data = NetWorthData::new_for_date(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
    data.exchange_rate = rate;
    data
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn empty_aggregate_is_all_zero() {
    let summary = empty(63.34).summary().unwrap();

    assert_eq!(summary.categories.len(), 13);
    assert!(summary.categories.iter().all(|t| t.record_count == 0 && t.total_inr == 0.0));
    assert_eq!(summary.net_worth_inr, 0.0);
    assert_eq!(summary.net_worth_foreign, 0.0);
    assert_eq!(summary.non_empty_movable().count(), 0);
}

#[test]
fn bank_property_and_liability_scenario() {
    let mut data = empty(63.34);
    data.add_record(BankAccount {
        holder_name: "Asha Rao".to_string(),
        balance_inr: 100_000.0,
        ..Default::default()
    });
    data.add_record(Property {
        owner_name: "Asha Rao".to_string(),
        valuation_inr: 500_000.0,
        ..Default::default()
    });
    data.add_record(Liability {
        description: "Home loan".to_string(),
        amount_inr: 50_000.0,
        details: None,
    });

    let summary = data.summary().unwrap();
    assert_eq!(summary.total_movable_assets_inr, 100_000.0);
    assert_eq!(summary.total_immovable_assets_inr, 500_000.0);
    assert_eq!(summary.total_liabilities_inr, 50_000.0);
    assert_eq!(summary.net_worth_inr, 550_000.0);
    assert_eq!(summary.net_worth_foreign, 550_000.0 / 63.34);
    assert!((summary.net_worth_foreign - 8683.30).abs() < 0.01);
}

#[test]
fn movable_total_sums_all_eleven_categories() {
    let mut data = empty(50.0);
    data.add_record(BankAccount { balance_inr: 1.0, ..Default::default() });
    data.add_record(InsurancePolicy { amount_inr: 2.0, ..Default::default() });
    data.add_record(PfAccount { amount_inr: 4.0, ..Default::default() });
    data.add_record(Deposit { amount_inr: 8.0, ..Default::default() });
    data.add_record(NpsAccount { amount_inr: 16.0, ..Default::default() });
    data.add_record(MutualFund { amount_inr: 32.0, ..Default::default() });
    data.add_record(ShareLot { quantity: 2, market_price_inr: 32.0, ..Default::default() });
    data.add_record(Vehicle { market_value_inr: 128.0, ..Default::default() });
    data.add_record(PostOfficeScheme { amount_inr: 256.0, ..Default::default() });
    data.add_record(PartnershipFirm { capital_balance_inr: 512.0, ..Default::default() });
    data.add_record(GoldHolding { weight_grams: 10.0, rate_per_10g: 1024.0, ..Default::default() });
    data.add_record(Property { valuation_inr: 1_000_000.0, ..Default::default() });
    data.add_record(Liability { amount_inr: 3.0, ..Default::default() });

    let summary = data.summary().unwrap();
    assert_eq!(summary.total_movable_assets_inr, 2047.0);
    assert_eq!(summary.total_immovable_assets_inr, 1_000_000.0);
    assert_eq!(summary.net_worth_inr, 2047.0 + 1_000_000.0 - 3.0);
    assert_eq!(summary.non_empty_movable().count(), 11);
    assert_eq!(summary.category_total_inr(Category::Shares), 64.0);
    assert_eq!(summary.category_total_foreign(Category::GoldHoldings), 1024.0 / 50.0);
}

#[test]
fn zero_rate_gives_zero_foreign_everywhere() {
    let mut data = empty(0.0);
    data.add_record(BankAccount { balance_inr: 10_000.0, ..Default::default() });
    data.add_record(Liability { amount_inr: 500.0, ..Default::default() });

    let summary = data.summary().unwrap();
    assert_eq!(summary.net_worth_inr, 9_500.0);
    assert_eq!(summary.total_liabilities_foreign, 0.0);
    assert_eq!(summary.total_movable_assets_foreign, 0.0);
    assert_eq!(summary.net_worth_foreign, 0.0);
    assert!(summary.categories.iter().all(|t| t.total_foreign == 0.0));
}

#[test]
fn negative_rate_is_rejected() {
    let data = empty(-1.0);
    assert!(matches!(data.summary(), Err(Error::InvalidExchangeRate(_))));
}

#[test]
fn non_finite_record_fails_fast() {
    let mut data = empty(63.34);
    data.add_record(Deposit { amount_inr: 10.0, ..Default::default() });
    data.add_record(Deposit { amount_inr: f64::INFINITY, ..Default::default() });

    match data.summary() {
        Err(Error::Calculation(CalculatorError::NonFiniteField { category, index, field })) => {
            assert_eq!(category, "deposits");
            assert_eq!(index, 1);
            assert_eq!(field, "amount_inr");
        }
        other => panic!("expected calculation error, got {:?}", other),
    }
}

#[test]
fn summary_is_idempotent() {
    let mut data = empty(63.34);
    data.add_record(GoldHolding {
        weight_grams: 399.57,
        rate_per_10g: 109_500.0,
        ..Default::default()
    });
    data.add_record(ShareLot { quantity: 100, market_price_inr: 2450.0, ..Default::default() });

    assert_eq!(data.summary().unwrap(), data.summary().unwrap());
    assert!(close(data.net_worth_inr().unwrap(), 4_375_291.5 + 245_000.0));
    assert!(close(
        data.category_total_inr(Category::GoldHoldings).unwrap(),
        4_375_291.5
    ));
}
