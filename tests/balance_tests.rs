mod common;

use balancete_core::{
    core::services::{BalanceService, TrendService},
    domain::{Account, BalanceKey, Granularity},
};
use common::{date, inflow, outflow};
use rust_decimal_macros::dec;

#[test]
fn period_after_all_data_keeps_historical_final() {
    let txns = vec![
        inflow(date(2024, 1, 5), Account::Dinheiro, dec!(1000)),
        outflow(date(2024, 1, 10), Account::Dinheiro, dec!(300)),
        inflow(date(2024, 1, 20), Account::Bradesco, dec!(500)),
    ];
    let snapshot =
        BalanceService::compute_balances(&txns, &Account::ALL, date(2025, 1, 1), date(2025, 1, 31));

    assert!(snapshot.period_inflow.total.is_zero());
    assert!(snapshot.period_outflow.total.is_zero());
    assert_eq!(snapshot.final_balance.get(Account::Dinheiro), dec!(700));
    assert_eq!(snapshot.final_balance.get(BalanceKey::Total), dec!(1200));
    assert_eq!(snapshot.initial, snapshot.final_balance);
}

#[test]
fn movements_after_period_end_are_ignored() {
    let txns = vec![
        inflow(date(2024, 1, 31), Account::Cora, dec!(50)),
        inflow(date(2024, 2, 1), Account::Cora, dec!(999)),
    ];
    let snapshot =
        BalanceService::compute_balances(&txns, &Account::ALL, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(snapshot.final_balance.get(Account::Cora), dec!(50));
    assert_eq!(snapshot.period_inflow.get(Account::Cora), dec!(50));
}

#[test]
fn labelled_output_carries_total_entry() {
    let txns = vec![
        inflow(date(2024, 1, 5), Account::Dinheiro, dec!(10)),
        outflow(date(2024, 1, 6), Account::Bradesco, dec!(4)),
    ];
    let snapshot = BalanceService::compute_balances(
        &txns,
        &[Account::Dinheiro, Account::Bradesco],
        date(2024, 1, 1),
        date(2024, 1, 31),
    );
    let labelled = BalanceService::labelled_final(&snapshot);
    assert_eq!(labelled.len(), 3);
    assert_eq!(labelled["total"], dec!(6));
    assert_eq!(labelled["Bradesco"], dec!(-4));
}

#[test]
fn trend_window_uses_configured_length() {
    let txns = vec![
        inflow(date(2023, 12, 15), Account::Dinheiro, dec!(100)),
        outflow(date(2024, 2, 1), Account::Dinheiro, dec!(25)),
    ];
    let series = TrendService::compute_trend(&txns, date(2024, 2, 10), 6);
    assert_eq!(series.len(), 6);
    assert_eq!(series.keys().first(), Some(&"2023-09"));
    assert_eq!(series.totals(), (dec!(100), dec!(25)));

    let yearly = TrendService::rebucket(&series, Granularity::Year);
    assert_eq!(yearly.keys(), vec!["2023", "2024"]);
    assert_eq!(yearly.buckets[0].net(), dec!(100));
}
