//! Report structures produced by the aggregation services.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    account::Account,
    common::NamedEntity,
    period::{Period, YearMonth},
};

/// Label used for the synthetic cross-account entry in labelled output.
pub const TOTAL_KEY: &str = "total";

/// Addresses one entry of an [`AccountBalances`] map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceKey {
    Account(Account),
    Total,
}

impl fmt::Display for BalanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceKey::Account(account) => write!(f, "{account}"),
            BalanceKey::Total => f.write_str(TOTAL_KEY),
        }
    }
}

impl From<Account> for BalanceKey {
    fn from(account: Account) -> Self {
        BalanceKey::Account(account)
    }
}

/// Per-account amounts plus their cross-account total.
///
/// Every account passed to [`AccountBalances::zeroed`] stays present, and
/// `total` always equals the sum of `per_account`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountBalances {
    pub per_account: BTreeMap<Account, Decimal>,
    pub total: Decimal,
}

impl AccountBalances {
    pub fn zeroed(accounts: &[Account]) -> Self {
        Self {
            per_account: accounts
                .iter()
                .map(|account| (*account, Decimal::ZERO))
                .collect(),
            total: Decimal::ZERO,
        }
    }

    /// Adds `amount` to a known account. Unknown accounts are left out of the total too.
    pub fn add(&mut self, account: Account, amount: Decimal) -> bool {
        match self.per_account.get_mut(&account) {
            Some(value) => {
                *value += amount;
                self.total += amount;
                true
            }
            None => false,
        }
    }

    pub fn account(&self, account: Account) -> Decimal {
        self.per_account
            .get(&account)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn get(&self, key: impl Into<BalanceKey>) -> Decimal {
        match key.into() {
            BalanceKey::Account(account) => self.account(account),
            BalanceKey::Total => self.total,
        }
    }

    pub fn accounts(&self) -> impl Iterator<Item = Account> + '_ {
        self.per_account.keys().copied()
    }

    /// Flattens into the external shape: account names plus the `"total"` entry.
    pub fn labelled(&self) -> BTreeMap<String, Decimal> {
        let mut map: BTreeMap<String, Decimal> = self
            .per_account
            .iter()
            .map(|(account, value)| (account.name().to_string(), *value))
            .collect();
        map.insert(TOTAL_KEY.to_string(), self.total);
        map
    }
}

/// Output of the balance aggregator for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub period: Period,
    pub initial: AccountBalances,
    #[serde(rename = "final")]
    pub final_balance: AccountBalances,
    pub period_inflow: AccountBalances,
    pub period_outflow: AccountBalances,
}

impl BalanceSnapshot {
    pub fn empty(period: Period, accounts: &[Account]) -> Self {
        let zero = AccountBalances::zeroed(accounts);
        Self {
            period,
            initial: zero.clone(),
            final_balance: zero.clone(),
            period_inflow: zero.clone(),
            period_outflow: zero,
        }
    }

    pub fn net_change(&self, key: impl Into<BalanceKey>) -> Decimal {
        let key = key.into();
        self.period_inflow.get(key) - self.period_outflow.get(key)
    }
}

/// Bucket size used when re-grouping a monthly trend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Month,
    Quarter,
    Year,
}

impl Granularity {
    /// Key of the bucket a month falls into. Lexicographic order matches chronology.
    pub fn key_for(self, month: YearMonth) -> String {
        match self {
            Granularity::Month => month.to_string(),
            Granularity::Quarter => format!("{:04}-Q{}", month.year(), month.quarter()),
            Granularity::Year => format!("{:04}", month.year()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendBucket {
    pub period_key: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub inflow: Decimal,
    pub outflow: Decimal,
}

impl TrendBucket {
    pub fn net(&self) -> Decimal {
        self.inflow - self.outflow
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendSeries {
    pub granularity: Granularity,
    pub buckets: Vec<TrendBucket>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.buckets
            .iter()
            .map(|bucket| bucket.period_key.as_str())
            .collect()
    }

    /// Inflow and outflow summed across the whole window.
    pub fn totals(&self) -> (Decimal, Decimal) {
        self.buckets
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inflow, outflow), bucket| {
                (inflow + bucket.inflow, outflow + bucket.outflow)
            })
    }
}

/// Outflow attributed to one Secondary category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRow {
    pub category_id: Uuid,
    pub code: String,
    pub name: String,
    pub label: String,
    pub total: Decimal,
    /// Share of the period's total outflow, in percent.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub total_outflow: Decimal,
    pub rows: Vec<ExpenseRow>,
}

impl ExpenseBreakdown {
    /// Chart view: non-zero rows, largest first.
    pub fn ranked(&self) -> Vec<ExpenseRow> {
        let mut rows: Vec<ExpenseRow> = self
            .rows
            .iter()
            .filter(|row| !row.total.is_zero())
            .cloned()
            .collect();
        rows.sort_by(|a, b| match b.total.cmp(&a.total) {
            Ordering::Equal => a.label.cmp(&b.label),
            other => other,
        });
        rows
    }

    /// Statement view: every category, zero rows included, by label.
    pub fn alphabetical(&self) -> Vec<ExpenseRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.label.cmp(&b.label));
        rows
    }

    pub fn categorized_total(&self) -> Decimal {
        self.rows.iter().map(|row| row.total).sum()
    }

    pub fn uncategorized_total(&self) -> Decimal {
        self.total_outflow - self.categorized_total()
    }

    pub fn percentage_sum(&self) -> Decimal {
        self.rows.iter().map(|row| row.percentage).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceteRow {
    pub account: Account,
    pub label: String,
    pub initial: Decimal,
    pub inflow: Decimal,
    pub outflow: Decimal,
    #[serde(rename = "final")]
    pub final_balance: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TotalsRow {
    pub sum_of_initial: Decimal,
    pub sum_of_inflow: Decimal,
    pub sum_of_outflow: Decimal,
    pub sum_of_final: Decimal,
}

impl TotalsRow {
    /// Column sums; the final column is derived from the other three.
    pub fn from_rows(rows: &[BalanceteRow]) -> Self {
        let (sum_of_initial, sum_of_inflow, sum_of_outflow) = rows.iter().fold(
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |(initial, inflow, outflow), row| {
                (initial + row.initial, inflow + row.inflow, outflow + row.outflow)
            },
        );
        Self {
            sum_of_initial,
            sum_of_inflow,
            sum_of_outflow,
            sum_of_final: sum_of_initial + sum_of_inflow - sum_of_outflow,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailRow {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category_label: String,
    pub account_label: String,
    pub approved: bool,
}

/// Monthly balancete: balances, categorized outflow and outflow detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    pub year_month: YearMonth,
    pub period: Period,
    pub per_account: Vec<BalanceteRow>,
    pub totals: TotalsRow,
    pub total_outflow: Decimal,
    pub categorized: Vec<ExpenseRow>,
    pub detail: Vec<DetailRow>,
}

impl Statement {
    pub fn row(&self, account: Account) -> Option<&BalanceteRow> {
        self.per_account.iter().find(|row| row.account == account)
    }
}
