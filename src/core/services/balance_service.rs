//! Per-account balances and period flows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    Account, AccountBalances, BalanceSnapshot, Period, Transaction, TransactionKind,
};

pub struct BalanceService;

impl BalanceService {
    /// Initial/final balances and in/out flows for `[period_start, period_end]`.
    ///
    /// Reversed bounds are swapped. Movements on accounts outside `accounts` are skipped.
    pub fn compute_balances(
        transactions: &[Transaction],
        accounts: &[Account],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> BalanceSnapshot {
        Self::compute_for_period(transactions, accounts, Period::new(period_start, period_end))
    }

    pub fn compute_for_period(
        transactions: &[Transaction],
        accounts: &[Account],
        period: Period,
    ) -> BalanceSnapshot {
        let mut snapshot = BalanceSnapshot::empty(period, accounts);
        let mut skipped = 0usize;

        for txn in transactions {
            if !snapshot.final_balance.per_account.contains_key(&txn.account) {
                skipped += 1;
                continue;
            }
            if txn.date > period.end {
                continue;
            }
            let signed = txn.signed_amount();
            snapshot.final_balance.add(txn.account, signed);
            if txn.date < period.start {
                snapshot.initial.add(txn.account, signed);
                continue;
            }
            let flows = match txn.kind {
                TransactionKind::Inflow => &mut snapshot.period_inflow,
                TransactionKind::Outflow => &mut snapshot.period_outflow,
            };
            flows.add(txn.account, txn.amount);
        }

        tracing::debug!(
            %period,
            transactions = transactions.len(),
            skipped,
            total_final = %snapshot.final_balance.total,
            "balances computed"
        );
        snapshot
    }

    /// Signed balance per account including every movement up to `date`.
    pub fn balances_as_of(
        transactions: &[Transaction],
        accounts: &[Account],
        date: NaiveDate,
    ) -> AccountBalances {
        let mut balances = AccountBalances::zeroed(accounts);
        for txn in transactions.iter().filter(|txn| txn.date <= date) {
            balances.add(txn.account, txn.signed_amount());
        }
        balances
    }

    /// Balances keyed by account name plus `"total"`, for consumers expecting flat maps.
    pub fn labelled_final(snapshot: &BalanceSnapshot) -> BTreeMap<String, Decimal> {
        snapshot.final_balance.labelled()
    }
}
