//! Outflow grouped by Secondary category with share-of-total.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    config::ExpenseRollup,
    core::CategoryTree,
    domain::{
        CategoryLevel, Displayable, ExpenseBreakdown, ExpenseRow, Period, Transaction,
        TransactionKind,
    },
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub struct ExpenseService;

impl ExpenseService {
    /// One row per Secondary outflow category of `tree`, zero rows included.
    ///
    /// `total_outflow` counts every outflow in the period, categorized or not, so
    /// percentages only reach 100 when every outflow has a resolvable category.
    pub fn analyze(
        transactions: &[Transaction],
        tree: &CategoryTree,
        period: Option<Period>,
        rollup: ExpenseRollup,
    ) -> ExpenseBreakdown {
        let secondaries = tree.children_of_kind(TransactionKind::Outflow, CategoryLevel::Secondary);
        let mut totals: HashMap<Uuid, Decimal> = secondaries
            .iter()
            .map(|category| (category.id, Decimal::ZERO))
            .collect();
        let mut total_outflow = Decimal::ZERO;

        for txn in transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Outflow)
            .filter(|txn| period.map_or(true, |p| p.contains(txn.date)))
        {
            total_outflow += txn.amount;
            let Some(category_id) = txn.category_id else {
                continue;
            };
            let target = match rollup {
                ExpenseRollup::Direct => Some(category_id),
                ExpenseRollup::IncludeTertiary => tree.resolve_secondary(category_id),
            };
            if let Some(sum) = target.and_then(|id| totals.get_mut(&id)) {
                *sum += txn.amount;
            }
        }

        let rows = secondaries
            .into_iter()
            .map(|category| {
                let total = totals.get(&category.id).copied().unwrap_or(Decimal::ZERO);
                ExpenseRow {
                    category_id: category.id,
                    code: category.code.clone(),
                    name: category.name.clone(),
                    label: category.display_label(),
                    total,
                    percentage: Self::percentage(total, total_outflow),
                }
            })
            .collect();

        ExpenseBreakdown {
            period,
            total_outflow,
            rows,
        }
    }

    /// `part / whole * 100`, defined as zero when `whole` is zero.
    pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            return Decimal::ZERO;
        }
        part.checked_div(whole)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .map(|value| value.normalize())
            .unwrap_or(Decimal::ZERO)
    }
}
