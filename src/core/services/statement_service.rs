//! Monthly balancete composed from balances, categorized outflow and detail.

use crate::{
    config::EngineConfig,
    core::CategoryTree,
    domain::{
        Account, BalanceteRow, DetailRow, Ledger, Period, Statement, TotalsRow, Transaction,
        TransactionKind, YearMonth,
    },
};

use super::{BalanceService, ExpenseService};

pub struct StatementService;

impl StatementService {
    /// Balancete for one month. Detail rows without a usable category carry
    /// `config.fallback_category_label`, whatever fallback `tree` was built with.
    pub fn generate(
        transactions: &[Transaction],
        tree: &CategoryTree,
        year_month: YearMonth,
        config: &EngineConfig,
    ) -> Statement {
        let period = Period::month(year_month);
        let balances = BalanceService::compute_for_period(transactions, &Account::ALL, period);

        let mut per_account: Vec<BalanceteRow> = Account::ALL
            .iter()
            .map(|account| BalanceteRow {
                account: *account,
                label: config.account_label(*account),
                initial: balances.initial.get(*account),
                inflow: balances.period_inflow.get(*account),
                outflow: balances.period_outflow.get(*account),
                final_balance: balances.final_balance.get(*account),
            })
            .collect();
        // Rows read in presentation numbering order; stable sort keeps `Account::ALL` for ties.
        per_account.sort_by(|a, b| a.label.cmp(&b.label));
        let totals = TotalsRow::from_rows(&per_account);

        let breakdown =
            ExpenseService::analyze(transactions, tree, Some(period), config.expense_rollup);

        let mut outflows: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Outflow && period.contains(txn.date))
            .collect();
        outflows.sort_by_key(|txn| txn.date);
        let detail = outflows
            .into_iter()
            .map(|txn| DetailRow {
                id: txn.id,
                date: txn.date,
                description: txn.description.clone(),
                amount: txn.amount,
                category_label: tree.label_for_with(txn, &config.fallback_category_label),
                account_label: config.account_label(txn.account),
                approved: txn.approved,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            %year_month,
            rows = per_account.len(),
            detail = detail.len(),
            "statement generated"
        );

        Statement {
            year_month,
            period,
            per_account,
            totals,
            total_outflow: breakdown.total_outflow,
            categorized: breakdown.alphabetical(),
            detail,
        }
    }

    /// Builds the category index from the ledger, then delegates to [`StatementService::generate`].
    pub fn generate_from_ledger(
        ledger: &Ledger,
        year_month: YearMonth,
        config: &EngineConfig,
    ) -> Statement {
        let tree = CategoryTree::new(ledger.categories.iter().cloned())
            .with_fallback_label(config.fallback_category_label.clone());
        Self::generate(&ledger.transactions, &tree, year_month, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryLevel};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new("Janeiro");
        let root = Category::new("2", "Despesas", CategoryLevel::Primary, TransactionKind::Outflow);
        let utilities =
            Category::new("2.1", "Utilities", CategoryLevel::Secondary, TransactionKind::Outflow)
                .with_parent(root.id);
        let utilities_id = utilities.id;
        ledger.add_category(root);
        ledger.add_category(utilities);
        ledger.transactions = vec![
            Transaction::new(
                date(2024, 1, 20),
                TransactionKind::Outflow,
                Account::Bradesco,
                dec!(80),
                "sem categoria",
            ),
            Transaction::new(
                date(2024, 1, 10),
                TransactionKind::Outflow,
                Account::Dinheiro,
                dec!(300),
                "conta de luz",
            )
            .with_category(utilities_id),
            Transaction::new(
                date(2024, 1, 5),
                TransactionKind::Inflow,
                Account::Dinheiro,
                dec!(1000),
                "aporte",
            ),
        ];
        ledger
    }

    #[test]
    fn detail_is_sorted_and_labelled() {
        let statement = StatementService::generate_from_ledger(
            &ledger(),
            YearMonth::new(2024, 1).unwrap(),
            &EngineConfig::default(),
        );
        let labels: Vec<_> = statement
            .detail
            .iter()
            .map(|row| (row.date, row.category_label.as_str(), row.account_label.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (date(2024, 1, 10), "2.1 - Utilities", "1.3 Dinheiro"),
                (date(2024, 1, 20), "Sem categoria", "1.1 Bradesco"),
            ]
        );
    }

    #[test]
    fn totals_row_matches_identity() {
        let statement = StatementService::generate_from_ledger(
            &ledger(),
            YearMonth::new(2024, 1).unwrap(),
            &EngineConfig::default(),
        );
        let totals = &statement.totals;
        assert_eq!(
            totals.sum_of_final,
            totals.sum_of_initial + totals.sum_of_inflow - totals.sum_of_outflow
        );
        assert_eq!(totals.sum_of_final, dec!(620));
        let summed: Decimal = statement.per_account.iter().map(|r| r.final_balance).sum();
        assert_eq!(summed, totals.sum_of_final);
    }

    #[test]
    fn categorized_share_excludes_uncategorized_outflow() {
        let statement = StatementService::generate_from_ledger(
            &ledger(),
            YearMonth::new(2024, 1).unwrap(),
            &EngineConfig::default(),
        );
        assert_eq!(statement.total_outflow, dec!(380));
        assert_eq!(statement.categorized.len(), 1);
        assert_eq!(statement.categorized[0].total, dec!(300));
        assert!(statement.categorized[0].percentage < dec!(100));
    }

    #[test]
    fn configured_fallback_label_applies_to_any_tree() {
        let txns = vec![Transaction::new(
            date(2024, 1, 3),
            TransactionKind::Outflow,
            Account::Cora,
            dec!(15),
            "tarifa",
        )];
        let config = EngineConfig {
            fallback_category_label: "uncategorized".into(),
            ..EngineConfig::default()
        };
        let tree = CategoryTree::default().with_fallback_label("ignored");
        let statement =
            StatementService::generate(&txns, &tree, YearMonth::new(2024, 1).unwrap(), &config);
        assert_eq!(statement.detail[0].category_label, "uncategorized");
    }

    #[test]
    fn rows_follow_presentation_numbering() {
        let statement = StatementService::generate_from_ledger(
            &ledger(),
            YearMonth::new(2024, 1).unwrap(),
            &EngineConfig::default(),
        );
        let labels: Vec<_> = statement.per_account.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1.1 Bradesco", "1.2 Cora", "1.3 Dinheiro"]);
    }

    #[test]
    fn last_supported_month_generates_without_panicking() {
        let txns = vec![Transaction::new(
            NaiveDate::MAX,
            TransactionKind::Inflow,
            Account::Dinheiro,
            dec!(10),
            "fim",
        )];
        let month = YearMonth::containing(NaiveDate::MAX);
        let statement = StatementService::generate(
            &txns,
            &CategoryTree::default(),
            month,
            &EngineConfig::default(),
        );
        assert_eq!(statement.period.end, NaiveDate::MAX);
        assert_eq!(statement.totals.sum_of_final, dec!(10));
    }

    #[test]
    fn month_without_activity_carries_balances_forward() {
        let statement = StatementService::generate_from_ledger(
            &ledger(),
            YearMonth::new(2024, 2).unwrap(),
            &EngineConfig::default(),
        );
        let dinheiro = statement.row(Account::Dinheiro).unwrap();
        assert_eq!(dinheiro.initial, dec!(700));
        assert_eq!(dinheiro.final_balance, dec!(700));
        assert!(statement.detail.is_empty());
        assert!(statement.categorized.iter().all(|row| row.total.is_zero()));
    }
}
