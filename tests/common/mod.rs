#![allow(dead_code)]

use balancete_core::domain::{
    Account, Category, CategoryLevel, Ledger, Transaction, TransactionKind,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn inflow(day: NaiveDate, account: Account, amount: Decimal) -> Transaction {
    Transaction::new(day, TransactionKind::Inflow, account, amount, "entrada")
}

pub fn outflow(day: NaiveDate, account: Account, amount: Decimal) -> Transaction {
    Transaction::new(day, TransactionKind::Outflow, account, amount, "saída")
}

/// Category ids of the fixture chart of accounts.
pub struct Chart {
    pub income: Uuid,
    pub salary: Uuid,
    pub expenses: Uuid,
    pub utilities: Uuid,
    pub power: Uuid,
    pub groceries: Uuid,
}

/// Seeds a ledger with a small three-tier chart of categories.
pub fn charted_ledger(name: &str) -> (Ledger, Chart) {
    let mut ledger = Ledger::new(name);
    let income = Category::new("1", "Receitas", CategoryLevel::Primary, TransactionKind::Inflow);
    let salary = Category::new("1.1", "Salário", CategoryLevel::Secondary, TransactionKind::Inflow)
        .with_parent(income.id);
    let expenses = Category::new("2", "Despesas", CategoryLevel::Primary, TransactionKind::Outflow);
    let utilities =
        Category::new("2.1", "Utilities", CategoryLevel::Secondary, TransactionKind::Outflow)
            .with_parent(expenses.id);
    let power = Category::new("2.1.1", "Energia", CategoryLevel::Tertiary, TransactionKind::Outflow)
        .with_parent(utilities.id);
    let groceries =
        Category::new("2.2", "Mercado", CategoryLevel::Secondary, TransactionKind::Outflow)
            .with_parent(expenses.id);

    let chart = Chart {
        income: ledger.add_category(income),
        salary: ledger.add_category(salary),
        expenses: ledger.add_category(expenses),
        utilities: ledger.add_category(utilities),
        power: ledger.add_category(power),
        groceries: ledger.add_category(groceries),
    };
    (ledger, chart)
}
