pub mod account;
pub mod category;
pub mod common;
pub mod ledger;
pub mod period;
pub mod report;
pub mod transaction;

pub use account::Account;
pub use category::{Category, CategoryLevel};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use ledger::Ledger;
pub use period::{Period, YearMonth};
pub use report::{
    AccountBalances, BalanceKey, BalanceSnapshot, BalanceteRow, DetailRow, ExpenseBreakdown,
    ExpenseRow, Granularity, Statement, TotalsRow, TrendBucket, TrendSeries,
};
pub use transaction::{AuditRecord, AuditStatus, Transaction, TransactionKind};
