pub mod balance_service;
pub mod expense_service;
pub mod statement_service;
pub mod transaction_service;
pub mod trend_service;

pub use balance_service::BalanceService;
pub use expense_service::ExpenseService;
pub use statement_service::StatementService;
pub use transaction_service::TransactionService;
pub use trend_service::TrendService;
