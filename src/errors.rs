use std::result::Result as StdResult;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

/// Failures raised at the write boundary and while loading configuration.
///
/// The aggregators themselves never fail; they degrade to zero or fallback values.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Transaction {0} is approved and can no longer be changed")]
    MutationForbidden(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),
    #[error("Category {category} cannot be assigned: {reason}")]
    CategoryMismatch { category: Uuid, reason: String },
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("Invalid category hierarchy: {0}")]
    InvalidHierarchy(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, EngineError>;
