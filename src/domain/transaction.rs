//! Dated ledger movements and the audit records attached to them.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{account::Account, common::*},
    errors::EngineError,
};

/// Direction of a movement. Also classifies which movements a category applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionKind {
    Inflow,
    Outflow,
}

impl TransactionKind {
    /// Multiplier applied to the stored magnitude when accumulating balances.
    pub fn sign(self) -> Decimal {
        match self {
            TransactionKind::Inflow => Decimal::ONE,
            TransactionKind::Outflow => Decimal::NEGATIVE_ONE,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Inflow => "Inflow",
            TransactionKind::Outflow => "Outflow",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inflow" | "entrada" => Ok(TransactionKind::Inflow),
            "outflow" | "saida" | "saída" => Ok(TransactionKind::Outflow),
            other => Err(EngineError::InvalidInput(format!(
                "unknown transaction kind `{other}`"
            ))),
        }
    }
}

/// A single movement of money on one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub account: Account,
    /// Positive magnitude; the sign comes from `kind`.
    pub amount: Decimal,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        account: Account,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            account,
            amount,
            description: description.into(),
            category_id: None,
            approved: false,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn signed_amount(&self) -> Decimal {
        self.kind.sign() * self.amount
    }

    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionKind::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionKind::Outflow
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} {} {} ({})",
            self.date, self.kind, self.amount, self.account, self.description
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuditStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Reviewer verdict on a movement. Kept alongside the ledger for consumers;
/// the aggregation and the write guard only look at `Transaction::approved`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditRecord {
    pub movement_id: Uuid,
    pub auditor_id: Uuid,
    #[serde(default)]
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AuditRecord {
    pub fn new(movement_id: Uuid, auditor_id: Uuid, status: AuditStatus) -> Self {
        Self {
            movement_id,
            auditor_id,
            status,
            comment: None,
        }
    }
}
