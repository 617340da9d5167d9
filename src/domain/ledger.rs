use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    category::Category,
    common::{find_by_id, find_by_id_mut},
    transaction::{AuditRecord, Transaction},
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// In-memory snapshot of movements and categories handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub audits: Vec<AuditRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            transactions: Vec::new(),
            categories: Vec::new(),
            audits: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_audit(&mut self, audit: AuditRecord) {
        self.audits.push(audit);
        self.touch();
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        find_by_id_mut(&mut self.transactions, id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn audits_for(&self, movement_id: Uuid) -> impl Iterator<Item = &AuditRecord> {
        self.audits
            .iter()
            .filter(move |audit| audit.movement_id == movement_id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
