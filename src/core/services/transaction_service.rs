//! Write-path helpers for ledger movements.

use uuid::Uuid;

use crate::core::{CategoryTree, MutabilityGuard};
use crate::domain::{common::position_of, Ledger, Transaction};
use crate::errors::{EngineError, Result};

/// Validated add/update/remove over an in-memory ledger.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new, unapproved transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, mut transaction: Transaction) -> Result<Uuid> {
        Self::validate(ledger, &transaction)?;
        transaction.approved = false;
        let id = transaction.id;
        ledger.transactions.push(transaction);
        ledger.touch();
        Ok(id)
    }

    /// Applies `mutator` to an unapproved transaction; rejected changes leave it untouched.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let current = ledger
            .transaction(id)
            .ok_or(EngineError::TransactionNotFound(id))?;
        MutabilityGuard::ensure_mutable(current)?;

        let mut candidate = current.clone();
        mutator(&mut candidate);
        candidate.id = id;
        // Approval goes through `approve`, never through an edit.
        candidate.approved = false;
        Self::validate(ledger, &candidate)?;
        candidate.touch();

        if let Some(slot) = ledger.transaction_mut(id) {
            *slot = candidate;
        }
        ledger.touch();
        Ok(())
    }

    /// Removes an unapproved transaction, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<Transaction> {
        let idx = position_of(&ledger.transactions, id)
            .ok_or(EngineError::TransactionNotFound(id))?;
        MutabilityGuard::ensure_mutable(&ledger.transactions[idx])?;
        let removed = ledger.transactions.remove(idx);
        ledger.touch();
        Ok(removed)
    }

    /// Marks a transaction approved. Approving twice is a no-op.
    pub fn approve(ledger: &mut Ledger, id: Uuid) -> Result<()> {
        let txn = ledger
            .transaction_mut(id)
            .ok_or(EngineError::TransactionNotFound(id))?;
        if !txn.approved {
            txn.approved = true;
            txn.touch();
            tracing::info!(%id, "transaction approved");
        }
        ledger.touch();
        Ok(())
    }

    /// Secondary category to pre-select when a Tertiary one is picked.
    pub fn suggest_secondary(tree: &CategoryTree, tertiary_id: Uuid) -> Option<Uuid> {
        tree.secondary_ancestor_of(tertiary_id)
    }

    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }

    fn validate(ledger: &Ledger, transaction: &Transaction) -> Result<()> {
        if transaction.amount <= rust_decimal::Decimal::ZERO {
            return Err(EngineError::InvalidAmount(transaction.amount));
        }
        let Some(category_id) = transaction.category_id else {
            return Ok(());
        };
        let category = ledger
            .category(category_id)
            .ok_or(EngineError::CategoryNotFound(category_id))?;
        if category.kind != transaction.kind {
            return Err(EngineError::CategoryMismatch {
                category: category_id,
                reason: format!(
                    "{} category on {} transaction",
                    category.kind, transaction.kind
                ),
            });
        }
        if !category.is_assignable_to(transaction.kind) {
            return Err(EngineError::CategoryMismatch {
                category: category_id,
                reason: format!("{} categories only group others", category.level),
            });
        }
        Ok(())
    }
}
