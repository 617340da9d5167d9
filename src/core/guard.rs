use crate::{
    domain::Transaction,
    errors::{EngineError, Result},
};

/// Write-path gate: approved movements are frozen.
pub struct MutabilityGuard;

impl MutabilityGuard {
    pub fn can_mutate(transaction: &Transaction) -> bool {
        !transaction.approved
    }

    pub fn ensure_mutable(transaction: &Transaction) -> Result<()> {
        if Self::can_mutate(transaction) {
            Ok(())
        } else {
            tracing::warn!(id = %transaction.id, "rejected change to approved transaction");
            Err(EngineError::MutationForbidden(transaction.id))
        }
    }
}
