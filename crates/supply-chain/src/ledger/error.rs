use super::Collection;
use crate::model::{DocumentId, Role};
use actor_framework::FrameworkError;

/// Everything a ledger read or write can fail with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("Not enough quantity available.")]
    InsufficientQuantity { requested: u32, available: u32 },
    #[error("Record {0} changed while it was being updated")]
    Conflict(DocumentId),
    #[error("Record not found: {0}")]
    NotFound(DocumentId),
    #[error("{role} may not write to {collection}")]
    Forbidden { role: Role, collection: Collection },
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl LedgerError {
    /// True when the write was refused for the shape of its payload.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::EmptyField(_) | LedgerError::NotPositive(_) | LedgerError::Negative(_)
        )
    }
}

impl From<FrameworkError> for LedgerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => LedgerError::NotFound(id.into()),
            other => other
                .into_entity_error::<LedgerError>()
                .unwrap_or_else(|e| LedgerError::Unavailable(e.to_string())),
        }
    }
}
