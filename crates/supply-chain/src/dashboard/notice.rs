use crate::ledger::LedgerError;
use std::fmt::Display;

/// A message a dashboard shows in place of a failed read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The write was refused for its payload or the acting role. Nothing changed.
    Refused(String),
    /// Must be acknowledged before continuing.
    Alert(String),
    /// The store could not complete the request.
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Refused(m) | Notice::Alert(m) | Notice::Failed(m) => m,
        }
    }
}

impl From<LedgerError> for Notice {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InsufficientQuantity { .. } => Notice::Alert(e.to_string()),
            LedgerError::Forbidden { .. } => Notice::Refused(e.to_string()),
            e if e.is_validation() => Notice::Refused(e.to_string()),
            e => Notice::Failed(e.to_string()),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_quantity_is_an_alert() {
        let notice = Notice::from(LedgerError::InsufficientQuantity {
            requested: 15,
            available: 10,
        });
        assert_eq!(notice, Notice::Alert("Not enough quantity available.".into()));
    }

    #[test]
    fn test_refusals_and_failures() {
        assert!(matches!(
            Notice::from(LedgerError::EmptyField("name")),
            Notice::Refused(_)
        ));
        assert!(matches!(
            Notice::from(LedgerError::Unavailable("Actor closed".into())),
            Notice::Failed(_)
        ));
        assert_eq!(
            Notice::from(LedgerError::NotFound("inventory_3".into())).message(),
            "Record not found: inventory_3"
        );
    }
}
