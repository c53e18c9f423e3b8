use super::LedgerError;
use crate::model::DocumentId;

/// Uninhabited payload for operations a collection does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {}

/// Atomic quantity operations, applied inside the owning actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    /// Subtract `amount`, but only if the stored quantity still equals
    /// `expected` (the value the caller read).
    Decrement { expected: u32, amount: u32 },
}

impl QuantityAction {
    /// Applies the action to `quantity` and returns the new value.
    /// On error `quantity` is untouched.
    pub(crate) fn apply(self, id: &DocumentId, quantity: &mut u32) -> Result<u32, LedgerError> {
        match self {
            QuantityAction::Decrement { expected, amount } => {
                if *quantity != expected {
                    return Err(LedgerError::Conflict(id.clone()));
                }
                let remaining =
                    quantity
                        .checked_sub(amount)
                        .ok_or(LedgerError::InsufficientQuantity {
                            requested: amount,
                            available: *quantity,
                        })?;
                *quantity = remaining;
                Ok(remaining)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decrement(expected: u32, amount: u32) -> QuantityAction {
        QuantityAction::Decrement { expected, amount }
    }

    #[test]
    fn test_decrement_within_stock() {
        let mut quantity = 10;
        assert_eq!(decrement(10, 4).apply(&"c".into(), &mut quantity), Ok(6));
        assert_eq!(quantity, 6);
        assert_eq!(decrement(6, 6).apply(&"c".into(), &mut quantity), Ok(0));
    }

    #[test]
    fn test_decrement_past_zero_leaves_quantity() {
        let mut quantity = 10;
        let err = decrement(10, 15).apply(&"c".into(), &mut quantity);
        assert_eq!(
            err,
            Err(LedgerError::InsufficientQuantity {
                requested: 15,
                available: 10
            })
        );
        assert_eq!(quantity, 10);
    }

    #[test]
    fn test_stale_expectation_is_a_conflict() {
        let mut quantity = 8;
        let err = decrement(10, 1).apply(&"crop_1".into(), &mut quantity);
        assert_eq!(err, Err(LedgerError::Conflict("crop_1".into())));
        assert_eq!(quantity, 8);
    }
}
