//! Field checks applied before any record is written.
use super::LedgerError;

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn positive_quantity(field: &'static str, value: u32) -> Result<(), LedgerError> {
    if value == 0 {
        return Err(LedgerError::NotPositive(field));
    }
    Ok(())
}

/// NaN and infinities are rejected along with zero and negatives.
pub(crate) fn positive_price(field: &'static str, value: f64) -> Result<(), LedgerError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(LedgerError::NotPositive(field));
    }
    Ok(())
}

pub(crate) fn non_negative_price(field: &'static str, value: f64) -> Result<(), LedgerError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(LedgerError::Negative(field));
    }
    Ok(())
}
