//! # Payment Gate
//!
//! Validates the value attached to a creation call. The fee is fixed
//! and read-only at call time, so validation is a single comparison,
//! but it must run before any state mutation: an underpaid call is
//! rejected before a record can be half-created.

use super::errors::GardenError;
use garden_types::Amount;

/// Checks that `amount_sent` covers `required_fee`.
///
/// Returns the excess to refund to the caller (0 for an exact payment).
///
/// # Errors
/// - `InsufficientPayment` if `amount_sent < required_fee`
pub fn validate(amount_sent: Amount, required_fee: Amount) -> Result<Amount, GardenError> {
    if amount_sent < required_fee {
        return Err(GardenError::InsufficientPayment {
            sent: amount_sent,
            required: required_fee,
        });
    }
    Ok(amount_sent - required_fee)
}
