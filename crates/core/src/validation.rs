//! Write-side validation rules for property payloads.
//!
//! Pure checks with no side effects; the service layer runs them before any
//! persistence call. Uniqueness is not here — it needs a view of the
//! persisted set and lives behind the property repository.

use crate::error::CoreError;
use crate::types::Money;

/// Unwrap a request payload, rejecting an absent (JSON `null`) body.
pub fn require_payload<T>(payload: Option<T>, what: &str) -> Result<T, CoreError> {
    payload.ok_or_else(|| CoreError::Validation(format!("{what} payload is required")))
}

/// A property name must be present and non-empty. Returns the name.
///
/// No trimming: a whitespace-only name passes, matching the persisted
/// uniqueness comparison which is also exact.
pub fn require_name(name: Option<&str>) -> Result<&str, CoreError> {
    match name {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(CoreError::Validation(
            "property name is required".to_string(),
        )),
    }
}

/// A property price must be present and strictly positive.
pub fn require_positive_price(price: Option<Money>) -> Result<Money, CoreError> {
    match price {
        Some(p) if p > Money::ZERO => Ok(p),
        _ => Err(CoreError::Validation(
            "property price must be greater than zero".to_string(),
        )),
    }
}
