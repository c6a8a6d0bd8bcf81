//! Error-handling policies applied explicitly at each call site
//!
//! `best_effort` logs and discards a failure; `propagating` logs and hands the
//! failure back to the caller.

use tracing::error;

use crate::domain::DomainError;

/// Logs a failure and discards it
pub fn best_effort<T>(operation: &str, result: Result<T, DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(operation, error = %e, "Best-effort operation failed");
            None
        }
    }
}

/// Logs a failure and returns it unchanged
pub fn propagating<T>(operation: &str, result: Result<T, DomainError>) -> Result<T, DomainError> {
    if let Err(e) = &result {
        error!(operation, error = %e, "Operation failed");
    }
    result
}
