//! Convenience result type alias for Liftoff.

use crate::error::AppError;

/// A specialized `Result` type for Liftoff operations.
///
/// Plugin hooks and host bootstrap steps all return this so that failures
/// flow through the `?` operator without per-crate conversions.
pub type AppResult<T> = Result<T, AppError>;
