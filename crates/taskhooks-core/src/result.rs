//! Convenience result type alias for taskhooks.

use crate::error::AppError;

/// A specialized `Result` type for taskhooks operations.
pub type AppResult<T> = Result<T, AppError>;
