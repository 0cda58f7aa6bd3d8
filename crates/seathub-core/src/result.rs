//! Convenience result type alias for SeatHub.

use crate::error::AppError;

/// A specialized `Result` type for SeatHub operations.
pub type AppResult<T> = Result<T, AppError>;
