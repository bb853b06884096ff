//! Result type aliases for Curio.

use crate::CurioError;

/// A specialized `Result` type for Curio operations.
pub type CurioResult<T> = Result<T, CurioError>;
