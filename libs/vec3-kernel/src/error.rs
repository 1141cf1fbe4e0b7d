//! # Error Types
//!
//! Error types for kernel operations. Only two things can go wrong in the
//! kernel: a strict operation divides by the length of a zero vector, or a
//! configuration is built from an unusable tolerance.
//!
//! ## Error Policy
//!
//! - Strict (`*_unsafe`) operations never substitute a fallback value
//! - Unit-vector preconditions are not checked and never produce an error

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during kernel operations.
///
/// ## Example
///
/// ```rust
/// use vec3_kernel::{metric, KernelError, Vec3};
///
/// match metric::inverse_length_unsafe(Vec3::ZERO) {
///     Ok(inv) => println!("1/|v| = {inv}"),
///     Err(KernelError::DivisionByZero { operation }) => eprintln!("{operation} on zero vector"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KernelError {
    /// A strict operation divided by the length of a zero vector.
    ///
    /// Contains the name of the failing operation.
    #[error("Division by zero in '{operation}': operand has zero length")]
    DivisionByZero {
        /// Name of the strict operation that failed
        operation: &'static str,
    },

    /// A tolerance band was negative, NaN or infinite.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),
}

impl KernelError {
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }
}

impl From<ConfigError> for KernelError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidTolerance(value) => Self::InvalidTolerance(value),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

// =============================================================================
// TESTS
// =============================================================================
