//! # Error Types
//!
//! Domain-specific error types for printworks-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  printworks-core errors (this file)                                    │
//! │  ├── CoreError        - Pricing / order failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  printworks-quote errors (binary)                                      │
//! │  ├── ArgsError        - Bad command line                               │
//! │  └── ConfigError      - Bad config file / environment                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError::InvalidInput → caller decides      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine never swallows an error. A page count of `"abc"` or `0`
//! surfaces as [`CoreError::InvalidInput`] so it can never be persisted or
//! emailed as a nonsense total.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing and order errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order field failed validation.
    ///
    /// ## When This Occurs
    /// - `page_amount` or `book_quantity` is missing, non-numeric,
    ///   fractional, zero or negative
    /// - A required customer detail is empty or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A rate card is malformed (unsorted tiers, negative or oversized rates).
    #[error("Invalid rate card: {reason}")]
    InvalidRateCard { reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pricing runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. not a number, not an email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field, for pointing the user at the right input.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
