//! # Error Types
//!
//! Domain-specific error types for rentix-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rentix-core errors (this file)                                        │
//! │  ├── RentalError      - Rental rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → RentalError → user-facing message             │
//! │        (rentix-session maps each variant to a transient message)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error variants (car id, cost, cap, ...)
//! 3. Errors are enum variants, never String
//! 4. Every error is an expected, recoverable condition - none are fatal,
//!    and every failed operation leaves state unchanged

use thiserror::Error;

use crate::credits::Credits;

// =============================================================================
// Rental Error
// =============================================================================

/// Rental rule violations and catalog lookup failures.
///
/// These should be caught by the session layer and translated to
/// user-friendly messages.
#[derive(Debug, Error, PartialEq)]
pub enum RentalError {
    /// Car id is not in the base catalog.
    #[error("Car not found: {0}")]
    CarNotFound(String),

    /// Car exists but is tied to an active rental record.
    ///
    /// ## When This Occurs
    /// - Committing a rental for a car another session just took
    /// - Stale UI state proposing a car that left the available list
    #[error("Car {0} is already rented")]
    AlreadyRented(String),

    /// Proposal cost exceeds the per-rental spending cap.
    ///
    /// Checked BEFORE the balance: a proposal over the cap reports this
    /// even when the balance would also be insufficient.
    #[error("Rental cost {cost} exceeds the per-rental cap of {cap}")]
    ExceedsRentalCap { cost: Credits, cap: Credits },

    /// Proposal cost exceeds the session's remaining balance.
    #[error("Rental cost {cost} exceeds the remaining balance of {balance}")]
    InsufficientBalance { cost: Credits, balance: Credits },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before rental rules run.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================
