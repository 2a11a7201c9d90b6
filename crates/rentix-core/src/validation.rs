//! # Validation Module
//!
//! Input and rental-rule validation for Rentix.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input capture (rendering collaborator)                       │
//! │  ├── Widget-level limits (slider range, text length)                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Input validation (day count, query length)                        │
//! │  └── Rental rule validation (cap, balance)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CatalogStore                                                  │
//! │  └── Structural checks (car exists, car still available)               │
//! │                                                                         │
//! │  Defense in depth: commit re-validates even if the UI already did      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentix_core::credits::Credits;
//! use rentix_core::validation::{validate_days, validate_proposal};
//!
//! // Validate a day count before a cost recalculation
//! validate_days(3, 30).unwrap();
//!
//! // Validate a proposal against the cap and the balance
//! validate_proposal(Credits::new(300), Credits::new(400), Credits::new(500)).unwrap();
//! ```

use crate::credits::Credits;
use crate::error::{RentalError, RentalResult, ValidationError};
use crate::MAX_SEARCH_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a rental day count.
///
/// ## Rules
/// - Must be positive (> 0) - the strict choice: reject, never clamp
/// - Must not exceed `max_days`
///
/// ## Example
/// ```rust
/// use rentix_core::validation::validate_days;
///
/// assert!(validate_days(1, 30).is_ok());
/// assert!(validate_days(0, 30).is_err());
/// assert!(validate_days(31, 30).is_err());
/// ```
pub fn validate_days(days: u32, max_days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "days".to_string(),
        });
    }

    if days > max_days {
        return Err(ValidationError::OutOfRange {
            field: "days".to_string(),
            min: 1,
            max: max_days as i64,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches the whole available list)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Rental Rule Validators
// =============================================================================

/// Validates a rental proposal against the spending cap and the balance.
///
/// ## Precedence
/// The cap check runs FIRST and short-circuits. A 450-credit proposal on a
/// 500-credit balance reports `ExceedsRentalCap`, and a 450-credit proposal
/// on a 100-credit balance reports `ExceedsRentalCap` too - never both.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Detail screen: days slider moved                                       │
/// │                                                                         │
/// │  cost = daily_cost × days                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_proposal(cost, cap, balance) ← THIS FUNCTION                 │
/// │       │                                                                 │
/// │       ├── cost > cap?     → Err(ExceedsRentalCap)                      │
/// │       │                                                                 │
/// │       ├── cost > balance? → Err(InsufficientBalance)                   │
/// │       │                                                                 │
/// │       └── Ok → confirm button enabled                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_proposal(cost: Credits, cap: Credits, balance: Credits) -> RentalResult<()> {
    if cost > cap {
        return Err(RentalError::ExceedsRentalCap { cost, cap });
    }

    if cost > balance {
        return Err(RentalError::InsufficientBalance { cost, balance });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_days() {
        assert!(validate_days(1, 30).is_ok());
        assert!(validate_days(30, 30).is_ok());

        assert_eq!(
            validate_days(0, 30),
            Err(ValidationError::MustBePositive {
                field: "days".to_string()
            })
        );
        assert_eq!(
            validate_days(31, 30),
            Err(ValidationError::OutOfRange {
                field: "days".to_string(),
                min: 1,
                max: 30
            })
        );
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  bmw ").unwrap(), "bmw");
        assert_eq!(validate_search_query("").unwrap(), "");
    }

    #[test]
    fn test_validate_search_query_length() {
        assert!(validate_search_query(&"a".repeat(100)).is_ok());
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_proposal_within_cap_and_balance() {
        // 150/day × 2 days = 300 ≤ 400 and ≤ 500
        let cost = Credits::new(300);
        assert!(validate_proposal(cost, Credits::new(400), Credits::new(500)).is_ok());
    }

    #[test]
    fn test_proposal_over_cap_even_with_sufficient_balance() {
        // 150/day × 3 days = 450 > 400, although the balance (500) covers it
        let cost = Credits::new(450);
        let err = validate_proposal(cost, Credits::new(400), Credits::new(500)).unwrap_err();
        assert_eq!(
            err,
            RentalError::ExceedsRentalCap {
                cost,
                cap: Credits::new(400)
            }
        );
    }

    #[test]
    fn test_proposal_over_balance() {
        // balance 100, cost 150
        let cost = Credits::new(150);
        let err = validate_proposal(cost, Credits::new(400), Credits::new(100)).unwrap_err();
        assert_eq!(
            err,
            RentalError::InsufficientBalance {
                cost,
                balance: Credits::new(100)
            }
        );
    }

    #[test]
    fn test_cap_check_short_circuits_balance_check() {
        // Both violated: the cap is reported, never the balance
        let cost = Credits::new(450);
        let err = validate_proposal(cost, Credits::new(400), Credits::new(100)).unwrap_err();
        assert!(matches!(err, RentalError::ExceedsRentalCap { .. }));
    }

    #[test]
    fn test_proposal_exactly_at_cap_and_balance() {
        let cost = Credits::new(400);
        assert!(validate_proposal(cost, Credits::new(400), Credits::new(400)).is_ok());
    }
}
