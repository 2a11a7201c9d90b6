//! # Credits Module
//!
//! Provides the `Credits` type for handling rental amounts safely.
//!
//! ## Why Integer Credits?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Rentix amounts are whole credits: a daily rate times a day count is   │
//! │  always an exact integer, and a balance deduction is exact too.        │
//! │  There is never a reason to touch a float for money-like values.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentix_core::credits::Credits;
//!
//! let daily = Credits::new(150);
//! let total = daily.for_days(3);       // 450 credits
//! assert_eq!(total.amount(), 450);
//!
//! let balance = Credits::new(500);
//! assert!(total > Credits::new(400));  // over the rental cap
//! assert!(total <= balance);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Credits Type
// =============================================================================

/// A whole-credit amount: daily rates, rental totals, and balances.
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic intermediate values may dip negative;
///   domain rules (never deduct past zero) are enforced by validation, not
///   by the type.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serializes as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Credits(i64);

impl Credits {
    /// Creates a credit amount.
    ///
    /// ## Example
    /// ```rust
    /// use rentix_core::credits::Credits;
    ///
    /// let balance = Credits::new(500);
    /// assert_eq!(balance.amount(), 500);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Credits(amount)
    }

    /// Returns the raw amount in credits.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero credits.
    #[inline]
    pub const fn zero() -> Self {
        Credits(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the amount is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the amount is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a daily rate by a day count.
    ///
    /// This is THE rental cost formula: `total = daily_cost × days`, frozen
    /// into the `RentalRecord` at commit time.
    ///
    /// ## Example
    /// ```rust
    /// use rentix_core::credits::Credits;
    ///
    /// let daily = Credits::new(150);
    /// assert_eq!(daily.for_days(3).amount(), 450);
    /// ```
    #[inline]
    pub const fn for_days(&self, days: u32) -> Self {
        Credits(self.0 * days as i64)
    }

    /// Saturating subtraction that never goes below zero.
    ///
    /// Balances must never be negative; callers validate before deducting,
    /// and this keeps the arithmetic itself safe as well.
    #[inline]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        let result = self.0 - other.0;
        if result < 0 {
            Credits(0)
        } else {
            Credits(result)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows amounts in a human-readable format.
///
/// ## Note
/// This is for debugging and messages. The rendering collaborator formats
/// amounts for actual UI display to handle localization.
impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} credits", self.0)
    }
}

/// Default is zero credits.
impl Default for Credits {
    fn default() -> Self {
        Credits::zero()
    }
}

/// Addition of two Credits values.
impl Add for Credits {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Credits(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Credits {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Credits values.
impl Sub for Credits {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Credits(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Credits {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for day-count style calculations).
impl Mul<i64> for Credits {
    type Output = Self;

    #[inline]
    fn mul(self, n: i64) -> Self {
        Credits(self.0 * n)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let c = Credits::new(500);
        assert_eq!(c.amount(), 500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Credits::new(400)), "400 credits");
        assert_eq!(format!("{}", Credits::zero()), "0 credits");
        assert_eq!(format!("{}", Credits::new(-50)), "-50 credits");
    }

    #[test]
    fn test_arithmetic() {
        let a = Credits::new(500);
        let b = Credits::new(300);

        assert_eq!((a + b).amount(), 800);
        assert_eq!((a - b).amount(), 200);
        let tripled: Credits = b * 3;
        assert_eq!(tripled.amount(), 900);
    }

    #[test]
    fn test_for_days() {
        // The worked rental examples: 150/day
        let daily = Credits::new(150);
        assert_eq!(daily.for_days(1).amount(), 150);
        assert_eq!(daily.for_days(2).amount(), 300);
        assert_eq!(daily.for_days(3).amount(), 450);
    }

    #[test]
    fn test_saturating_sub() {
        let balance = Credits::new(100);
        assert_eq!(balance.saturating_sub(Credits::new(150)).amount(), 0);
        assert_eq!(balance.saturating_sub(Credits::new(40)).amount(), 60);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Credits::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Credits::new(1).is_positive());
        assert!(Credits::new(-1).is_negative());
    }

    #[test]
    fn test_ordering_against_cap_and_balance() {
        let cost = Credits::new(450);
        assert!(cost > Credits::new(400)); // over the cap
        assert!(cost <= Credits::new(500)); // within the balance
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Credits::new(150)).unwrap();
        assert_eq!(json, "150");
    }
}
