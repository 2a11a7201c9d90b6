//! # rentix-core: Pure Business Logic for Rentix
//!
//! This crate is the **heart** of Rentix. It contains the catalog, the
//! rental rules, and the credit arithmetic as pure logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rentix Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering Collaborator (UI)                    │   │
//! │  │    Browse screen ──► Detail screen ──► Toast / Snackbar        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events in / snapshots out              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rentix-session                               │   │
//! │  │    search, sort, next, favorite_toggle, commit_rental, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rentix-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  credits  │  │  catalog  │  │ validation│  │   │
//! │  │   │    Car    │  │  Credits  │  │ Catalog   │  │   rules   │  │   │
//! │  │   │  Rental   │  │   math    │  │   Store   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, RentalRecord, SortKey)
//! - [`credits`] - Credits type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Rental rule validation
//! - [`catalog`] - The in-memory catalog store and its shared wrapper
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Credits**: All amounts are whole credits (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rentix_core::credits::Credits;
//! use rentix_core::validation::validate_proposal;
//! use rentix_core::{DEFAULT_RENTAL_CAP, DEFAULT_STARTING_BALANCE};
//!
//! // 150 credits/day for 2 days
//! let cost = Credits::new(150).for_days(2);
//! assert_eq!(cost.amount(), 300);
//!
//! // 300 <= cap (400) and <= balance (500): the proposal is valid
//! assert!(validate_proposal(cost, DEFAULT_RENTAL_CAP, DEFAULT_STARTING_BALANCE).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod credits;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rentix_core::Credits` instead of
// `use rentix_core::credits::Credits`

pub use catalog::{default_catalog, CatalogStore, SharedCatalog};
pub use credits::Credits;
pub use error::{RentalError, RentalResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Starting balance granted to a new browsing session.
///
/// ## Why a constant?
/// Sessions take their balance from `SessionConfig`, which defaults to this
/// value but can be overridden for tests and demos.
pub const DEFAULT_STARTING_BALANCE: Credits = Credits::new(500);

/// Maximum total cost permitted for a single rental transaction.
///
/// ## Business Reason
/// The cap applies per rental, independent of the remaining balance. A
/// proposal over the cap is rejected even when the balance would cover it.
pub const DEFAULT_RENTAL_CAP: Credits = Credits::new(400);

/// Maximum day count accepted for a single rental.
///
/// ## Business Reason
/// Prevents accidental over-booking (e.g., typing 100 instead of 10).
pub const MAX_RENTAL_DAYS: u32 = 30;

/// Maximum length of a search query, in characters.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
