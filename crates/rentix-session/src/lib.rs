//! # rentix-session: Browsing Session Layer for Rentix
//!
//! One [`BrowsingSession`] per active UI screen: it owns the user-facing
//! derived state (filtered view, cursor, balance, proposal) and drives the
//! shared [`rentix_core::CatalogStore`] underneath.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event ──► BrowsingSession method ──► reads/mutates SharedCatalog   │
//! │                        │                                                │
//! │                        ▼                                                │
//! │       recompute filtered view ──► snapshot() + take_message()          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │             rendering collaborator draws the new state                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The browsing session and its event surface
//! - [`snapshot`] - Serde DTOs handed to the rendering collaborator
//! - [`config`] - Session constants (starting balance, rental cap)
//! - [`prefs`] - The preference-storage collaborator seam
//!
//! ## Lifecycle
//! The catalog store is created once and lives for the process; sessions
//! are created per screen-visit and discarded when the screen closes. No
//! background timers, no TTL expiry, no async.

pub mod config;
pub mod prefs;
pub mod session;
pub mod snapshot;

pub use config::SessionConfig;
pub use prefs::{MemoryPrefs, ThemePrefs};
pub use session::BrowsingSession;
pub use snapshot::SessionSnapshot;
