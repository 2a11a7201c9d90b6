//! # Browsing Session
//!
//! The steady-state browsing loop plus the rental proposal sub-flow.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session State Machine                               │
//! │                                                                         │
//! │  ┌──────────────┐   view car / set days    ┌──────────────────┐        │
//! │  │   Browsing   │─────────────────────────►│  Proposal        │        │
//! │  │  (steady     │                          │  (selected_days  │        │
//! │  │   state)     │◄─────────────────────────│   + current car) │        │
//! │  └──────────────┘   commit_rental OK /     └──────────────────┘        │
//! │                     cancel_proposal                                     │
//! │                                                                         │
//! │  commit_rental is the ONLY path that lowers the balance.               │
//! │  Nothing ever raises it: committed rentals are final in-session.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Re-entrancy
//! Every method runs to completion synchronously within a single event-loop
//! turn; there is no await point and no callback back into the session.

use std::cmp::Ordering;

use tracing::debug;

use rentix_core::validation::{validate_days, validate_proposal, validate_search_query};
use rentix_core::{Car, Credits, RentalError, RentalRecord, RentalResult, SharedCatalog, SortKey};

use crate::config::SessionConfig;
use crate::prefs::ThemePrefs;
use crate::snapshot::SessionSnapshot;

// =============================================================================
// Browsing Session
// =============================================================================

/// One browsing session: derived view state, cursor, balance, and the
/// in-progress rental proposal.
///
/// ## Ownership
/// The catalog store is injected (shared, process-lifetime); the session
/// owns everything else and is discarded when its screen closes.
pub struct BrowsingSession {
    catalog: SharedCatalog,
    config: SessionConfig,
    prefs: Box<dyn ThemePrefs>,

    balance: Credits,
    search_query: String,
    sort_key: SortKey,
    filtered_view: Vec<Car>,
    cursor: usize,
    selected_days: u32,
    is_dark_theme: bool,
    message: Option<String>,
}

impl BrowsingSession {
    /// Creates a session over a shared catalog.
    ///
    /// The theme flag is loaded once from the preference collaborator; the
    /// balance starts at the configured value and only ever moves down.
    pub fn new(catalog: SharedCatalog, config: SessionConfig, prefs: Box<dyn ThemePrefs>) -> Self {
        let is_dark_theme = prefs.load_bool(&config.theme_pref_key);
        let balance = config.starting_balance;

        let mut session = BrowsingSession {
            catalog,
            config,
            prefs,
            balance,
            search_query: String::new(),
            sort_key: SortKey::default(),
            filtered_view: Vec::new(),
            cursor: 0,
            selected_days: 1,
            is_dark_theme,
            message: None,
        };
        session.recompute_view();
        session
    }

    // =========================================================================
    // Browsing Events
    // =========================================================================

    /// Applies a search query: case-insensitive substring match against
    /// name OR model; an empty query matches all. Resets the cursor.
    pub fn search(&mut self, query: &str) -> RentalResult<()> {
        debug!(query = %query, "search");

        self.search_query = validate_search_query(query)?;
        self.cursor = 0;
        self.recompute_view();
        Ok(())
    }

    /// Applies a sort key and re-derives the view. Resets the cursor.
    pub fn sort(&mut self, key: SortKey) {
        debug!(key = ?key, "sort");

        self.sort_key = key;
        self.cursor = 0;
        self.recompute_view();
    }

    /// Advances the browsing cursor, wrapping modulo the view length.
    /// No-op on an empty view.
    pub fn next(&mut self) {
        debug!("next");

        if !self.filtered_view.is_empty() {
            self.cursor = (self.cursor + 1) % self.filtered_view.len();
        }
    }

    /// The car under the cursor, if the view is non-empty.
    pub fn current_car(&self) -> Option<&Car> {
        self.filtered_view.get(self.cursor)
    }

    /// Toggles the favorite state of the current car and emits an
    /// "Added/Removed {name}" message.
    ///
    /// ## Returns
    /// The new state (`Some(true)` = now favorited), or `None` when the
    /// view is empty.
    pub fn favorite_toggle(&mut self) -> Option<bool> {
        let car = self.current_car()?.clone();
        debug!(car_id = %car.id, "favorite_toggle");

        match self.catalog.with_catalog_mut(|c| c.toggle_favorite(&car.id)) {
            Ok(added) => {
                self.message = Some(if added {
                    format!("Added {} to favorites", car.name)
                } else {
                    format!("Removed {} from favorites", car.name)
                });
                Some(added)
            }
            // The current car came out of the view, so it exists in the
            // base catalog; a failure here means the stores diverged.
            Err(err) => {
                self.message = Some(user_message(&err));
                None
            }
        }
    }

    /// Favorited cars, in base-catalog order.
    pub fn favorite_cars(&self) -> Vec<Car> {
        self.catalog.with_catalog(|c| c.favorite_cars())
    }

    // =========================================================================
    // Proposal Events
    // =========================================================================

    /// Sets the proposed rental length.
    ///
    /// Rejects (never clamps) a non-positive or over-limit day count.
    pub fn set_selected_days(&mut self, days: u32) -> RentalResult<()> {
        debug!(days = %days, "set_selected_days");

        validate_days(days, self.config.max_rental_days)?;
        self.selected_days = days;
        Ok(())
    }

    /// Proposal cost for the current car: daily cost × selected days.
    /// Zero when the view is empty.
    pub fn proposed_cost(&self) -> Credits {
        self.current_car()
            .map(|car| car.daily_cost.for_days(self.selected_days))
            .unwrap_or_default()
    }

    /// Validates a proposal against the cap and the balance.
    ///
    /// The cap check runs first and short-circuits: an over-cap proposal
    /// reports `ExceedsRentalCap` even when the balance is also too low.
    pub fn validate_proposal(&self, car: &Car, days: u32) -> RentalResult<()> {
        validate_proposal(
            car.daily_cost.for_days(days),
            self.config.rental_cap,
            self.balance,
        )
    }

    /// Commits the current proposal.
    ///
    /// Re-validates first (defense against stale UI state), then rents
    /// through the catalog. On success the total cost is deducted from the
    /// balance - the only balance-lowering path in the system - the day
    /// count resets, and the view is re-derived without the rented car.
    /// On any failure state is left untouched and a user-facing message is
    /// emitted.
    pub fn commit_rental(&mut self) -> RentalResult<RentalRecord> {
        let car = match self.current_car() {
            Some(car) => car.clone(),
            // Defensive: the UI disables the rent action on an empty view.
            None => return Err(RentalError::CarNotFound("no car in view".to_string())),
        };
        let days = self.selected_days;
        debug!(car_id = %car.id, days = %days, "commit_rental");

        if let Err(err) = self.validate_proposal(&car, days) {
            self.message = Some(user_message(&err));
            return Err(err);
        }

        match self.catalog.with_catalog_mut(|c| c.rent(&car.id, days)) {
            Ok(record) => {
                self.balance -= record.total_cost;
                self.selected_days = 1;
                self.recompute_view();
                self.message = Some(format!(
                    "Booked {} for {} days, -{} credits",
                    car.name,
                    record.days,
                    record.total_cost.amount()
                ));
                Ok(record)
            }
            Err(err) => {
                self.message = Some(user_message(&err));
                Err(err)
            }
        }
    }

    /// Discards the in-progress proposal. Costs nothing: commit is the
    /// only state-changing step, so there is nothing to roll back.
    pub fn cancel_proposal(&mut self) {
        debug!("cancel_proposal");
        self.selected_days = 1;
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Flips the theme flag and persists it through the preference
    /// collaborator. Returns the new state.
    pub fn toggle_theme(&mut self) -> bool {
        self.is_dark_theme = !self.is_dark_theme;
        debug!(is_dark = %self.is_dark_theme, "toggle_theme");

        let key = self.config.theme_pref_key.clone();
        self.prefs.save_bool(&key, self.is_dark_theme);
        self.is_dark_theme
    }

    // =========================================================================
    // Observed State
    // =========================================================================

    pub fn balance(&self) -> Credits {
        self.balance
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn filtered_view(&self) -> &[Car] {
        &self.filtered_view
    }

    pub fn selected_days(&self) -> u32 {
        self.selected_days
    }

    pub fn is_dark_theme(&self) -> bool {
        self.is_dark_theme
    }

    /// Takes the pending transient message, clearing it.
    ///
    /// One-shot by design: the notification collaborator shows each
    /// message exactly once.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    /// The full render-ready state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let proposal_error = self
            .current_car()
            .and_then(|car| self.validate_proposal(car, self.selected_days).err());

        SessionSnapshot {
            balance: self.balance,
            current_car: self.current_car().cloned(),
            filtered_view: self.filtered_view.clone(),
            favorite_cars: self.favorite_cars(),
            is_dark_theme: self.is_dark_theme,
            selected_days: self.selected_days,
            total_cost: self.proposed_cost(),
            is_proposal_valid: self.current_car().is_some() && proposal_error.is_none(),
            proposal_error: proposal_error.map(|err| user_message(&err)),
            message: self.message.clone(),
        }
    }

    // =========================================================================
    // View Derivation
    // =========================================================================

    /// Re-derives `filtered_view = sort(filter(available))` from the
    /// catalog. Always starts from the live available list, so no stale
    /// ordering accumulates across events.
    fn recompute_view(&mut self) {
        let available = self.catalog.with_catalog(|c| c.available_cars().to_vec());

        let query = self.search_query.to_lowercase();
        let mut view: Vec<Car> = if query.is_empty() {
            available
        } else {
            available
                .into_iter()
                .filter(|car| {
                    car.name.to_lowercase().contains(&query)
                        || car.model.to_lowercase().contains(&query)
                })
                .collect()
        };

        // Vec::sort_by is stable: ties keep their prior relative order.
        match self.sort_key {
            SortKey::RatingDesc => view.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortKey::YearDesc => view.sort_by(|a, b| b.year.cmp(&a.year)),
            SortKey::CostAsc => view.sort_by(|a, b| a.daily_cost.cmp(&b.daily_cost)),
        }

        self.filtered_view = view;

        // Keep the cursor meaningful when availability shrinks under it.
        if self.filtered_view.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor %= self.filtered_view.len();
        }
    }
}

// =============================================================================
// Error → User Message Mapping
// =============================================================================

/// Maps a domain error to the transient message the user sees.
fn user_message(err: &RentalError) -> String {
    match err {
        RentalError::CarNotFound(_) => "Car not found".to_string(),
        RentalError::AlreadyRented(_) => "This car is already rented".to_string(),
        RentalError::ExceedsRentalCap { cap, .. } => {
            format!("Single rental limit: Cannot exceed {} credits", cap.amount())
        }
        RentalError::InsufficientBalance { .. } => "Insufficient credits".to_string(),
        RentalError::Validation(err) => err.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
