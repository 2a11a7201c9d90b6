//! # Catalog Store
//!
//! The in-memory catalog: base car data, current availability, active
//! rental records, and the favorites set.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CatalogStore Invariants                              │
//! │                                                                         │
//! │  I1: every catalog id is in `available` XOR referenced by `rented`     │
//! │      (a car is never simultaneously available and rented)              │
//! │                                                                         │
//! │  I2: at most one RentalRecord per car id                               │
//! │      (re-renting a still-rented car is rejected)                       │
//! │                                                                         │
//! │  I3: favorite_ids ⊆ base-catalog ids                                   │
//! │      (favoriting an unknown id is an explicit error)                   │
//! │                                                                         │
//! │  Every mutating operation either fully applies or fully fails.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Rule
//! `available` always follows base-catalog order. After a cancel the list is
//! rebuilt from the base catalog rather than appended to, so repeated
//! rent/cancel cycles never corrupt the ordering. The favorites listing
//! follows the same rule: base-catalog order, never toggle order.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::{RentalError, RentalResult};
use crate::types::{Car, RentalRecord};

// =============================================================================
// Default Catalog
// =============================================================================

/// The fixed six-car demo catalog.
///
/// Image refs are opaque asset keys; the rendering collaborator resolves
/// them to actual drawables.
pub fn default_catalog() -> Vec<Car> {
    vec![
        Car::new("1", "BMW", "i7", 2024, 4.9, 5000, 150, "bmw_i7"),
        Car::new("2", "BMW", "X1", 2023, 4.6, 12000, 95, "bmw_x1"),
        Car::new("3", "Mercedes-Benz", "S 500", 2024, 4.8, 8000, 140, "mercedes_benz_s_500"),
        Car::new("4", "Porsche", "911", 2023, 5.0, 6000, 180, "porsche_911"),
        Car::new("5", "Tesla", "Model 3", 2025, 4.7, 10000, 100, "tesla_model_3"),
        Car::new("6", "Tesla", "Model Y", 2025, 4.7, 9000, 110, "tesla_model_y"),
    ]
}

// =============================================================================
// Catalog Store
// =============================================================================

/// Owns the immutable base catalog, the mutable availability subset, the
/// active rental records, and the favorites set.
///
/// ## Mutation Model
/// All four fields are read and mutated together, so the store has no
/// internal locking - callers serialize access, or wrap the store in
/// [`SharedCatalog`] when sessions can run on multiple threads.
#[derive(Debug)]
pub struct CatalogStore {
    /// Fixed at construction, never mutated.
    base_catalog: Vec<Car>,

    /// Cars not currently rented, in base-catalog order.
    available: Vec<Car>,

    /// One record per active rental.
    rented: Vec<RentalRecord>,

    /// Ids of favorited cars. Membership only; display order comes from
    /// the base catalog.
    favorite_ids: HashSet<String>,
}

impl CatalogStore {
    /// Creates a store over the given base catalog, with every car
    /// initially available.
    pub fn new(base_catalog: Vec<Car>) -> Self {
        let available = base_catalog.clone();
        CatalogStore {
            base_catalog,
            available,
            rented: Vec::new(),
            favorite_ids: HashSet::new(),
        }
    }

    /// Creates a store seeded with the six-car demo catalog.
    pub fn with_default_catalog() -> Self {
        CatalogStore::new(default_catalog())
    }

    /// Looks a car up in the base catalog. No side effects.
    pub fn car_by_id(&self, car_id: &str) -> Option<&Car> {
        self.base_catalog.iter().find(|c| c.id == car_id)
    }

    /// The full base catalog, in fixed order.
    pub fn base_catalog(&self) -> &[Car] {
        &self.base_catalog
    }

    /// Snapshot of the currently available cars, in base-catalog order.
    pub fn available_cars(&self) -> &[Car] {
        &self.available
    }

    /// The active rental records, in commit order.
    pub fn rented_records(&self) -> &[RentalRecord] {
        &self.rented
    }

    /// Rents a car for the given day count.
    ///
    /// ## Behavior
    /// - `CarNotFound` if the id is absent from the base catalog
    /// - `AlreadyRented` if the car has left the available list (I1/I2)
    /// - On success: freezes `total_cost = daily_cost × days` into a new
    ///   record, removes the car from the available list, returns the record
    ///
    /// ## Not Checked Here
    /// The spending cap and the balance are session concerns - the store
    /// has no notion of a current user balance.
    pub fn rent(&mut self, car_id: &str, days: u32) -> RentalResult<RentalRecord> {
        let car = self
            .car_by_id(car_id)
            .ok_or_else(|| RentalError::CarNotFound(car_id.to_string()))?
            .clone();

        if !self.available.iter().any(|c| c.id == car_id) {
            return Err(RentalError::AlreadyRented(car_id.to_string()));
        }

        let record = RentalRecord::new(&car, days);
        self.available.retain(|c| c.id != car_id);
        self.rented.push(record.clone());

        Ok(record)
    }

    /// Cancels an active rental, making the car available again.
    ///
    /// The available list is rebuilt from base-catalog order, so the car
    /// returns to its deterministic position regardless of how many
    /// rent/cancel cycles preceded the call.
    ///
    /// ## Returns
    /// Whether a record was removed.
    ///
    /// ## Note
    /// Structurally present but not wired to any session action: committed
    /// rentals are final within a session, and nothing refunds a balance.
    pub fn cancel_rent(&mut self, car_id: &str) -> bool {
        let before = self.rented.len();
        self.rented.retain(|r| r.car_id != car_id);
        let removed = self.rented.len() != before;

        if removed {
            self.rebuild_available();
        }

        removed
    }

    /// Flips the favorite state of a car.
    ///
    /// The strict variant: an id missing from the base catalog is an
    /// explicit `CarNotFound`, never a silent no-op (I3).
    ///
    /// ## Returns
    /// The new state: `Ok(true)` = now favorited.
    pub fn toggle_favorite(&mut self, car_id: &str) -> RentalResult<bool> {
        if self.car_by_id(car_id).is_none() {
            return Err(RentalError::CarNotFound(car_id.to_string()));
        }

        if self.favorite_ids.remove(car_id) {
            Ok(false)
        } else {
            self.favorite_ids.insert(car_id.to_string());
            Ok(true)
        }
    }

    /// Whether a car is currently favorited.
    pub fn is_favorite(&self, car_id: &str) -> bool {
        self.favorite_ids.contains(car_id)
    }

    /// The favorited cars, always in base-catalog order.
    ///
    /// Toggle order and catalog order can diverge; the display rule is
    /// catalog order, so this filters the base catalog instead of walking
    /// the set.
    pub fn favorite_cars(&self) -> Vec<Car> {
        self.base_catalog
            .iter()
            .filter(|c| self.favorite_ids.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Restores full availability and clears records and favorites.
    ///
    /// Test isolation only - not a production user action.
    pub fn reset(&mut self) {
        self.available = self.base_catalog.clone();
        self.rented.clear();
        self.favorite_ids.clear();
    }

    /// Rebuilds `available` as the base catalog minus actively rented ids.
    fn rebuild_available(&mut self) {
        self.available = self
            .base_catalog
            .iter()
            .filter(|c| !self.rented.iter().any(|r| r.car_id == c.id))
            .cloned()
            .collect();
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::with_default_catalog()
    }
}

// =============================================================================
// Shared Wrapper
// =============================================================================

/// A catalog store shared across sessions.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CatalogStore>>` because:
/// - `Arc`: the one process-lifetime store is shared by every session
/// - `Mutex`: `rent`/`cancel_rent`/`toggle_favorite` each touch multiple
///   fields that must stay mutually consistent, so a single lock guards
///   the whole store
///
/// ## Why Not RwLock?
/// Store operations are quick and most of the interesting ones mutate.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogStore>>,
}

impl SharedCatalog {
    /// Wraps a store for shared access.
    pub fn new(store: CatalogStore) -> Self {
        SharedCatalog {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let cars = catalog.with_catalog(|c| c.available_cars().to_vec());
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogStore) -> R,
    {
        let store = self.inner.lock().expect("Catalog mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let record = catalog.with_catalog_mut(|c| c.rent("1", 2))?;
    /// ```
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogStore) -> R,
    {
        let mut store = self.inner.lock().expect("Catalog mutex poisoned");
        f(&mut store)
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        SharedCatalog::new(CatalogStore::with_default_catalog())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credits::Credits;

    fn store() -> CatalogStore {
        CatalogStore::with_default_catalog()
    }

    /// I1: every catalog id is available XOR rented.
    fn assert_available_xor_rented(store: &CatalogStore) {
        for car in store.base_catalog() {
            let available = store.available_cars().iter().any(|c| c.id == car.id);
            let rented = store.rented_records().iter().any(|r| r.car_id == car.id);
            assert!(
                available ^ rented,
                "car {} is available={} rented={}",
                car.id,
                available,
                rented
            );
        }
    }

    #[test]
    fn test_default_catalog_has_six_cars() {
        let store = store();
        assert_eq!(store.base_catalog().len(), 6);
        assert_eq!(store.available_cars().len(), 6);
        assert!(store.rented_records().is_empty());
    }

    #[test]
    fn test_car_by_id() {
        let store = store();
        assert_eq!(store.car_by_id("1").unwrap().display_name(), "BMW i7");
        assert!(store.car_by_id("99").is_none());
    }

    #[test]
    fn test_rent_freezes_cost_and_removes_from_available() {
        let mut store = store();

        let record = store.rent("1", 2).unwrap();
        assert_eq!(record.total_cost, Credits::new(300));
        assert_eq!(record.days, 2);

        assert!(!store.available_cars().iter().any(|c| c.id == "1"));
        assert_eq!(store.rented_records().len(), 1);
        assert_available_xor_rented(&store);
    }

    #[test]
    fn test_rent_unknown_car_fails() {
        let mut store = store();
        assert_eq!(
            store.rent("99", 1),
            Err(RentalError::CarNotFound("99".to_string()))
        );
        assert_available_xor_rented(&store);
    }

    #[test]
    fn test_rent_twice_fails_with_already_rented() {
        let mut store = store();

        store.rent("1", 1).unwrap();
        assert_eq!(
            store.rent("1", 1),
            Err(RentalError::AlreadyRented("1".to_string()))
        );

        // I2: still only one record for the car
        assert_eq!(store.rented_records().len(), 1);
        assert_available_xor_rented(&store);
    }

    #[test]
    fn test_cancel_rent_restores_availability() {
        let mut store = store();

        store.rent("3", 2).unwrap();
        assert!(store.cancel_rent("3"));

        assert!(store.available_cars().iter().any(|c| c.id == "3"));
        assert!(store.rented_records().is_empty());
        assert_available_xor_rented(&store);
    }

    #[test]
    fn test_cancel_rent_without_record_is_noop() {
        let mut store = store();
        assert!(!store.cancel_rent("3"));
        assert_eq!(store.available_cars().len(), 6);
    }

    #[test]
    fn test_cancel_restores_catalog_order_after_cycles() {
        let mut store = store();

        // Rent the first three, cancel out of order
        store.rent("1", 1).unwrap();
        store.rent("2", 1).unwrap();
        store.rent("3", 1).unwrap();
        store.cancel_rent("2");
        store.cancel_rent("1");
        store.cancel_rent("3");

        let ids: Vec<&str> = store.available_cars().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let mut store = store();

        assert_eq!(store.toggle_favorite("2"), Ok(true));
        assert!(store.is_favorite("2"));

        assert_eq!(store.toggle_favorite("2"), Ok(false));
        assert!(!store.is_favorite("2"));
    }

    #[test]
    fn test_toggle_favorite_unknown_car_fails() {
        let mut store = store();
        assert_eq!(
            store.toggle_favorite("99"),
            Err(RentalError::CarNotFound("99".to_string()))
        );
        assert!(store.favorite_cars().is_empty());
    }

    #[test]
    fn test_favorite_cars_follow_catalog_order_not_toggle_order() {
        let mut store = store();

        // Toggle "5" before "1": display order is still catalog order
        store.toggle_favorite("5").unwrap();
        store.toggle_favorite("1").unwrap();

        let favorites = store.favorite_cars();
        let ids: Vec<&str> = favorites.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "5"]);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut store = store();

        store.rent("1", 1).unwrap();
        store.toggle_favorite("2").unwrap();
        store.reset();

        assert_eq!(store.available_cars().len(), 6);
        assert!(store.rented_records().is_empty());
        assert!(store.favorite_cars().is_empty());
    }

    #[test]
    fn test_shared_catalog_serializes_mutations() {
        let shared = SharedCatalog::default();

        let record = shared.with_catalog_mut(|c| c.rent("1", 2)).unwrap();
        assert_eq!(record.total_cost, Credits::new(300));

        let second = shared.with_catalog_mut(|c| c.rent("1", 2));
        assert_eq!(second, Err(RentalError::AlreadyRented("1".to_string())));

        let available = shared.with_catalog(|c| c.available_cars().len());
        assert_eq!(available, 5);
    }

    #[test]
    fn test_shared_catalog_clones_point_at_same_store() {
        let shared = SharedCatalog::default();
        let other = shared.clone();

        shared.with_catalog_mut(|c| c.rent("4", 1)).unwrap();

        assert!(other.with_catalog(|c| !c.available_cars().iter().any(|car| car.id == "4")));
    }
}
