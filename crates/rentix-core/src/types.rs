//! # Domain Types
//!
//! Core domain types used throughout Rentix.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │  RentalRecord   │   │    SortKey      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (String)    │   │  car_id (FK)    │   │  RatingDesc     │       │
//! │  │  name, model    │   │  days           │   │  YearDesc       │       │
//! │  │  year, rating   │   │  total_cost     │   │  CostAsc        │       │
//! │  │  daily_cost     │   │  rented_at      │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `RentalRecord.total_cost` is frozen at commit time (daily_cost × days).
//! Even if catalog data were to change later, the record keeps the price
//! the renter agreed to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::credits::Credits;

// =============================================================================
// Car
// =============================================================================

/// A rentable car in the catalog.
///
/// Identity is `id`; every other field is descriptive and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier - short human-assigned string ("1", "2", ...).
    pub id: String,

    /// Manufacturer name ("BMW", "Tesla", ...).
    pub name: String,

    /// Model name ("i7", "Model 3", ...).
    pub model: String,

    /// Model year.
    pub year: i32,

    /// Rating on a 1.0 - 5.0 scale.
    pub rating: f32,

    /// Mileage in kilometers.
    pub mileage_km: u32,

    /// Daily rental cost in credits. Always positive.
    pub daily_cost: Credits,

    /// Opaque handle to a display asset; the rendering collaborator
    /// resolves it to an actual image.
    pub image_ref: String,
}

impl Car {
    /// Creates a car. Used for catalog seeding and test fixtures.
    pub fn new(
        id: &str,
        name: &str,
        model: &str,
        year: i32,
        rating: f32,
        mileage_km: u32,
        daily_cost: i64,
        image_ref: &str,
    ) -> Self {
        Car {
            id: id.to_string(),
            name: name.to_string(),
            model: model.to_string(),
            year,
            rating,
            mileage_km,
            daily_cost: Credits::new(daily_cost),
            image_ref: image_ref.to_string(),
        }
    }

    /// Display name combining manufacturer and model.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.model)
    }

    /// Rating display text, e.g. "4.9/5.0".
    pub fn rating_text(&self) -> String {
        format!("{:.1}/5.0", self.rating)
    }

    /// Mileage display text, e.g. "5000 km".
    pub fn mileage_text(&self) -> String {
        format!("{} km", self.mileage_km)
    }
}

// =============================================================================
// Rental Record
// =============================================================================

/// An active rental, created at commit time.
///
/// Uses the snapshot pattern: `total_cost` is computed once from the car's
/// daily cost and the chosen day count, then frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecord {
    /// The rented car's id.
    pub car_id: String,

    /// Rental length in days. Always positive.
    pub days: u32,

    /// Total cost at commit time (daily_cost × days, frozen).
    pub total_cost: Credits,

    /// When the rental was committed.
    #[ts(as = "String")]
    pub rented_at: DateTime<Utc>,
}

impl RentalRecord {
    /// Creates a record for a car rented now.
    pub fn new(car: &Car, days: u32) -> Self {
        RentalRecord {
            car_id: car.id.clone(),
            days,
            total_cost: car.daily_cost.for_days(days),
            rented_at: Utc::now(),
        }
    }

    /// Day-count display text, e.g. "1 day" / "3 days".
    pub fn days_text(&self) -> String {
        if self.days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days)
        }
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// The ordering applied to the filtered browsing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Best-rated first.
    RatingDesc,
    /// Newest model year first.
    YearDesc,
    /// Cheapest daily cost first.
    CostAsc,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::RatingDesc
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bmw_i7() -> Car {
        Car::new("1", "BMW", "i7", 2024, 4.9, 5000, 150, "bmw_i7")
    }

    #[test]
    fn test_display_helpers() {
        let car = bmw_i7();
        assert_eq!(car.display_name(), "BMW i7");
        assert_eq!(car.rating_text(), "4.9/5.0");
        assert_eq!(car.mileage_text(), "5000 km");
    }

    #[test]
    fn test_rental_record_freezes_total_cost() {
        let car = bmw_i7();
        let record = RentalRecord::new(&car, 3);
        assert_eq!(record.car_id, "1");
        assert_eq!(record.days, 3);
        assert_eq!(record.total_cost, Credits::new(450));
    }

    #[test]
    fn test_days_text() {
        let car = bmw_i7();
        assert_eq!(RentalRecord::new(&car, 1).days_text(), "1 day");
        assert_eq!(RentalRecord::new(&car, 2).days_text(), "2 days");
    }

    #[test]
    fn test_sort_key_default() {
        assert_eq!(SortKey::default(), SortKey::RatingDesc);
    }

    #[test]
    fn test_car_serializes_camel_case() {
        let json = serde_json::to_string(&bmw_i7()).unwrap();
        assert!(json.contains("\"dailyCost\":150"));
        assert!(json.contains("\"mileageKm\":5000"));
        assert!(json.contains("\"imageRef\":\"bmw_i7\""));
    }
}
