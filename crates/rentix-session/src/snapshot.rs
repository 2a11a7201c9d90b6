//! # Session Snapshot
//!
//! The render-ready view of a browsing session, serialized for the
//! rendering collaborator after every event.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use rentix_core::{Car, Credits};

/// Everything the rendering collaborator observes.
///
/// ## Design Notes
/// - A plain value: computed fresh from live session state, never held
///   across events
/// - `message` mirrors the pending transient notification without
///   consuming it; `BrowsingSession::take_message` is the consuming path
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Remaining spendable credits.
    pub balance: Credits,

    /// The car under the browsing cursor, if the view is non-empty.
    pub current_car: Option<Car>,

    /// The filtered, sorted browsing view.
    pub filtered_view: Vec<Car>,

    /// Favorited cars, in base-catalog order.
    pub favorite_cars: Vec<Car>,

    /// Current theme flag.
    pub is_dark_theme: bool,

    /// Day count of the in-progress proposal.
    pub selected_days: u32,

    /// Proposal cost: current car's daily cost × selected days.
    /// Zero when the view is empty.
    pub total_cost: Credits,

    /// Whether the current proposal would pass commit validation.
    pub is_proposal_valid: bool,

    /// User-facing reason when the proposal is invalid.
    pub proposal_error: Option<String>,

    /// Pending transient notification, if any.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = SessionSnapshot {
            balance: Credits::new(500),
            current_car: None,
            filtered_view: Vec::new(),
            favorite_cars: Vec::new(),
            is_dark_theme: false,
            selected_days: 1,
            total_cost: Credits::zero(),
            is_proposal_valid: false,
            proposal_error: None,
            message: None,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"balance\":500"));
        assert!(json.contains("\"isDarkTheme\":false"));
        assert!(json.contains("\"selectedDays\":1"));
        assert!(json.contains("\"isProposalValid\":false"));
    }
}
