//! # Session Configuration
//!
//! Constants a browsing session starts from.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RENTIX_*`)
//! 2. Defaults (rentix-core constants)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use rentix_core::{
    Credits, DEFAULT_RENTAL_CAP, DEFAULT_STARTING_BALANCE, MAX_RENTAL_DAYS,
};

/// Per-session constants.
///
/// The starting balance and the rental cap are parameters rather than
/// hard-coded literals so tests can exercise boundary cases directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Credits granted when the session starts.
    pub starting_balance: Credits,

    /// Maximum total cost of a single rental, independent of balance.
    pub rental_cap: Credits,

    /// Maximum day count accepted for a single rental.
    pub max_rental_days: u32,

    /// Preference key the theme flag is stored under.
    pub theme_pref_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            starting_balance: DEFAULT_STARTING_BALANCE,
            rental_cap: DEFAULT_RENTAL_CAP,
            max_rental_days: MAX_RENTAL_DAYS,
            theme_pref_key: "is_dark_theme".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RENTIX_STARTING_BALANCE`: Override the starting balance
    /// - `RENTIX_RENTAL_CAP`: Override the per-rental cap
    /// - `RENTIX_MAX_RENTAL_DAYS`: Override the day limit
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(balance) = std::env::var("RENTIX_STARTING_BALANCE") {
            if let Ok(amount) = balance.parse::<i64>() {
                config.starting_balance = Credits::new(amount);
            }
        }

        if let Ok(cap) = std::env::var("RENTIX_RENTAL_CAP") {
            if let Ok(amount) = cap.parse::<i64>() {
                config.rental_cap = Credits::new(amount);
            }
        }

        if let Ok(days) = std::env::var("RENTIX_MAX_RENTAL_DAYS") {
            if let Ok(max) = days.parse::<u32>() {
                config.max_rental_days = max;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.starting_balance, Credits::new(500));
        assert_eq!(config.rental_cap, Credits::new(400));
        assert_eq!(config.max_rental_days, 30);
        assert_eq!(config.theme_pref_key, "is_dark_theme");
    }

    // Single test for all env handling: from_env reads every RENTIX_* var,
    // so splitting these across parallel tests would race on the process
    // environment.
    #[test]
    fn test_from_env_overrides_and_ignores_garbage() {
        std::env::set_var("RENTIX_STARTING_BALANCE", "1000");
        std::env::set_var("RENTIX_RENTAL_CAP", "not-a-number");
        std::env::set_var("RENTIX_MAX_RENTAL_DAYS", "7");

        let config = SessionConfig::from_env();
        assert_eq!(config.starting_balance, Credits::new(1000));
        assert_eq!(config.rental_cap, Credits::new(400)); // unparsable: default kept
        assert_eq!(config.max_rental_days, 7);

        std::env::remove_var("RENTIX_STARTING_BALANCE");
        std::env::remove_var("RENTIX_RENTAL_CAP");
        std::env::remove_var("RENTIX_MAX_RENTAL_DAYS");
    }
}
