//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

use crate::types::Category;

// Credential storage
pub const CREDENTIAL_SERVICE_NAME: &str = "EcoTrack.api";
pub const CREDENTIAL_STORAGE_KEY: &str = "token";

// Endpoints and transport
pub const DEFAULT_DEV_URL: &str = "http://localhost:3000";
pub const HTTP_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LEADERBOARD_PERIOD_DAYS: u16 = 30;
pub const DEFAULT_STATS_PERIOD_DAYS: u16 = 30;

// Preview classification
pub const PREVIEW_DEBOUNCE_MS: u64 = 500;
pub const LOW_IMPACT_THRESHOLD_KG: f64 = 1.0;
pub const BUDGET_ALERT_RATIO: f64 = 0.5;

// Event channel reconnect policy
pub const RECONNECT_MAX_ATTEMPTS: u32 = 5;
pub const RECONNECT_BASE_DELAY_MS: u64 = 1_000;
pub const RECONNECT_MAX_DELAY_MS: u64 = 30_000;
pub const RECONNECT_JITTER_MS: u64 = 1_000;

// Display formatting
pub const CARBON_DISPLAY_FLOOR_KG: f64 = 0.01;

/// Quantity units permitted for a category, in display order
pub fn units_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Transport => &["km", "miles", "m"],
        Category::Energy => &["kWh", "MWh", "BTU"],
        Category::Food => &["kg", "lbs", "g", "servings"],
        Category::Waste => &["kg", "lbs", "g"],
        Category::Other => &["items", "pieces", "hours", "days"],
    }
}
