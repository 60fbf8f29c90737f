//! Display formatting helpers
//!
//! Pure presentation helpers shared by hosts: carbon figures, quantities,
//! streak wording and the community comparison grading.

use crate::constants::CARBON_DISPLAY_FLOOR_KG;
use crate::types::Quantity;

/// Format a carbon figure for display, flooring tiny values
pub fn format_carbon_footprint(kg: f64) -> String {
    if kg < CARBON_DISPLAY_FLOOR_KG {
        return "<0.01 kg CO₂".to_string();
    }
    format!("{kg:.2} kg CO₂")
}

/// Render a quantity as the compact `12km` form
pub fn format_quantity(quantity: &Quantity) -> String {
    format!("{}{}", trim_number(quantity.value), quantity.unit)
}

/// Streak length wording
pub fn format_streak(days: u32) -> String {
    match days {
        0 => "No streak".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

/// Badge shown next to the streak counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakBadge {
    pub text: &'static str,
    pub color: &'static str,
}

/// Pick the streak badge tier
pub fn streak_badge(current: u32, longest: u32) -> StreakBadge {
    if current == 0 {
        return StreakBadge { text: "Start Today", color: "gray" };
    }
    if current >= longest {
        return StreakBadge { text: "Personal Best!", color: "gold" };
    }
    if current >= 30 {
        return StreakBadge { text: "Amazing!", color: "purple" };
    }
    if current >= 14 {
        return StreakBadge { text: "Great Streak!", color: "green" };
    }
    if current >= 7 {
        return StreakBadge { text: "Week Strong!", color: "blue" };
    }
    StreakBadge { text: "Building Up", color: "gray" }
}

/// Standing relative to the community average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityStanding {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
    Unknown,
}

/// Comparison of a user's total against the community average
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityComparison {
    /// Percentage distance from the average; absolute for the better
    /// standings, signed for needs-improvement
    pub percentage: f64,
    pub standing: CommunityStanding,
}

/// Grade a user total against the community average
pub fn community_comparison(user_total: f64, community_average: f64) -> CommunityComparison {
    if community_average == 0.0 {
        return CommunityComparison { percentage: 0.0, standing: CommunityStanding::Unknown };
    }

    let difference = (user_total - community_average) / community_average * 100.0;
    if difference < -20.0 {
        CommunityComparison { percentage: difference.abs(), standing: CommunityStanding::Excellent }
    } else if difference < -10.0 {
        CommunityComparison { percentage: difference.abs(), standing: CommunityStanding::Good }
    } else if difference < 10.0 {
        CommunityComparison { percentage: difference.abs(), standing: CommunityStanding::Average }
    } else {
        CommunityComparison {
            percentage: difference,
            standing: CommunityStanding::NeedsImprovement,
        }
    }
}

/// Render a float without a trailing `.0` for whole values
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
