//! Dashboard, streak, leaderboard and insight types
//!
//! All aggregation happens server-side; these are read-only projections.
//! Fields default where the backend omits them for new accounts.

use serde::{Deserialize, Serialize};

/// One bucket of the dashboard's weekly breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyBreakdownEntry {
    /// Bucket label as the backend renders it (weekday or ISO date)
    pub label: String,
    pub emissions: f64,
    pub activity_count: u32,
}

/// Dashboard summary with community comparison
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dashboard {
    pub total_emissions: f64,
    pub community_average: f64,
    /// Signed percentage relative to the community average
    pub comparison_to_community: f64,
    pub activities_count: u32,
    pub weekly_breakdown: Vec<WeeklyBreakdownEntry>,
}

/// One week of the streak view's summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklySummaryEntry {
    pub week: String,
    pub days_active: u32,
    pub activities: u32,
}

/// Logging-streak aggregates
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Streak {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub average_activities_per_day: f64,
    pub weekly_summary: Vec<WeeklySummaryEntry>,
}

/// One ranked row of the leaderboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_emissions: f64,
    pub activity_count: u32,
    pub average_per_activity: f64,
}

/// Community leaderboard over a period
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Leaderboard {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub current_user: Option<LeaderboardEntry>,
}

/// Per-user statistics over a period
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_emissions: f64,
    pub activity_count: u32,
    pub average_per_day: f64,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
}

/// Emissions attributed to one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryBreakdownEntry {
    pub category: String,
    pub emissions: f64,
    pub percentage: f64,
}

/// Aggregates returned by the activity stats endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityStats {
    pub total_carbon_footprint: f64,
    pub activity_count: u32,
    pub average_per_activity: f64,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
}

/// Weekly analysis from the insights service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyAnalysis {
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
    pub highest_emission_category: Option<String>,
    pub total_weekly_emissions: f64,
    pub activities_this_week: u32,
    pub weekly_tips: Vec<String>,
    pub insights: Vec<String>,
}

/// A personalized reduction recommendation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub category: Option<String>,
    pub title: String,
    pub message: String,
    pub potential_savings: Option<f64>,
}

/// Recommendations list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
}

/// One point of a trend series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendPoint {
    pub date: String,
    pub emissions: f64,
}

/// Emission trend over a period
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trends {
    pub trends: Vec<TrendPoint>,
    pub change_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_tolerates_sparse_payload() {
        let dashboard: Dashboard =
            serde_json::from_value(serde_json::json!({ "totalEmissions": 4.2 })).unwrap();
        assert_eq!(dashboard.total_emissions, 4.2);
        assert!(dashboard.weekly_breakdown.is_empty());
    }

    #[test]
    fn test_leaderboard_current_user_optional() {
        let json = serde_json::json!({
            "leaderboard": [
                { "rank": 1, "username": "ada", "totalEmissions": 3.0,
                  "activityCount": 5, "averagePerActivity": 0.6 }
            ]
        });
        let board: Leaderboard = serde_json::from_value(json).unwrap();
        assert_eq!(board.leaderboard.len(), 1);
        assert!(board.current_user.is_none());
    }
}
