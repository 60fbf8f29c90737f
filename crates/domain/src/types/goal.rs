//! Emission goal types
//!
//! At most one emission goal is active per user. Progress is maintained by
//! the backend; the client only reads it.

use serde::{Deserialize, Serialize};

use super::activity::Category;

/// Goal timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Weekly,
    Monthly,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which activities count toward a goal: one category, or all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalScope {
    All,
    Transport,
    Energy,
    Food,
    Waste,
    Other,
}

impl GoalScope {
    /// Whether an activity of `category` counts toward this scope
    pub fn includes(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Transport => category == Category::Transport,
            Self::Energy => category == Category::Energy,
            Self::Food => category == Category::Food,
            Self::Waste => category == Category::Waste,
            Self::Other => category == Category::Other,
        }
    }
}

impl From<Category> for GoalScope {
    fn from(category: Category) -> Self {
        match category {
            Category::Transport => Self::Transport,
            Category::Energy => Self::Energy,
            Category::Food => Self::Food,
            Category::Waste => Self::Waste,
            Category::Other => Self::Other,
        }
    }
}

/// An emission target over a timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionGoal {
    /// Target impact in kilograms of CO2
    pub target_emissions: f64,
    pub category: GoalScope,
    pub timeframe: Timeframe,
}

/// Server-maintained running state of a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current_emissions: f64,
    pub remaining_budget: f64,
    pub progress_percentage: f64,
    pub days_remaining: u32,
    pub is_on_track: bool,
    pub activities_logged: u32,
}

/// Snapshot returned by the goal-progress endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalStatus {
    pub has_active_goal: bool,
    pub goal: Option<EmissionGoal>,
    pub progress: Option<GoalProgress>,
}

impl GoalStatus {
    /// The goal and its progress, when one is active and fully reported
    pub fn active(&self) -> Option<(&EmissionGoal, &GoalProgress)> {
        if !self.has_active_goal {
            return None;
        }
        match (&self.goal, &self.progress) {
            (Some(goal), Some(progress)) => Some((goal, progress)),
            _ => None,
        }
    }
}

/// Weekly reduction goal payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    /// Weekly target in kilograms of CO2
    pub target_emissions: f64,
}

/// Progress of the weekly reduction goal
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyGoalProgress {
    pub has_active_goal: bool,
    pub target_emissions: f64,
    pub current_emissions: f64,
    pub remaining_budget: f64,
    pub days_remaining: u32,
}
