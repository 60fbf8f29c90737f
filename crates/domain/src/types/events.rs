//! Event channel payload types
//!
//! The channel delivers raw JSON payloads to subscribers; these are the
//! typed shapes consumers decode them into. Every field defaults so that
//! older server builds that omit fields still decode.

use serde::{Deserialize, Serialize};

use super::goal::{EmissionGoal, GoalStatus};
use super::tip::Tip;

/// Payload of `activity_tip`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTipEvent {
    pub tip: Tip,
}

/// Payload of `weekly_insights`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyInsightsEvent {
    pub insights: Vec<String>,
    pub weekly_tips: Vec<String>,
    pub total_weekly_emissions: Option<f64>,
}

/// Payload of `goal_set` / `emission_goal_set`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalSetEvent {
    pub goal: Option<EmissionGoal>,
    pub message: Option<String>,
}

/// Payload of `goal_milestone`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalMilestoneEvent {
    pub milestone: Option<String>,
    pub progress_percentage: Option<f64>,
    pub message: Option<String>,
}

/// Payload of `goal_status_update`
pub type GoalStatusUpdateEvent = GoalStatus;

/// Payload of `trend_alert`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendAlertEvent {
    pub direction: Option<String>,
    pub change_percentage: Option<f64>,
    pub message: Option<String>,
}

/// Payload of `server_shutdown` and `server_error`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerNoticeEvent {
    pub message: Option<String>,
    pub code: Option<String>,
}
