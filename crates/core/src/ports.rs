//! Port interfaces for the client's infrastructure
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations (HTTP façade, credential storage, host
//! navigation hooks).

use async_trait::async_trait;
use ecotrack_domain::{
    Activity, ActivityFilter, ActivityList, ActivityPatch, ActivityStats, ApiResult,
    CreatedActivity, Dashboard, DeleteAck, EmissionGoal, GoalStatus, Leaderboard, NewActivity,
    PreviewRequest, PreviewResponse, Recommendations, Streak, Tip, Trends, UserStats,
    WeeklyAnalysis, WeeklyGoal, WeeklyGoalProgress,
};

/// Named operations over the activity endpoints
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// Create an activity; the backend computes the impact and may attach a
    /// real-time tip
    async fn create_activity(&self, draft: &NewActivity) -> ApiResult<CreatedActivity>;

    /// List activities with optional filters and pagination
    async fn list_activities(&self, filter: &ActivityFilter) -> ApiResult<ActivityList>;

    /// Read a single activity
    async fn get_activity(&self, id: &str) -> ApiResult<Activity>;

    /// Update an activity; the impact is recalculated server-side
    async fn update_activity(&self, id: &str, patch: &ActivityPatch) -> ApiResult<Activity>;

    /// Delete an activity
    async fn delete_activity(&self, id: &str) -> ApiResult<DeleteAck>;

    /// Compute the impact of an unsaved draft
    async fn preview_impact(&self, request: &PreviewRequest) -> ApiResult<PreviewResponse>;

    /// Aggregate statistics over the activity log
    async fn activity_stats(&self, filter: &ActivityFilter) -> ApiResult<ActivityStats>;

    /// Emission-factor reference table, rendered verbatim
    async fn emission_factors(&self) -> ApiResult<serde_json::Value>;
}

/// Named operations over the dashboard and insights endpoints
#[async_trait]
pub trait InsightsApi: Send + Sync {
    /// Dashboard summary with community comparison
    async fn dashboard(&self) -> ApiResult<Dashboard>;

    /// Logging-streak aggregates
    async fn streak(&self) -> ApiResult<Streak>;

    /// Community leaderboard over a period in days
    async fn leaderboard(&self, period_days: u16) -> ApiResult<Leaderboard>;

    /// Per-user statistics over a period in days
    async fn user_stats(&self, period_days: u16) -> ApiResult<UserStats>;

    /// Weekly category analysis and insight strings
    async fn weekly_analysis(&self) -> ApiResult<WeeklyAnalysis>;

    /// Personalized reduction recommendations
    async fn recommendations(&self) -> ApiResult<Recommendations>;

    /// Emission trend over a period in days
    async fn trends(&self, period_days: u16) -> ApiResult<Trends>;

    /// Create or replace the active emission goal
    async fn set_emission_goal(&self, goal: &EmissionGoal) -> ApiResult<EmissionGoal>;

    /// Snapshot of the active emission goal and its progress
    async fn emission_goal_progress(&self) -> ApiResult<GoalStatus>;

    /// Create or replace the weekly reduction goal
    async fn set_weekly_goal(&self, goal: &WeeklyGoal) -> ApiResult<WeeklyGoal>;

    /// Progress of the weekly reduction goal
    async fn weekly_goal_progress(&self) -> ApiResult<WeeklyGoalProgress>;
}

/// Durable cell holding the bearer credential
///
/// The transport adapter owns the read/write path; hosts only call `set`
/// from the sign-in flow and `clear` from sign-out. Implementations log
/// storage failures and treat them as an absent credential.
pub trait CredentialStore: Send + Sync {
    /// The stored credential, if any
    fn get(&self) -> Option<String>;

    /// Store a credential, replacing any previous one
    fn set(&self, credential: &str);

    /// Remove the credential; idempotent
    fn clear(&self);
}

/// Host hooks for session lifecycle side effects
pub trait SessionEvents: Send + Sync {
    /// Called exactly once per intercepted 401, after the credential has
    /// been cleared. Hosts navigate to the sign-in route here.
    fn auth_expired(&self);
}

/// Observer of persisted activities emitted by the entry controller
pub trait ActivitySavedHandler: Send + Sync {
    /// Invoked after a successful create with the persisted activity and
    /// the server tip, if one was attached
    fn activity_saved(&self, activity: &Activity, tip: Option<&Tip>);
}
