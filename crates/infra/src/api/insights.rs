//! Dashboard and insights endpoint façade

use std::sync::Arc;

use async_trait::async_trait;
use ecotrack_core::InsightsApi;
use ecotrack_domain::{
    ApiResult, Dashboard, EmissionGoal, GoalStatus, Leaderboard, Recommendations, Streak,
    Trends, UserStats, WeeklyAnalysis, WeeklyGoal, WeeklyGoalProgress,
};

use super::client::ApiClient;

/// HTTP implementation of [`InsightsApi`]
pub struct InsightsApiClient {
    api: Arc<ApiClient>,
}

impl InsightsApiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl InsightsApi for InsightsApiClient {
    async fn dashboard(&self) -> ApiResult<Dashboard> {
        self.api.get("/dashboard", &Vec::new()).await
    }

    async fn streak(&self) -> ApiResult<Streak> {
        self.api.get("/streak", &Vec::new()).await
    }

    async fn leaderboard(&self, period_days: u16) -> ApiResult<Leaderboard> {
        self.api.get("/leaderboard", &vec![("period", period_days.to_string())]).await
    }

    async fn user_stats(&self, period_days: u16) -> ApiResult<UserStats> {
        self.api.get("/stats", &vec![("period", period_days.to_string())]).await
    }

    async fn weekly_analysis(&self) -> ApiResult<WeeklyAnalysis> {
        self.api.get("/insights/weekly-analysis", &Vec::new()).await
    }

    async fn recommendations(&self) -> ApiResult<Recommendations> {
        self.api.get("/insights/recommendations", &Vec::new()).await
    }

    async fn trends(&self, period_days: u16) -> ApiResult<Trends> {
        self.api.get("/insights/trends", &vec![("period", period_days.to_string())]).await
    }

    async fn set_emission_goal(&self, goal: &EmissionGoal) -> ApiResult<EmissionGoal> {
        self.api.post("/insights/set-emission-goal", goal).await
    }

    async fn emission_goal_progress(&self) -> ApiResult<GoalStatus> {
        self.api.get("/insights/emission-goal-progress", &Vec::new()).await
    }

    async fn set_weekly_goal(&self, goal: &WeeklyGoal) -> ApiResult<WeeklyGoal> {
        self.api.post("/insights/set-weekly-goal", goal).await
    }

    async fn weekly_goal_progress(&self) -> ApiResult<WeeklyGoalProgress> {
        self.api.get("/insights/weekly-goal-progress", &Vec::new()).await
    }
}
