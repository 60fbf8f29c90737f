//! Activity endpoint façade

use std::sync::Arc;

use async_trait::async_trait;
use ecotrack_core::ActivityApi;
use ecotrack_domain::{
    Activity, ActivityFilter, ActivityList, ActivityPatch, ActivityStats, ApiResult,
    CreatedActivity, DeleteAck, NewActivity, PreviewRequest, PreviewResponse,
};

use super::client::ApiClient;
use super::query::filter_query;

/// HTTP implementation of [`ActivityApi`]
pub struct ActivityApiClient {
    api: Arc<ApiClient>,
}

impl ActivityApiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ActivityApi for ActivityApiClient {
    async fn create_activity(&self, draft: &NewActivity) -> ApiResult<CreatedActivity> {
        self.api.post("/activities", draft).await
    }

    async fn list_activities(&self, filter: &ActivityFilter) -> ApiResult<ActivityList> {
        self.api.get("/activities", &filter_query(filter)).await
    }

    async fn get_activity(&self, id: &str) -> ApiResult<Activity> {
        self.api.get(&format!("/activities/{id}"), &Vec::new()).await
    }

    async fn update_activity(&self, id: &str, patch: &ActivityPatch) -> ApiResult<Activity> {
        self.api.put(&format!("/activities/{id}"), patch).await
    }

    async fn delete_activity(&self, id: &str) -> ApiResult<DeleteAck> {
        self.api.delete(&format!("/activities/{id}")).await
    }

    async fn preview_impact(&self, request: &PreviewRequest) -> ApiResult<PreviewResponse> {
        self.api.post("/activities/calculate-preview", request).await
    }

    async fn activity_stats(&self, filter: &ActivityFilter) -> ApiResult<ActivityStats> {
        self.api.get("/activities/stats/summary", &filter_query(filter)).await
    }

    async fn emission_factors(&self) -> ApiResult<serde_json::Value> {
        self.api.get("/activities/reference/emission-factors", &Vec::new()).await
    }
}
