//! In-memory fakes for the core ports

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ecotrack_core::{ActivityApi, ActivitySavedHandler, InsightsApi};
use ecotrack_domain::{
    Activity, ActivityFilter, ActivityList, ActivityPatch, ActivityStats, ApiError, ApiResult,
    CreatedActivity, Dashboard, DeleteAck, EmissionGoal, GoalStatus, Leaderboard, NewActivity,
    PreviewRequest, PreviewResponse, Recommendations, Streak, Tip, Trends, UserStats,
    WeeklyAnalysis, WeeklyGoal, WeeklyGoalProgress,
};

/// Activity API fake
///
/// Previews compute `quantity.value * emission_factor` so tests can tell
/// results apart; creates echo the draft with that same impact.
pub struct FakeActivityApi {
    pub emission_factor: f64,
    pub preview_delay: Mutex<Duration>,
    pub preview_calls: AtomicUsize,
    pub last_preview: Mutex<Option<PreviewRequest>>,
    pub fail_preview: AtomicBool,
    pub create_calls: AtomicUsize,
    pub create_tip: Mutex<Option<Tip>>,
    pub fail_create: AtomicBool,
}

impl FakeActivityApi {
    pub fn new(emission_factor: f64) -> Arc<Self> {
        Arc::new(Self {
            emission_factor,
            preview_delay: Mutex::new(Duration::ZERO),
            preview_calls: AtomicUsize::new(0),
            last_preview: Mutex::new(None),
            fail_preview: AtomicBool::new(false),
            create_calls: AtomicUsize::new(0),
            create_tip: Mutex::new(None),
            fail_create: AtomicBool::new(false),
        })
    }

    pub fn set_preview_delay(&self, delay: Duration) {
        *self.preview_delay.lock().unwrap() = delay;
    }

    pub fn set_create_tip(&self, tip: Tip) {
        *self.create_tip.lock().unwrap() = Some(tip);
    }

    fn server_error() -> ApiError {
        ApiError::Server { status: 500, message: "fake failure".into(), body: None }
    }
}

#[async_trait]
impl ActivityApi for FakeActivityApi {
    async fn create_activity(&self, draft: &NewActivity) -> ApiResult<CreatedActivity> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(CreatedActivity {
            activity: Activity {
                id: format!("a{}", self.create_calls.load(Ordering::SeqCst)),
                activity_name: draft.activity_name.clone(),
                activity_type: draft.activity_type,
                description: draft.description.clone(),
                quantity: draft.quantity.clone(),
                activity_details: draft.activity_details.clone(),
                date: draft.date,
                calculated_carbon_footprint: draft.quantity.value * self.emission_factor,
            },
            real_time_tip: self.create_tip.lock().unwrap().clone(),
        })
    }

    async fn list_activities(&self, _filter: &ActivityFilter) -> ApiResult<ActivityList> {
        Ok(ActivityList { activities: Vec::new(), summary: Default::default() })
    }

    async fn get_activity(&self, id: &str) -> ApiResult<Activity> {
        Err(ApiError::Client { status: 404, message: format!("no activity {id}"), body: None })
    }

    async fn update_activity(&self, id: &str, _patch: &ActivityPatch) -> ApiResult<Activity> {
        Err(ApiError::Client { status: 404, message: format!("no activity {id}"), body: None })
    }

    async fn delete_activity(&self, _id: &str) -> ApiResult<DeleteAck> {
        Ok(DeleteAck::default())
    }

    async fn preview_impact(&self, request: &PreviewRequest) -> ApiResult<PreviewResponse> {
        self.preview_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_preview.lock().unwrap() = Some(request.clone());
        let delay = *self.preview_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.fail_preview.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(PreviewResponse {
            calculated_carbon_footprint: request.quantity.value * self.emission_factor,
            emission_factor: self.emission_factor,
            calculation: serde_json::json!({
                "quantity": format!("{}{}", request.quantity.value, request.quantity.unit),
            }),
        })
    }

    async fn activity_stats(&self, _filter: &ActivityFilter) -> ApiResult<ActivityStats> {
        Ok(ActivityStats::default())
    }

    async fn emission_factors(&self) -> ApiResult<serde_json::Value> {
        Ok(serde_json::json!({}))
    }
}

/// Insights API fake holding a configurable goal snapshot
pub struct FakeInsightsApi {
    pub goal: Mutex<GoalStatus>,
    pub goal_calls: AtomicUsize,
    pub fail_goal: AtomicBool,
}

impl FakeInsightsApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            goal: Mutex::new(GoalStatus::default()),
            goal_calls: AtomicUsize::new(0),
            fail_goal: AtomicBool::new(false),
        })
    }

    pub fn set_goal(&self, goal: GoalStatus) {
        *self.goal.lock().unwrap() = goal;
    }
}

#[async_trait]
impl InsightsApi for FakeInsightsApi {
    async fn dashboard(&self) -> ApiResult<Dashboard> {
        Ok(Dashboard::default())
    }

    async fn streak(&self) -> ApiResult<Streak> {
        Ok(Streak::default())
    }

    async fn leaderboard(&self, _period_days: u16) -> ApiResult<Leaderboard> {
        Ok(Leaderboard::default())
    }

    async fn user_stats(&self, _period_days: u16) -> ApiResult<UserStats> {
        Ok(UserStats::default())
    }

    async fn weekly_analysis(&self) -> ApiResult<WeeklyAnalysis> {
        Ok(WeeklyAnalysis::default())
    }

    async fn recommendations(&self) -> ApiResult<Recommendations> {
        Ok(Recommendations::default())
    }

    async fn trends(&self, _period_days: u16) -> ApiResult<Trends> {
        Ok(Trends::default())
    }

    async fn set_emission_goal(&self, goal: &EmissionGoal) -> ApiResult<EmissionGoal> {
        Ok(goal.clone())
    }

    async fn emission_goal_progress(&self) -> ApiResult<GoalStatus> {
        self.goal_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_goal.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: "fake failure".into(),
                body: None,
            });
        }
        Ok(self.goal.lock().unwrap().clone())
    }

    async fn set_weekly_goal(&self, goal: &WeeklyGoal) -> ApiResult<WeeklyGoal> {
        Ok(goal.clone())
    }

    async fn weekly_goal_progress(&self) -> ApiResult<WeeklyGoalProgress> {
        Ok(WeeklyGoalProgress::default())
    }
}

/// Records every activity-saved notification
#[derive(Default)]
pub struct RecordingSavedHandler {
    pub saved: Mutex<Vec<(Activity, Option<Tip>)>>,
}

impl RecordingSavedHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl ActivitySavedHandler for RecordingSavedHandler {
    fn activity_saved(&self, activity: &Activity, tip: Option<&Tip>) {
        self.saved.lock().unwrap().push((activity.clone(), tip.cloned()));
    }
}

/// An active weekly goal with the given target/current/remaining figures
pub fn weekly_goal(target: f64, current: f64, remaining: f64) -> GoalStatus {
    use ecotrack_domain::{GoalProgress, GoalScope, Timeframe};
    GoalStatus {
        has_active_goal: true,
        goal: Some(EmissionGoal {
            target_emissions: target,
            category: GoalScope::All,
            timeframe: Timeframe::Weekly,
        }),
        progress: Some(GoalProgress {
            current_emissions: current,
            remaining_budget: remaining,
            progress_percentage: if target > 0.0 { current / target * 100.0 } else { 0.0 },
            days_remaining: 3,
            is_on_track: current < target,
            activities_logged: 10,
        }),
    }
}
