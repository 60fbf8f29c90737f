//! Event channel wire protocol
//!
//! Every frame is a JSON envelope `{ "event": <name>, "data": <payload> }`.
//! `goal_set` and `emission_goal_set` are aliases for the same event; both
//! names resolve to [`EventName::GoalSet`] and fan out to one subscriber
//! list.

use serde::{Deserialize, Serialize};

/// Canonical names of channel events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    ActivityTip,
    WeeklyInsights,
    GoalSet,
    GoalMilestone,
    GoalStatusUpdate,
    TrendAlert,
    ServerShutdown,
    ServerError,
    Pong,
}

impl EventName {
    /// Resolve a wire name, folding aliases onto the canonical event
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "activity_tip" => Some(Self::ActivityTip),
            "weekly_insights" => Some(Self::WeeklyInsights),
            "goal_set" | "emission_goal_set" => Some(Self::GoalSet),
            "goal_milestone" => Some(Self::GoalMilestone),
            "goal_status_update" => Some(Self::GoalStatusUpdate),
            "trend_alert" => Some(Self::TrendAlert),
            "server_shutdown" => Some(Self::ServerShutdown),
            "server_error" => Some(Self::ServerError),
            "pong" => Some(Self::Pong),
            _ => None,
        }
    }

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActivityTip => "activity_tip",
            Self::WeeklyInsights => "weekly_insights",
            Self::GoalSet => "goal_set",
            Self::GoalMilestone => "goal_milestone",
            Self::GoalStatusUpdate => "goal_status_update",
            Self::TrendAlert => "trend_alert",
            Self::ServerShutdown => "server_shutdown",
            Self::ServerError => "server_error",
            Self::Pong => "pong",
        }
    }
}

/// JSON envelope framing every channel message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn new(event: impl Into<String>, data: serde_json::Value) -> Self {
        Self { event: event.into(), data }
    }

    /// The outgoing keepalive frame
    pub fn ping() -> Self {
        Self::new("ping", serde_json::Value::Null)
    }
}
