//! Activity types
//!
//! The logged-activity model and the request/response shapes of the
//! activity endpoints. All impact figures are server-computed kilograms of
//! CO2-equivalent; the client never derives them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::details::ActivityDetails;
use super::tip::Tip;

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Food,
    Waste,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 5] = [
        Self::Transport,
        Self::Energy,
        Self::Food,
        Self::Waste,
        Self::Other,
    ];

    /// Wire representation, matching the serde rename
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::Food => "food",
            Self::Waste => "waste",
            Self::Other => "other",
        }
    }

    /// Human-readable label for dropdowns
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Energy => "Energy",
            Self::Food => "Food",
            Self::Waste => "Waste",
            Self::Other => "Other",
        }
    }

    /// Parse the wire representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "transport" => Some(Self::Transport),
            "energy" => Some(Self::Energy),
            "food" => Some(Self::Food),
            "waste" => Some(Self::Waste),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount with its unit (unit validity depends on the category, see
/// [`crate::constants::units_for`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self { value, unit: unit.into() }
    }
}

/// A logged activity as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(alias = "_id")]
    pub id: String,
    pub activity_name: String,
    pub activity_type: Category,
    pub description: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub activity_details: ActivityDetails,
    pub date: DateTime<Utc>,
    /// Server-computed impact in kilograms of CO2
    pub calculated_carbon_footprint: f64,
}

/// Activity draft submitted on create (identity and impact are
/// server-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub activity_name: String,
    pub activity_type: Category,
    pub description: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub activity_details: ActivityDetails,
    pub date: DateTime<Utc>,
}

/// Partial update; omitted fields are left unchanged by the backend
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_details: Option<ActivityDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Response to a create call; the backend may attach a real-time tip
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedActivity {
    pub activity: Activity,
    #[serde(default)]
    pub real_time_tip: Option<Tip>,
}

/// List filters; values that are empty, whitespace or the "all" sentinel
/// are omitted from the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub activity_type: Option<String>,
    pub activity_name: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Rolled-up total attached to a list response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitySummary {
    pub total_impact: f64,
}

/// Response to a list call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityList {
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub summary: ActivitySummary,
}

/// Preview request body; a draft that is never persisted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub activity_type: Category,
    pub quantity: Quantity,
    pub activity_details: ActivityDetails,
}

/// Server-computed impact for an unsaved draft
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub calculated_carbon_footprint: f64,
    pub emission_factor: f64,
    /// Calculation breakdown; rendered verbatim, the shape is owned by the
    /// backend
    #[serde(default)]
    pub calculation: serde_json::Value,
}

/// Acknowledgment returned by delete
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteAck {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("all"), None);
    }

    #[test]
    fn test_activity_deserializes_mongo_style_id() {
        let json = serde_json::json!({
            "_id": "6651f0",
            "activityName": "Commute",
            "activityType": "transport",
            "description": "to office",
            "quantity": { "value": 12.0, "unit": "km" },
            "activityDetails": { "transportMode": "car_gasoline" },
            "date": "2025-06-01T08:30:00Z",
            "calculatedCarbonFootprint": 2.6
        });

        let activity: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(activity.id, "6651f0");
        assert_eq!(activity.activity_type, Category::Transport);
        assert_eq!(activity.calculated_carbon_footprint, 2.6);
    }

    #[test]
    fn test_new_activity_serializes_camel_case() {
        let draft = NewActivity {
            activity_name: "Commute".into(),
            activity_type: Category::Transport,
            description: "to office".into(),
            quantity: Quantity::new(12.0, "km"),
            activity_details: ActivityDetails::default(),
            date: "2025-06-01T08:30:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["activityName"], "Commute");
        assert_eq!(value["activityType"], "transport");
        assert_eq!(value["quantity"]["unit"], "km");
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = ActivityPatch {
            description: Some("updated".into()),
            ..ActivityPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["description"], "updated");
    }

    #[test]
    fn test_created_activity_tolerates_missing_tip() {
        let json = serde_json::json!({
            "activity": {
                "id": "a1",
                "activityName": "Lunch",
                "activityType": "food",
                "description": "salad",
                "quantity": { "value": 0.2, "unit": "kg" },
                "date": "2025-06-01T12:00:00Z",
                "calculatedCarbonFootprint": 0.08
            }
        });

        let created: CreatedActivity = serde_json::from_value(json).unwrap();
        assert!(created.real_time_tip.is_none());
    }
}
