//! Tip types
//!
//! A tip is a short classified recommendation. Tips are produced in two
//! places: locally by the preview classifier, and server-side attached to
//! create responses or pushed over the event channel.

use serde::{Deserialize, Serialize};

/// Tip classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Success,
    Info,
    Alert,
    Warning,
}

/// Activity context optionally attached to a tip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipActivityContext {
    pub activity_id: Option<String>,
    pub activity_name: Option<String>,
    pub carbon_footprint: Option<f64>,
}

/// A classified recommendation with optional suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<TipActivityContext>,
}

impl Tip {
    pub fn new(kind: TipKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            actionable: false,
            activity: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}
