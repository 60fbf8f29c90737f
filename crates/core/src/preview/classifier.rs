//! Preview tip classification
//!
//! A pure function of the previewed carbon figure and the active goal
//! snapshot. Thresholds: a draft projected past the goal target warns, a
//! draft eating more than half the remaining budget alerts, anything under
//! one kilogram is a low-impact success.

use ecotrack_domain::constants::{BUDGET_ALERT_RATIO, LOW_IMPACT_THRESHOLD_KG};
use ecotrack_domain::{ActivityDetails, Category, GoalStatus, Tip, TipKind};

use super::suggestions::{alternative_suggestions, optimization_suggestions};

/// Classify a previewed impact against the active goal
///
/// Returns `None` when the draft deserves no callout.
pub fn classify_preview(
    carbon_kg: f64,
    goal: &GoalStatus,
    category: Category,
    details: &ActivityDetails,
) -> Option<Tip> {
    let Some((goal, progress)) = goal.active() else {
        return low_impact_tip(carbon_kg);
    };

    let projected = progress.current_emissions + carbon_kg;
    let remaining = progress.remaining_budget;

    if projected > goal.target_emissions {
        let excess = projected - goal.target_emissions;
        return Some(
            Tip::new(
                TipKind::Warning,
                "Budget Alert!",
                format!(
                    "This activity would put you {excess:.1} kg CO₂ over your {} goal.",
                    goal.timeframe
                ),
            )
            .with_suggestions(alternative_suggestions(category)),
        );
    }

    if remaining > 0.0 && carbon_kg > remaining * BUDGET_ALERT_RATIO {
        let share = carbon_kg / remaining * 100.0;
        return Some(
            Tip::new(
                TipKind::Alert,
                "High Impact Activity",
                format!("This uses {share:.0}% of your remaining budget."),
            )
            .with_suggestions(optimization_suggestions(category, details)),
        );
    }

    low_impact_tip(carbon_kg)
}

fn low_impact_tip(carbon_kg: f64) -> Option<Tip> {
    if carbon_kg < LOW_IMPACT_THRESHOLD_KG {
        return Some(Tip::new(
            TipKind::Success,
            "Low Carbon Choice!",
            "Great choice! This activity has minimal environmental impact.",
        ));
    }
    None
}
