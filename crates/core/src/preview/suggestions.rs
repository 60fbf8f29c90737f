//! Suggestion copy for preview tips
//!
//! Fixed lists keyed by category, with narrower refinements when the
//! details point at a known high-impact choice.

use ecotrack_domain::{ActivityDetails, Category, FoodType, TransportMode};

/// Lower-impact alternatives for an over-budget draft
pub fn alternative_suggestions(category: Category) -> Vec<String> {
    let suggestions: &[&str] = match category {
        Category::Transport => &["Walk or cycle instead", "Use public transport", "Combine trips"],
        Category::Food => &["Try plant-based option", "Choose local produce", "Smaller portion"],
        Category::Energy => &["Use LED lighting", "Lower thermostat", "Unplug devices"],
        Category::Waste => &["Recycle if possible", "Compost organic waste", "Reduce packaging"],
        Category::Other => &["Consider eco-friendly alternatives"],
    };
    suggestions.iter().map(ToString::to_string).collect()
}

/// Ways to trim a draft that eats a large share of the remaining budget
pub fn optimization_suggestions(category: Category, details: &ActivityDetails) -> Vec<String> {
    let suggestions: &[&str] = match category {
        Category::Transport if details.transport_mode == Some(TransportMode::CarGasoline) => {
            &["Consider carpooling", "Plan efficient route", "Use hybrid next time"]
        }
        Category::Food if details.food_type == Some(FoodType::Beef) => {
            &["Try chicken instead", "Reduce portion size", "Add more vegetables"]
        }
        _ => &["Look for more efficient options"],
    };
    suggestions.iter().map(ToString::to_string).collect()
}
