//! Category-specific activity details
//!
//! Each category carries one required detail (transport mode, energy
//! source, food type, waste type) plus an optional disposal method for
//! waste. The emission-intensity grading mirrors what the backend's factor
//! tables imply and is only used to badge options in the host UI.

use serde::{Deserialize, Serialize};

use super::activity::Category;

/// Coarse emission grading used for UI badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmissionIntensity {
    Zero,
    VeryLow,
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
    /// Saves emissions overall (e.g. recycling)
    Negative,
}

impl EmissionIntensity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::LowMedium => "low-medium",
            Self::Medium => "medium",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
            Self::VeryHigh => "very-high",
            Self::Negative => "negative",
        }
    }
}

/// Mode of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    CarGasoline,
    CarDiesel,
    CarHybrid,
    CarElectric,
    Motorcycle,
    Bus,
    Train,
    PlaneDomestic,
    PlaneInternational,
    Bicycle,
    Walking,
}

impl TransportMode {
    pub const ALL: [Self; 11] = [
        Self::CarGasoline,
        Self::CarDiesel,
        Self::CarHybrid,
        Self::CarElectric,
        Self::Motorcycle,
        Self::Bus,
        Self::Train,
        Self::PlaneDomestic,
        Self::PlaneInternational,
        Self::Bicycle,
        Self::Walking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CarGasoline => "Gasoline Car",
            Self::CarDiesel => "Diesel Car",
            Self::CarHybrid => "Hybrid Car",
            Self::CarElectric => "Electric Car",
            Self::Motorcycle => "Motorcycle",
            Self::Bus => "Public Bus",
            Self::Train => "Train",
            Self::PlaneDomestic => "Domestic Flight",
            Self::PlaneInternational => "International Flight",
            Self::Bicycle => "Bicycle",
            Self::Walking => "Walking",
        }
    }

    pub fn intensity(self) -> EmissionIntensity {
        match self {
            Self::CarGasoline => EmissionIntensity::High,
            Self::CarDiesel => EmissionIntensity::MediumHigh,
            Self::CarHybrid | Self::Motorcycle => EmissionIntensity::Medium,
            Self::CarElectric | Self::Train => EmissionIntensity::Low,
            Self::Bus => EmissionIntensity::LowMedium,
            Self::PlaneDomestic => EmissionIntensity::High,
            Self::PlaneInternational => EmissionIntensity::VeryHigh,
            Self::Bicycle | Self::Walking => EmissionIntensity::Zero,
        }
    }
}

/// Source powering an energy activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    GridAverage,
    Coal,
    NaturalGas,
    Nuclear,
    Solar,
    Wind,
    Hydro,
}

impl EnergySource {
    pub const ALL: [Self; 7] = [
        Self::GridAverage,
        Self::Coal,
        Self::NaturalGas,
        Self::Nuclear,
        Self::Solar,
        Self::Wind,
        Self::Hydro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GridAverage => "Grid Average",
            Self::Coal => "Coal Power",
            Self::NaturalGas => "Natural Gas",
            Self::Nuclear => "Nuclear Power",
            Self::Solar => "Solar Power",
            Self::Wind => "Wind Power",
            Self::Hydro => "Hydroelectric",
        }
    }

    pub fn intensity(self) -> EmissionIntensity {
        match self {
            Self::GridAverage => EmissionIntensity::Medium,
            Self::Coal => EmissionIntensity::VeryHigh,
            Self::NaturalGas => EmissionIntensity::MediumHigh,
            Self::Nuclear => EmissionIntensity::Low,
            Self::Solar | Self::Wind | Self::Hydro => EmissionIntensity::VeryLow,
        }
    }
}

/// Kind of food consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Beef,
    DairyCheese,
    Pork,
    Chicken,
    Fish,
    ProcessedFood,
    DairyMilk,
    Vegetables,
    Grains,
    Fruits,
}

impl FoodType {
    pub const ALL: [Self; 10] = [
        Self::Beef,
        Self::DairyCheese,
        Self::Pork,
        Self::Chicken,
        Self::Fish,
        Self::ProcessedFood,
        Self::DairyMilk,
        Self::Vegetables,
        Self::Grains,
        Self::Fruits,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Beef => "Beef",
            Self::DairyCheese => "Cheese",
            Self::Pork => "Pork",
            Self::Chicken => "Chicken",
            Self::Fish => "Fish",
            Self::ProcessedFood => "Processed Food",
            Self::DairyMilk => "Milk",
            Self::Vegetables => "Vegetables",
            Self::Grains => "Grains",
            Self::Fruits => "Fruits",
        }
    }

    pub fn intensity(self) -> EmissionIntensity {
        match self {
            Self::Beef => EmissionIntensity::VeryHigh,
            Self::DairyCheese => EmissionIntensity::High,
            Self::Pork => EmissionIntensity::MediumHigh,
            Self::Chicken | Self::Fish | Self::ProcessedFood | Self::DairyMilk => {
                EmissionIntensity::Medium
            }
            Self::Vegetables | Self::Grains => EmissionIntensity::Low,
            Self::Fruits => EmissionIntensity::VeryLow,
        }
    }
}

/// Kind of waste produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteType {
    GeneralWaste,
    Hazardous,
    Compost,
    Recycling,
}

impl WasteType {
    pub const ALL: [Self; 4] = [
        Self::GeneralWaste,
        Self::Hazardous,
        Self::Compost,
        Self::Recycling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralWaste => "General Waste",
            Self::Hazardous => "Hazardous Waste",
            Self::Compost => "Compostable",
            Self::Recycling => "Recycling",
        }
    }

    pub fn intensity(self) -> EmissionIntensity {
        match self {
            Self::GeneralWaste => EmissionIntensity::Medium,
            Self::Hazardous => EmissionIntensity::VeryHigh,
            Self::Compost => EmissionIntensity::Low,
            Self::Recycling => EmissionIntensity::Negative,
        }
    }
}

/// How waste was disposed of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalMethod {
    Landfill,
    Incineration,
    Recycling,
    Composting,
}

impl DisposalMethod {
    pub const ALL: [Self; 4] = [
        Self::Landfill,
        Self::Incineration,
        Self::Recycling,
        Self::Composting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Landfill => "Landfill",
            Self::Incineration => "Incineration",
            Self::Recycling => "Recycling",
            Self::Composting => "Composting",
        }
    }

    pub fn intensity(self) -> EmissionIntensity {
        match self {
            Self::Landfill => EmissionIntensity::High,
            Self::Incineration => EmissionIntensity::Medium,
            Self::Recycling => EmissionIntensity::Negative,
            Self::Composting => EmissionIntensity::Low,
        }
    }
}

/// Category-specific detail fields; at most one of the required fields is
/// relevant per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_source: Option<EnergySource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_type: Option<WasteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposal_method: Option<DisposalMethod>,
}

impl ActivityDetails {
    pub fn transport(mode: TransportMode) -> Self {
        Self { transport_mode: Some(mode), ..Self::default() }
    }

    pub fn energy(source: EnergySource) -> Self {
        Self { energy_source: Some(source), ..Self::default() }
    }

    pub fn food(food_type: FoodType) -> Self {
        Self { food_type: Some(food_type), ..Self::default() }
    }

    pub fn waste(waste_type: WasteType) -> Self {
        Self { waste_type: Some(waste_type), ..Self::default() }
    }

    /// Whether the required detail for `category` is present
    pub fn has_required_detail(&self, category: Category) -> bool {
        match category {
            Category::Transport => self.transport_mode.is_some(),
            Category::Energy => self.energy_source.is_some(),
            Category::Food => self.food_type.is_some(),
            Category::Waste => self.waste_type.is_some(),
            Category::Other => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
