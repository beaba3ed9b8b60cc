//! Static CO2e and income constants per waste category.

use serde::{Deserialize, Serialize};

use crate::config::ORGANIC_CO2E_PER_KG;
use crate::waste_category::WasteCategory;

/// How a category's daily CO2e reduction is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "kg", rename_all = "snake_case")]
pub enum DailyCo2 {
    /// Scaled by waste weight: kg CO2e per kg of waste per day.
    PerKg(f64),
    /// A flat daily figure, whatever the weight.
    Flat(f64),
}

impl DailyCo2 {
    /// Daily CO2e reduction (kg) for the given waste weight.
    pub fn daily_kg(self, weight_kg: f64) -> f64 {
        match self {
            DailyCo2::PerKg(factor) => weight_kg * factor,
            DailyCo2::Flat(kg) => kg,
        }
    }

    pub fn is_weight_scaled(self) -> bool {
        matches!(self, DailyCo2::PerKg(_))
    }
}

/// Fixed configuration for one waste category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// Daily CO2e reduction rule.
    pub daily_co2: DailyCo2,
    /// Flat monthly income from selling the processed product (Rupiah).
    pub product_income: f64,
}

impl CategoryProfile {
    pub fn for_category(category: WasteCategory) -> Self {
        let (daily_co2, product_income) = match category {
            WasteCategory::Organic => (DailyCo2::PerKg(ORGANIC_CO2E_PER_KG), 0.0),
            WasteCategory::NonOrganic => (DailyCo2::Flat(1.176), 67_200.0),
            WasteCategory::UpcycledProduct => (DailyCo2::Flat(1.5), 600_000.0),
            WasteCategory::ArtProduct => (DailyCo2::Flat(0.75), 600_000.0),
            WasteCategory::Hazardous => (DailyCo2::Flat(0.294), 30_000.0),
            WasteCategory::Residue => (DailyCo2::Flat(0.294), 4_500.0),
            WasteCategory::EWaste => (DailyCo2::Flat(0.15), 60_000.0),
        };
        Self {
            daily_co2,
            product_income,
        }
    }
}
