//! Value types for a single reward estimation.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::waste_category::WasteCategory;

/// One calculator request after the form values have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub waste_category: WasteCategory,
    /// Waste weight in kg per day. Non-negative, no upper bound.
    pub weight_kg: f64,
}

/// Derived monthly economic and environmental figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimationResult {
    /// CO2e avoided per month (kg).
    pub co2_reduction_monthly_kg: f64,
    /// Reward tokens earned per month.
    pub tokens: f64,
    /// Monetary value of `tokens` (Rupiah).
    pub token_value: f64,
    /// Flat income from the processed product (Rupiah).
    pub product_income: f64,
    /// `product_income + token_value` (Rupiah).
    pub total_income: f64,
}

impl EstimationResult {
    /// The degraded value reported for invalid requests.
    pub const ZERO: EstimationResult = EstimationResult {
        co2_reduction_monthly_kg: 0.0,
        tokens: 0.0,
        token_value: 0.0,
        product_income: 0.0,
        total_income: 0.0,
    };

    /// Returns `true` when every field is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [
            self.co2_reduction_monthly_kg,
            self.tokens,
            self.token_value,
            self.product_income,
            self.total_income,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Outcome of estimating from raw form values.
///
/// Keeps "zero waste" and "bad input" apart while still offering the
/// all-zero numeric fallback through [`Estimate::result`].
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    Valid(EstimationResult),
    Invalid { reason: InvalidInput },
}

impl Default for Estimate {
    fn default() -> Self {
        Estimate::Valid(EstimationResult::ZERO)
    }
}

impl Estimate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Estimate::Valid(_))
    }

    /// Numeric result; all zeros when the input was invalid.
    pub fn result(&self) -> EstimationResult {
        match self {
            Estimate::Valid(result) => *result,
            Estimate::Invalid { .. } => EstimationResult::ZERO,
        }
    }

    pub fn invalid_reason(&self) -> Option<&InvalidInput> {
        match self {
            Estimate::Valid(_) => None,
            Estimate::Invalid { reason } => Some(reason),
        }
    }
}
