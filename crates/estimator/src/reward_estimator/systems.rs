//! Form state and the systems that keep the latest estimate current.

use bevy::prelude::*;

use crate::config::{DEFAULT_HOUSEHOLD_SIZE, DEFAULT_WEIGHT_TEXT};
use crate::display::EstimateDisplay;
use crate::waste_category::WasteCategory;

use super::compute::estimate_from_labels;
use super::types::Estimate;

// =============================================================================
// Form input
// =============================================================================

/// Values currently entered in the calculator form.
///
/// Kept as raw text where the user types freely, so bad input reaches the
/// estimator and gets flagged instead of being silently coerced.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    /// Number of people in the household. Shown and reported, not used in
    /// the arithmetic.
    pub household_size: u32,
    /// Selected category tag, normally a [`WasteCategory::label`].
    pub category_label: String,
    /// Waste weight in kg/day as typed.
    pub weight_text: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            household_size: DEFAULT_HOUSEHOLD_SIZE,
            category_label: WasteCategory::default().label().to_string(),
            weight_text: DEFAULT_WEIGHT_TEXT.to_string(),
        }
    }
}

/// "Compute now" trigger. Carries no payload; the form is read when handled.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RecomputeEstimate;

// =============================================================================
// Output
// =============================================================================

/// Most recent estimate and its rendered text.
#[derive(Resource, Debug, Clone, Default)]
pub struct LatestEstimate {
    pub estimate: Estimate,
    pub display: EstimateDisplay,
    /// Household size the estimate was computed for.
    pub household_size: u32,
    /// Incremented on every recompute; 0 means nothing computed yet.
    pub revision: u64,
}

// =============================================================================
// Systems
// =============================================================================

/// Startup: compute once eagerly so the panel never shows an empty result.
pub fn request_initial_estimate(mut requests: EventWriter<RecomputeEstimate>) {
    requests.send(RecomputeEstimate);
}

/// Recompute from the current form when at least one trigger is pending.
/// Several triggers in one frame collapse into a single recompute.
pub fn recompute_estimate(
    mut requests: EventReader<RecomputeEstimate>,
    form: Res<CalculatorForm>,
    mut latest: ResMut<LatestEstimate>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let estimate = estimate_from_labels(&form.category_label, &form.weight_text);
    match &estimate {
        Estimate::Valid(result) => debug!(
            "Estimate for {:?} @ {:?} kg: {:.2} kg CO2e/month, total income {:.0}",
            form.category_label,
            form.weight_text,
            result.co2_reduction_monthly_kg,
            result.total_income
        ),
        Estimate::Invalid { reason } => warn!(
            "Invalid calculator input ({:?} @ {:?}), showing zero result: {}",
            form.category_label, form.weight_text, reason
        ),
    }

    latest.display = EstimateDisplay::from_estimate(&estimate);
    latest.estimate = estimate;
    latest.household_size = form.household_size;
    latest.revision += 1;
}
