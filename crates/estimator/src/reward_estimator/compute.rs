//! The estimator itself, plus the label-level entry points used by the form
//! and the agent protocol.

use crate::config::{DAYS_PER_MONTH, TOKENS_PER_KG_CO2E, TOKEN_PRICE};
use crate::error::InvalidInput;
use crate::waste_category::WasteCategory;

use super::types::{Estimate, EstimationInput, EstimationResult};

/// Estimate monthly CO2e reduction, tokens and income for one request.
///
/// Pure and deterministic. Only the organic category scales with weight;
/// every other category uses its flat daily figure.
pub fn estimate(input: &EstimationInput) -> EstimationResult {
    let profile = input.waste_category.profile();

    let co2_reduction_monthly_kg = profile.daily_co2.daily_kg(input.weight_kg) * DAYS_PER_MONTH;
    let tokens = co2_reduction_monthly_kg * TOKENS_PER_KG_CO2E;
    let token_value = tokens * TOKEN_PRICE;
    let product_income = profile.product_income;

    EstimationResult {
        co2_reduction_monthly_kg,
        tokens,
        token_value,
        product_income,
        total_income: product_income + token_value,
    }
}

/// Parse the weight field of the form (kg).
pub fn parse_weight(text: &str) -> Result<f64, InvalidInput> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InvalidInput::EmptyWeight);
    }
    let weight: f64 = text
        .parse()
        .map_err(|_| InvalidInput::UnparsableWeight(text.to_string()))?;
    validate_weight(weight)
}

/// Check a numeric weight: finite and non-negative.
pub fn validate_weight(weight_kg: f64) -> Result<f64, InvalidInput> {
    if !weight_kg.is_finite() {
        return Err(InvalidInput::NonFiniteWeight);
    }
    if weight_kg < 0.0 {
        return Err(InvalidInput::NegativeWeight(weight_kg));
    }
    // "-0" parses to -0.0; results must never carry a negative zero.
    if weight_kg == 0.0 {
        return Ok(0.0);
    }
    Ok(weight_kg)
}

fn resolve_category(label: &str) -> Result<WasteCategory, InvalidInput> {
    WasteCategory::from_label(label)
        .ok_or_else(|| InvalidInput::UnknownCategory(label.trim().to_string()))
}

fn into_estimate(
    category: Result<WasteCategory, InvalidInput>,
    weight: impl FnOnce() -> Result<f64, InvalidInput>,
) -> Estimate {
    let input = category.and_then(|waste_category| {
        Ok(EstimationInput {
            waste_category,
            weight_kg: weight()?,
        })
    });
    match input {
        Ok(input) => Estimate::Valid(estimate(&input)),
        Err(reason) => Estimate::Invalid { reason },
    }
}

/// Estimate from raw form values: a category tag and the weight text.
///
/// The category is checked before the weight, so a request with both wrong
/// reports the unknown category.
pub fn estimate_from_labels(category_label: &str, weight_text: &str) -> Estimate {
    into_estimate(resolve_category(category_label), || parse_weight(weight_text))
}

/// Like [`estimate_from_labels`] but with an already numeric weight.
pub fn estimate_labelled(category_label: &str, weight_kg: f64) -> Estimate {
    into_estimate(resolve_category(category_label), || {
        validate_weight(weight_kg)
    })
}
