use bevy::prelude::*;

pub mod agent_protocol;
pub mod category_profile;
pub mod config;
pub mod display;
pub mod error;
pub mod reward_estimator;
pub mod waste_category;

pub use error::InvalidInput;
pub use reward_estimator::{
    estimate, estimate_from_labels, Estimate, EstimationInput, EstimationResult,
};
pub use waste_category::WasteCategory;

/// Registers the calculator form state, the recompute trigger and the
/// systems that keep [`reward_estimator::LatestEstimate`] current.
pub struct EstimatorPlugin;

impl Plugin for EstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(reward_estimator::RewardEstimatorPlugin);
        info!("Reward estimator ready: {} waste categories", WasteCategory::all().len());
    }
}
