//! Waste-to-reward estimation.
//!
//! Maps a waste category and a daily waste weight to monthly figures:
//! - CO2e reduction: daily figure x 30 days. Organic waste scales with weight
//!   (1.5 kg CO2e per 1.96 kg); every other category is a flat daily figure.
//! - Tokens: 10 per kg CO2e.
//! - Token value: 50 per token.
//! - Total income: flat product income + token value.
//!
//! Invalid input (unknown category, bad weight) never fails: it yields an
//! all-zero result tagged [`Estimate::Invalid`].

pub mod compute;
pub mod systems;
pub mod types;

pub use compute::*;
pub use systems::*;
pub use types::*;

use bevy::prelude::*;

/// Ordering for the calculator systems within `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorSet {
    /// Systems that edit [`CalculatorForm`] or send [`RecomputeEstimate`].
    Input,
    /// The recompute itself.
    Compute,
}

pub struct RewardEstimatorPlugin;

impl Plugin for RewardEstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorForm>()
            .init_resource::<LatestEstimate>()
            .add_event::<RecomputeEstimate>()
            .configure_sets(Update, (EstimatorSet::Input, EstimatorSet::Compute).chain())
            .add_systems(Startup, request_initial_estimate)
            .add_systems(Update, recompute_estimate.in_set(EstimatorSet::Compute));
    }
}
