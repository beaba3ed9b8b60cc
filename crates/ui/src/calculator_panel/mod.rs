//! Reward calculator window.
//!
//! Stands in for the web form: household size, waste category and weight go
//! in, the "Hitung" button sends [`RecomputeEstimate`], and the five result
//! rows show whatever [`LatestEstimate`] currently holds.
//!
//! [`RecomputeEstimate`]: estimator::reward_estimator::RecomputeEstimate
//! [`LatestEstimate`]: estimator::reward_estimator::LatestEstimate

mod panel_ui;
mod tests;
mod warnings;

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use estimator::reward_estimator::EstimatorSet;

pub use panel_ui::calculator_panel_ui;
pub use warnings::{estimate_severity, warning_color, WarningSeverity};

/// Largest household size the form accepts.
pub const MAX_HOUSEHOLD_SIZE: u32 = 50;

// =============================================================================
// Visibility resource
// =============================================================================

/// Whether the calculator window is shown. Toggle with 'K'.
#[derive(Resource)]
pub struct CalculatorPanelVisible(pub bool);

impl Default for CalculatorPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

// =============================================================================
// Keybind system
// =============================================================================

/// Toggles the calculator with 'K'. Ignored while egui has keyboard focus,
/// so typing a weight never hides the window. Uses `Option<Res>` so the
/// system no-ops when no input plugin is present.
pub fn calculator_keybind(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut visible: ResMut<CalculatorPanelVisible>,
    mut contexts: EguiContexts,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyK) {
        visible.0 = !visible.0;
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct CalculatorPanelPlugin;

impl Plugin for CalculatorPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CalculatorPanelVisible>().add_systems(
            Update,
            (calculator_keybind, calculator_panel_ui)
                .chain()
                .in_set(EstimatorSet::Input),
        );
    }
}
