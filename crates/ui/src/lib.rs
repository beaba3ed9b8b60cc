use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod calculator_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_theme)
            .add_plugins(calculator_panel::CalculatorPanelPlugin);
    }
}
