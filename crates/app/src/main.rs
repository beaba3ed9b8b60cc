use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod agent_mode;

fn main() {
    // Headless JSON mode: no window, no egui.
    if std::env::args().any(|arg| arg == "--agent") {
        agent_mode::run_agent_mode();
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Waste Reward Calculator".to_string(),
            resolution: (480.0, 560.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // The calculator only changes on input, so idle between events.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_secs(1)),
    })
    .add_systems(Startup, spawn_camera)
    .add_plugins((estimator::EstimatorPlugin, ui::UiPlugin));

    app.run();
}

/// egui draws on top of a camera's render target, so one must exist.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
