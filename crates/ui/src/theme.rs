use bevy_egui::{egui, EguiContexts};

/// Accent used for buttons, selection and positive figures.
pub const LEAF_GREEN: egui::Color32 = egui::Color32::from_rgb(76, 175, 110);

pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark moss background
    let panel = egui::Color32::from_rgb(28, 36, 32);
    let inactive = egui::Color32::from_rgb(44, 58, 50);
    let hover = egui::Color32::from_rgb(60, 86, 70);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = LEAF_GREEN;
    style.visuals.widgets.active.weak_bg_fill = LEAF_GREEN;

    style.visuals.selection.bg_fill = LEAF_GREEN;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, LEAF_GREEN);

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}
