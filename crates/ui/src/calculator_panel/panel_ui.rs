//! Calculator window rendering.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use estimator::reward_estimator::{CalculatorForm, LatestEstimate, RecomputeEstimate};
use estimator::WasteCategory;

use super::warnings::{estimate_severity, warning_color, WarningSeverity};
use super::{CalculatorPanelVisible, MAX_HOUSEHOLD_SIZE};

/// Renders the calculator form and its latest result.
pub fn calculator_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<CalculatorPanelVisible>,
    mut form: ResMut<CalculatorForm>,
    latest: Res<LatestEstimate>,
    mut requests: EventWriter<RecomputeEstimate>,
) {
    if !visible.0 {
        return;
    }
    let form = &mut *form;

    egui::Window::new("Kalkulator Pendapatan")
        .default_open(true)
        .default_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.small("Estimasi pendapatan dari pengelolaan sampah");
            ui.separator();

            // === Form ===
            ui.horizontal(|ui| {
                ui.label("Jumlah anggota keluarga:");
                ui.add(
                    egui::DragValue::new(&mut form.household_size).range(0..=MAX_HOUSEHOLD_SIZE),
                );
            });

            ui.horizontal(|ui| {
                ui.label("Jenis sampah:");
                egui::ComboBox::from_id_salt("waste_category")
                    .selected_text(form.category_label.as_str())
                    .show_ui(ui, |ui| {
                        for &category in WasteCategory::all() {
                            ui.selectable_value(
                                &mut form.category_label,
                                category.label().to_string(),
                                category.label(),
                            );
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Berat sampah (kg/hari):");
                ui.add(egui::TextEdit::singleline(&mut form.weight_text).desired_width(80.0));
            });

            if ui.button("Hitung").clicked() {
                requests.send(RecomputeEstimate);
            }
            ui.separator();

            // === Result ===
            ui.heading("Estimasi Bulanan");
            let severity = estimate_severity(&latest.estimate);
            if let Some(reason) = &latest.display.invalid_reason {
                ui.colored_label(
                    warning_color(severity),
                    format!("Input tidak valid: {reason}"),
                );
            } else if severity == WarningSeverity::Low {
                ui.colored_label(warning_color(severity), "Belum ada pendapatan");
            }

            for (label, value) in latest.display.rows() {
                stat_line(ui, label, value);
            }
            ui.small(format!("Untuk {} anggota keluarga", latest.household_size));
        });
}

/// Renders a label/value pair with the value right-aligned.
fn stat_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("  {label}:"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}
