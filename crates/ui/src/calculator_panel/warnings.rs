//! Status colouring for the calculator result.

use bevy_egui::egui;

use estimator::reward_estimator::Estimate;

/// How loudly the result area should flag the current estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    None,
    /// Valid input that earns nothing (e.g. 0 kg organic).
    Low,
    /// Input was rejected; the figures are the zero fallback.
    High,
}

pub fn estimate_severity(estimate: &Estimate) -> WarningSeverity {
    match estimate {
        Estimate::Invalid { .. } => WarningSeverity::High,
        Estimate::Valid(result) if result.total_income <= 0.0 => WarningSeverity::Low,
        Estimate::Valid(_) => WarningSeverity::None,
    }
}

pub fn warning_color(severity: WarningSeverity) -> egui::Color32 {
    match severity {
        WarningSeverity::None => egui::Color32::from_rgb(80, 200, 80),
        WarningSeverity::Low => egui::Color32::from_rgb(220, 200, 50),
        WarningSeverity::High => egui::Color32::from_rgb(255, 60, 60),
    }
}
