#[cfg(test)]
mod tests {
    use estimator::error::InvalidInput;
    use estimator::reward_estimator::{Estimate, EstimationResult};
    use estimator::estimate_from_labels;

    use crate::calculator_panel::{estimate_severity, warning_color, WarningSeverity};

    #[test]
    fn test_invalid_estimate_is_high_severity() {
        let est = Estimate::Invalid {
            reason: InvalidInput::EmptyWeight,
        };
        assert_eq!(estimate_severity(&est), WarningSeverity::High);
    }

    #[test]
    fn test_zero_valid_estimate_is_low_severity() {
        let est = Estimate::Valid(EstimationResult::ZERO);
        assert_eq!(estimate_severity(&est), WarningSeverity::Low);
        assert_eq!(
            estimate_severity(&estimate_from_labels("Organik", "0")),
            WarningSeverity::Low
        );
    }

    #[test]
    fn test_earning_estimate_has_no_warning() {
        let est = estimate_from_labels("Residu", "1");
        assert_eq!(estimate_severity(&est), WarningSeverity::None);
    }

    #[test]
    fn test_warning_colors_are_distinct() {
        let none = warning_color(WarningSeverity::None);
        let low = warning_color(WarningSeverity::Low);
        let high = warning_color(WarningSeverity::High);
        assert_ne!(none, low);
        assert_ne!(low, high);
        assert_ne!(none, high);
    }
}
