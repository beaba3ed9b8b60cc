// ---------------------------------------------------------------------------
// InvalidInput: why a calculator request could not be estimated
// ---------------------------------------------------------------------------

use std::fmt;

/// Reasons a form submission cannot produce a real estimate.
///
/// The estimator never fails outright: an invalid request degrades to an
/// all-zero result tagged with one of these, and the caller decides whether
/// to show a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The weight field was empty.
    EmptyWeight,
    /// The weight text is not a decimal number.
    UnparsableWeight(String),
    /// The weight parsed to infinity or NaN.
    NonFiniteWeight,
    /// The weight is below zero.
    NegativeWeight(f64),
    /// The category tag is not one of the known categories.
    UnknownCategory(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptyWeight => write!(f, "Waste weight is required"),
            InvalidInput::UnparsableWeight(text) => {
                write!(f, "Waste weight is not a number: {text:?}")
            }
            InvalidInput::NonFiniteWeight => write!(f, "Waste weight must be a finite number"),
            InvalidInput::NegativeWeight(kg) => {
                write!(f, "Waste weight cannot be negative: {kg} kg")
            }
            InvalidInput::UnknownCategory(label) => {
                write!(f, "Unknown waste category: {label:?}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_unparsable() {
        let err = InvalidInput::UnparsableWeight("abc".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("not a number"), "got: {msg}");
        assert!(msg.contains("abc"), "got: {msg}");
    }

    #[test]
    fn test_invalid_input_display_negative() {
        let err = InvalidInput::NegativeWeight(-2.5);
        let msg = format!("{err}");
        assert!(msg.contains("negative"), "got: {msg}");
        assert!(msg.contains("-2.5"), "got: {msg}");
    }

    #[test]
    fn test_invalid_input_display_unknown_category() {
        let err = InvalidInput::UnknownCategory("Kaca".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Unknown waste category"), "got: {msg}");
        assert!(msg.contains("Kaca"), "got: {msg}");
    }

    #[test]
    fn test_invalid_input_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(InvalidInput::EmptyWeight);
        assert!(err.source().is_none());
        assert!(err.to_string().contains("required"));
    }
}
