//! Agent text protocol types for the `--agent` headless mode.
//!
//! Newline-delimited JSON over stdin/stdout lets scripts and test harnesses
//! run estimates without the calculator window.
//!
//! These types live in the `estimator` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::category_profile::CategoryProfile;
use crate::display::EstimateDisplay;
use crate::reward_estimator::{Estimate, EstimationResult};
use crate::waste_category::WasteCategory;

// ---------------------------------------------------------------------------
// Commands (stdin → estimator)
// ---------------------------------------------------------------------------

/// Weight as sent by the agent: a JSON number, or the raw text of a form field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeightField {
    Number(f64),
    Text(String),
}

impl WeightField {
    /// Text to put in the form's weight field. Numbers use the shortest
    /// representation that parses back to the same value.
    pub fn as_form_text(&self) -> String {
        match self {
            WeightField::Number(kg) => kg.to_string(),
            WeightField::Text(text) => text.clone(),
        }
    }
}

/// A single command sent by the external agent over stdin.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Estimate rewards for one calculator submission.
    #[serde(rename = "estimate")]
    Estimate {
        category: String,
        weight: WeightField,
        #[serde(default)]
        household_size: Option<u32>,
    },

    /// List the known waste categories and their profiles.
    #[serde(rename = "categories")]
    Categories,

    /// Gracefully shut down the agent session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (estimator → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// One estimate as reported to the agent.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u32>,
    pub result: EstimationResult,
    pub display: EstimateDisplay,
}

impl EstimateReport {
    pub fn new(estimate: &Estimate, household_size: Option<u32>) -> Self {
        Self {
            valid: estimate.is_valid(),
            reason: estimate.invalid_reason().map(|r| r.to_string()),
            household_size,
            result: estimate.result(),
            display: EstimateDisplay::from_estimate(estimate),
        }
    }
}

/// Entry in the `categories` listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub profile: CategoryProfile,
}

impl CategoryInfo {
    pub fn all() -> Vec<CategoryInfo> {
        WasteCategory::all()
            .iter()
            .map(|&c| CategoryInfo {
                key: c.key(),
                label: c.label(),
                profile: c.profile(),
            })
            .collect()
    }
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The estimator is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// Result of an `estimate` command, valid or not.
    #[serde(rename = "estimate")]
    Estimate(EstimateReport),

    #[serde(rename = "categories")]
    Categories { categories: Vec<CategoryInfo> },

    /// The command line could not be understood.
    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward_estimator::{estimate_from_labels, estimate_labelled};

    #[test]
    fn deserialize_estimate_command_numeric_weight() {
        let json = r#"{"cmd":"estimate","category":"Organik","weight":2.5}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        if let AgentCommand::Estimate {
            category,
            weight,
            household_size,
        } = cmd
        {
            assert_eq!(category, "Organik");
            assert_eq!(weight, WeightField::Number(2.5));
            assert_eq!(household_size, None);
        } else {
            panic!("expected Estimate");
        }
    }

    #[test]
    fn deserialize_estimate_command_text_weight() {
        let json =
            r#"{"cmd":"estimate","category":"B3","weight":"1,5","household_size":3}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        if let AgentCommand::Estimate {
            weight,
            household_size,
            ..
        } = cmd
        {
            assert_eq!(weight, WeightField::Text("1,5".to_string()));
            assert_eq!(household_size, Some(3));
        } else {
            panic!("expected Estimate");
        }
    }

    #[test]
    fn deserialize_categories_and_quit() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"categories"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Categories));
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"quit"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Quit));
    }

    #[test]
    fn deserialize_unknown_command_fails() {
        let result = serde_json::from_str::<AgentCommand>(r#"{"cmd":"mint"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn weight_field_form_text() {
        assert_eq!(WeightField::Number(2.5).as_form_text(), "2.5");
        assert_eq!(WeightField::Number(5.0).as_form_text(), "5");
        assert_eq!(WeightField::Text(" 1,5 ".to_string()).as_form_text(), " 1,5 ");
    }

    #[test]
    fn numeric_and_text_weights_estimate_the_same() {
        for kg in [0.0, 0.1, 1.96, 12.75, 1e6] {
            let text = WeightField::Number(kg).as_form_text();
            assert_eq!(
                estimate_from_labels("Organik", &text),
                estimate_labelled("Organik", kg),
                "kg={kg}"
            );
        }
        // Comma decimals are not numbers; they are flagged, not guessed.
        let bad = estimate_from_labels("Organik", &WeightField::Text("1,5".into()).as_form_text());
        assert!(!bad.is_valid());
    }

    #[test]
    fn serialize_ready_response() {
        let resp = make_response(ResponsePayload::Ready);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"protocol_version\":1"));
        assert!(json.contains("\"type\":\"ready\""));
    }

    #[test]
    fn serialize_valid_estimate_response() {
        let estimate = estimate_from_labels("Produk Upcycle", "5");
        let resp = make_response(ResponsePayload::Estimate(EstimateReport::new(
            &estimate,
            Some(4),
        )));
        let value: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["type"], "estimate");
        assert_eq!(value["valid"], true);
        assert_eq!(value["household_size"], 4);
        assert_eq!(value["display"]["total_income"], "622.500");
        assert!(value.get("reason").is_none());
        let total = value["result"]["total_income"].as_f64().unwrap();
        assert!((total - 622_500.0).abs() < 1e-6);
    }

    #[test]
    fn serialize_invalid_estimate_response() {
        let estimate = estimate_from_labels("Unknown", "5");
        let resp = make_response(ResponsePayload::Estimate(EstimateReport::new(
            &estimate, None,
        )));
        let value: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["valid"], false);
        assert!(value["reason"].as_str().unwrap().contains("Unknown"));
        assert_eq!(value["result"]["total_income"], 0.0);
        assert!(value.get("household_size").is_none());
    }

    #[test]
    fn serialize_categories_response() {
        let resp = make_response(ResponsePayload::Categories {
            categories: CategoryInfo::all(),
        });
        let value: serde_json::Value = serde_json::to_value(&resp).unwrap();
        let list = value["categories"].as_array().unwrap();
        assert_eq!(list.len(), 7);
        assert_eq!(list[0]["key"], "organic");
        assert_eq!(list[0]["profile"]["daily_co2"]["kind"], "per_kg");
        assert_eq!(list[1]["label"], "Non-Organik");
        assert_eq!(list[1]["profile"]["product_income"], 67_200.0);
    }

    #[test]
    fn serialize_error_and_goodbye() {
        let json = serde_json::to_string(&make_response(ResponsePayload::Error {
            message: "Parse error".to_string(),
        }))
        .unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("Parse error"));

        let json = serde_json::to_string(&make_response(ResponsePayload::Goodbye)).unwrap();
        assert!(json.contains("\"type\":\"goodbye\""));
    }
}
