use crate::explanation::types::RiskExplanation;
use serde_json;

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &RiskExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &RiskExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ExplanationGenerator;
    use crate::scorer::RiskResult;

    fn blank_explanation() -> RiskExplanation {
        ExplanationGenerator::generate(&RiskResult {
            score: 0,
            contributors: vec![],
        })
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&blank_explanation()).unwrap();

        assert!(json.contains("\"score\": 0"));
        assert!(json.contains("\"label\": \"Low\""));
        assert!(json.contains("\"tier\": \"low\""));
        assert!(json.contains("\"high_risk_warning\": null"));
    }

    #[test]
    fn test_plan_keys_match_explanation_keys() {
        let json = JsonFormatter::format(&blank_explanation()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["plan"]["high_risk_warning"], false);
        assert!(value["top_contributors"].is_array());
        assert!(!json.contains("highRiskWarning"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&blank_explanation()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
    }

    #[test]
    fn test_round_trip() {
        let json = JsonFormatter::format(&blank_explanation()).unwrap();
        let parsed: RiskExplanation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.plan.approach, "Standard Airway Management");
    }
}
