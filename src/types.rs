//! Result model shared by the analysis engine and the transport layer.

use serde::{Deserialize, Serialize};

/// Severity class of a rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Qualitative strength level derived from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Critical,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Display label shown to end users.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "CRITICA",
            StrengthLevel::Weak => "DEBOLE",
            StrengthLevel::Fair => "DISCRETA",
            StrengthLevel::Good => "BUONA",
            StrengthLevel::Strong => "ECCELLENTE",
        }
    }
}

/// One evaluated rule with its earned and available points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub id: String,
    pub label: String,
    pub description: String,
    pub passed: bool,
    pub score: f64,
    pub max_score: f64,
    pub nist_ref: String,
    pub severity: Severity,
}

/// Full analysis report for one candidate password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub password_length: usize,
    pub entropy_bits: f64,
    pub charset_size: u32,
    pub estimated_crack_time: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub level: StrengthLevel,
    pub level_label: String,
    pub checks: Vec<RuleCheck>,
    pub recommendations: Vec<String>,
}

/// Transport request body: `{"password": "..."}`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StrengthLevel::Strong).unwrap(), "\"strong\"");
        assert_eq!(serde_json::to_string(&StrengthLevel::Critical).unwrap(), "\"critical\"");
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(StrengthLevel::Critical.label(), "CRITICA");
        assert_eq!(StrengthLevel::Weak.label(), "DEBOLE");
        assert_eq!(StrengthLevel::Fair.label(), "DISCRETA");
        assert_eq!(StrengthLevel::Good.label(), "BUONA");
        assert_eq!(StrengthLevel::Strong.label(), "ECCELLENTE");
    }

    #[test]
    fn test_analyze_request_from_json() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"password":"hunter2"}"#).unwrap();
        assert_eq!(req.password, "hunter2");
    }
}
