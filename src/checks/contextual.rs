//! Contextual-word check - detects terms tied to the authentication domain.

use crate::blocklist::ReferenceData;
use crate::types::{RuleCheck, Severity};

/// Fails when the lower-cased password contains any contextual word.
pub fn contextual_check(password: &str, data: &ReferenceData) -> RuleCheck {
    let has_contextual = data.has_contextual_word(password);

    RuleCheck {
        id: "no_contextual".to_string(),
        label: "No contextual word".to_string(),
        description: if has_contextual {
            "Contains words tied to the system (password, login, admin...)"
        } else {
            "No contextual word detected"
        }
        .to_string(),
        passed: !has_contextual,
        score: if has_contextual { 0.0 } else { 1.0 },
        max_score: 1.0,
        nist_ref: "NIST SP 800-63B §5.1.1.2".to_string(),
        severity: Severity::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ReferenceData {
        ReferenceData::new(
            vec![],
            vec![],
            vec!["password".into(), "login".into(), "admin".into()],
        )
    }

    #[test]
    fn test_contextual_check_substring_match() {
        let check = contextual_check("SuperAdmin2024!", &data());
        assert!(!check.passed);
        assert_eq!(check.score, 0.0);
    }

    #[test]
    fn test_contextual_check_no_match() {
        let check = contextual_check("CorrectHorseBattery", &data());
        assert!(check.passed);
        assert_eq!(check.score, 1.0);
    }
}
