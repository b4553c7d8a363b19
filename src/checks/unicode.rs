//! Unicode bonus check - purely additive, never penalizes.

use crate::types::{RuleCheck, Severity};

/// Awards a bonus when any code point above 127 is present.
pub fn unicode_check(password: &str) -> RuleCheck {
    let has_unicode = password.chars().any(|c| (c as u32) > 127);

    RuleCheck {
        id: "unicode".to_string(),
        label: "Unicode support (bonus)".to_string(),
        description: if has_unicode {
            "Unicode characters detected - maximum entropy expansion"
        } else {
            "Standard ASCII characters only (Unicode supported and encouraged)"
        }
        .to_string(),
        passed: true,
        score: if has_unicode { 0.5 } else { 0.0 },
        max_score: 0.5,
        nist_ref: "NIST SP 800-63B §5.1.1.1".to_string(),
        severity: Severity::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_check_bonus() {
        let check = unicode_check("pässword");
        assert!(check.passed);
        assert_eq!(check.score, 0.5);
    }

    #[test]
    fn test_unicode_check_ascii_only() {
        let check = unicode_check("password");
        assert!(check.passed);
        assert_eq!(check.score, 0.0);
    }
}
