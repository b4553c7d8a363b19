//! Length check - NIST minimum-length tiers.

use crate::types::{RuleCheck, Severity};

/// Scores the password length against the NIST SP 800-63B tiers.
///
/// Length is counted in Unicode code points, not bytes.
pub fn length_check(password: &str) -> RuleCheck {
    let length = password.chars().count();

    let (score, passed, description) = if length >= 20 {
        (
            3.0,
            true,
            format!("Length {length} characters - excellent (>=20 recommended)"),
        )
    } else if length >= 15 {
        (
            2.5,
            true,
            format!("Length {length} characters - great (>=15 advised by NIST)"),
        )
    } else if length >= 8 {
        (
            1.5,
            true,
            format!("Length {length} characters - acceptable (>=8 is the NIST minimum)"),
        )
    } else {
        (
            0.0,
            false,
            format!("Length {length} characters - insufficient (NIST minimum: 8)"),
        )
    };

    RuleCheck {
        id: "length".to_string(),
        label: "Password length".to_string(),
        description,
        passed,
        score,
        max_score: 3.0,
        nist_ref: "NIST SP 800-63B §5.1.1.1".to_string(),
        severity: Severity::Critical,
    }
}
