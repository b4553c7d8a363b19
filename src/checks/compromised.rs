//! Compromised-password check against the breach blocklist.

use crate::blocklist::ReferenceData;
use crate::types::{RuleCheck, Severity};

/// Checks membership of the lower-cased password in the compromised set.
pub fn compromised_check(password: &str, data: &ReferenceData) -> RuleCheck {
    let is_common = data.is_compromised(password);

    RuleCheck {
        id: "not_compromised".to_string(),
        label: "Not a compromised password".to_string(),
        description: if is_common {
            "Found in the list of commonly breached passwords (HIBP / NIST blocklist)"
        } else {
            "Not found in known compromised password lists"
        }
        .to_string(),
        passed: !is_common,
        score: if is_common { 0.0 } else { 3.0 },
        max_score: 3.0,
        nist_ref: "NIST SP 800-63B §5.1.1.2".to_string(),
        severity: Severity::Critical,
    }
}
