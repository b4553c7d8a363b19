//! Keyboard-walk check - detects sequences of physically adjacent keys.

use crate::blocklist::ReferenceData;
use crate::types::{RuleCheck, Severity};

/// Fails when the lower-cased password contains any known keyboard walk.
pub fn keyboard_walk_check(password: &str, data: &ReferenceData) -> RuleCheck {
    let has_walk = data.has_keyboard_walk(password);

    RuleCheck {
        id: "no_keyboard_walk".to_string(),
        label: "No keyboard sequence".to_string(),
        description: if has_walk {
            "Contains a sequence of adjacent keys (e.g. qwerty, asdf, 12345)"
        } else {
            "No keyboard sequence detected"
        }
        .to_string(),
        passed: !has_walk,
        score: if has_walk { 0.0 } else { 1.5 },
        max_score: 1.5,
        nist_ref: "NIST SP 800-63B §5.1.1.2".to_string(),
        severity: Severity::Warning,
    }
}
